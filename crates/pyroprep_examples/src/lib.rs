#![forbid(unsafe_code)]

mod preview;

pub use preview::{
    init_tracing, save_ramp_strip, save_slice_colored, save_slice_gray, ChannelOrder,
};
