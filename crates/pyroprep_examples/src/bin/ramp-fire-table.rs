use glam::Vec3;
use pyroprep::prelude::*;
use pyroprep_examples::{init_tracing, save_ramp_strip, ChannelOrder};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let table = ColorRamp::fire_default().build_table(256);
    save_ramp_strip(&table, 32, ChannelOrder::Rgb, "ramp-fire-table.png")?;
    // The same strip in the blue-first order some image consumers expect.
    save_ramp_strip(&table, 32, ChannelOrder::Bgr, "ramp-fire-table-bgr.png")?;

    // Ramps are plain configuration; any strictly increasing knot list works.
    let mono = ColorRamp::new(vec![
        ControlPoint::new(0.0, Vec3::ZERO),
        ControlPoint::new(1.0, Vec3::splat(80.0)),
    ])?;
    save_ramp_strip(&mono.build_table(256), 32, ChannelOrder::Rgb, "ramp-linear-gray.png")?;
    Ok(())
}
