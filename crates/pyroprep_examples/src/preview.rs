//! PNG preview helpers shared by the example binaries.
//!
//! The pipeline's real consumers are an offline renderer (fields) and its
//! color-table loader; these helpers only exist so the examples produce
//! something viewable. Colors coming out of a ramp carry emissive multipliers,
//! so they are tone-mapped against the table's peak component before being
//! quantized to 8-bit.
use anyhow::{bail, Result};
use glam::Vec3;
use image::{Rgb, RgbImage};
use pyroprep::prelude::{ColorTable, ScalarField};

/// Initializes a tracing subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Channel order expected by the image consumer.
///
/// Some upstream buffers arrive blue-first and have to be permuted before
/// encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl ChannelOrder {
    fn arrange(&self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => [r, g, b],
            ChannelOrder::Bgr => [b, g, r],
        }
    }
}

fn quantize(color: Vec3, peak: f32) -> [u8; 3] {
    let scaled = color / peak * 255.0;
    [
        scaled.x.clamp(0.0, 255.0) as u8,
        scaled.y.clamp(0.0, 255.0) as u8,
        scaled.z.clamp(0.0, 255.0) as u8,
    ]
}

fn table_peak(table: &ColorTable) -> f32 {
    let peak = table
        .data
        .iter()
        .map(|c| c.max_element())
        .fold(0.0, f32::max);
    if peak > 0.0 {
        peak
    } else {
        1.0
    }
}

/// Writes the axis-0 slice `slice` of a fraction-valued field as a PNG,
/// coloring each element through `table`.
///
/// Field values are treated as fractions and clamped to `[0, 1]` before the
/// table lookup.
pub fn save_slice_colored(
    field: &ScalarField,
    slice: usize,
    table: &ColorTable,
    order: ChannelOrder,
    path: &str,
) -> Result<()> {
    if slice >= field.shape.xs {
        bail!("slice {} out of range for extent {}", slice, field.shape.xs);
    }
    if table.is_empty() {
        bail!("color table is empty");
    }

    let peak = table_peak(table);
    let mut img = RgbImage::new(field.shape.zs as u32, field.shape.ys as u32);
    for j in 0..field.shape.ys {
        for k in 0..field.shape.zs {
            let t = field.get(slice, j, k).clamp(0.0, 1.0);
            let idx = ((t * table.len() as f32) as usize).min(table.len() - 1);
            let rgb = quantize(table.data[idx], peak);
            img.put_pixel(k as u32, j as u32, Rgb(order.arrange(rgb)));
        }
    }
    img.save(path)?;
    Ok(())
}

/// Writes the axis-0 slice `slice` of a field as a grayscale PNG, scaled so
/// the slice's largest value maps to full white.
pub fn save_slice_gray(field: &ScalarField, slice: usize, path: &str) -> Result<()> {
    if slice >= field.shape.xs {
        bail!("slice {} out of range for extent {}", slice, field.shape.xs);
    }

    let mut peak = 0.0f32;
    for j in 0..field.shape.ys {
        for k in 0..field.shape.zs {
            peak = peak.max(field.get(slice, j, k));
        }
    }
    let peak = if peak > 0.0 { peak } else { 1.0 };

    let mut img = RgbImage::new(field.shape.zs as u32, field.shape.ys as u32);
    for j in 0..field.shape.ys {
        for k in 0..field.shape.zs {
            let v = (field.get(slice, j, k) / peak * 255.0).clamp(0.0, 255.0) as u8;
            img.put_pixel(k as u32, j as u32, Rgb([v, v, v]));
        }
    }
    img.save(path)?;
    Ok(())
}

/// Writes a color table as a `len x height` strip PNG, one column per entry.
pub fn save_ramp_strip(
    table: &ColorTable,
    height: u32,
    order: ChannelOrder,
    path: &str,
) -> Result<()> {
    if table.is_empty() {
        bail!("color table is empty");
    }

    let peak = table_peak(table);
    let mut img = RgbImage::new(table.len() as u32, height);
    for (x, color) in table.data.iter().enumerate() {
        let rgb = quantize(*color, peak);
        for y in 0..height {
            img.put_pixel(x as u32, y, Rgb(order.arrange(rgb)));
        }
    }
    img.save(path)?;
    Ok(())
}
