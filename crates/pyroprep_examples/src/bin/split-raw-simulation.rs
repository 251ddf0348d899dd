use pyroprep::prelude::*;
use pyroprep_examples::{init_tracing, save_slice_colored, save_slice_gray, ChannelOrder};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Synthetic combustion plume in the exporter's axis order, Kelvin-like units.
    let exported = synthetic_plume(GridShape::new(48, 64, 64));
    let field = to_render_order(&exported, 0.0);

    let (fire, smoke) = split(&field, &PolicyPair::raw_simulation());
    let smoke = normalize(&smoke, 100.0)?;
    let fire_fractions = normalize(&fire, 1.0)?;

    let table = ColorRamp::fire_default().build_table(256);

    let mid = fire_fractions.shape.xs / 2;
    save_slice_colored(
        &fire_fractions,
        mid,
        &table,
        ChannelOrder::Rgb,
        "split-raw-simulation-fire.png",
    )?;
    save_slice_gray(&smoke, mid, "split-raw-simulation-smoke.png")?;
    Ok(())
}

fn synthetic_plume(shape: GridShape) -> ScalarField {
    let mut data = Vec::with_capacity(shape.len());
    for i in 0..shape.xs {
        for j in 0..shape.ys {
            for k in 0..shape.zs {
                let u = (i as f32 + 0.5) / shape.xs as f32 - 0.5;
                let v = (j as f32 + 0.5) / shape.ys as f32 - 0.5;
                let w = (k as f32 + 0.5) / shape.zs as f32 - 0.5;
                let r = 2.0 * (u * u + v * v + w * w).sqrt();
                let heat = (1.0 - r).clamp(0.0, 1.0);
                data.push(300.0 + 1500.0 * heat * heat);
            }
        }
    }
    ScalarField { shape, data }
}
