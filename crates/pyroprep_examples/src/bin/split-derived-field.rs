use pyroprep::prelude::*;
use pyroprep_examples::{init_tracing, save_slice_colored, save_slice_gray, ChannelOrder};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A field already in the derived post-processed scale, roughly 0-5.
    let field = synthetic_blob(GridShape::new(32, 96, 96));

    let (fire, smoke) = split(&field, &PolicyPair::derived_scale());
    let fire_fractions = normalize(&fire, 1.0)?;

    let table = ColorRamp::fire_default().build_table(256);

    let mid = field.shape.xs / 2;
    save_slice_colored(
        &fire_fractions,
        mid,
        &table,
        ChannelOrder::Rgb,
        "split-derived-field-fire.png",
    )?;
    save_slice_gray(&smoke, mid, "split-derived-field-smoke.png")?;
    Ok(())
}

fn synthetic_blob(shape: GridShape) -> ScalarField {
    let mut data = Vec::with_capacity(shape.len());
    for i in 0..shape.xs {
        for j in 0..shape.ys {
            for k in 0..shape.zs {
                let u = (i as f32 + 0.5) / shape.xs as f32 - 0.5;
                let v = (j as f32 + 0.5) / shape.ys as f32 - 0.5;
                let w = (k as f32 + 0.5) / shape.zs as f32 - 0.5;
                let r2 = u * u + v * v + w * w;
                data.push(5.0 * (-8.0 * r2).exp());
            }
        }
    }
    ScalarField { shape, data }
}
