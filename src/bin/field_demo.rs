use std::f64::consts::PI;

use anyhow::Result;
use arc_steering::render::save_field_image;
use arc_steering::{FieldConfig, OmegaField, OmegaSolver};
use rand::Rng;

fn main() -> Result<()> {
    env_logger::init();

    let heading = rand::thread_rng().gen_range(-PI..PI);

    let config = FieldConfig {
        heading,
        ..FieldConfig::default()
    };
    println!(
        "Sweeping {}x{} steering field, r = {}, heading = {:.4} rad",
        config.nx, config.ny, config.radius, heading
    );

    let solver = OmegaSolver::new();
    let field = OmegaField::new(config);
    let values = field.generate(&solver);

    save_field_image(&values, "omega_values.png")?;
    println!("Wrote omega_values.png");

    Ok(())
}
