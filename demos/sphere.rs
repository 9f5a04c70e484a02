//! A sphere built slice by slice from closed-form circle cross sections,
//! without going through the 3D sampler.

use anyhow::Result;
use voxcast_core::Point2d;
use voxcast_diagram::{circle, format_grid};

fn main() -> Result<()> {
    env_logger::init();

    let sphere_radius = 5.3_f64;
    let num_steps = 10;

    let c = sphere_radius.floor();
    let center = Point2d::new(c, c);
    let max = c as i64 * 2;

    for step in 0..=num_steps {
        let z = step as f64 / 2.0;
        println!("z {z}");

        let slice_radius = (sphere_radius * sphere_radius - z * z).max(0.0).sqrt();
        let points = circle(center, slice_radius);

        println!("{}", "-".repeat(c as usize * 2));
        println!("{}", format_grid(&points, max, max, "#", "."));
    }
    Ok(())
}
