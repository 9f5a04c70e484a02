//! A thin spherical shell with two spiral windows cut through it, one
//! cross-section per z step.

use anyhow::Result;
use voxcast_core::{lerp, Point2d};
use voxcast_diagram::{circle, format_grid, radial_slice};

fn slice_radius(sphere_radius: f64, z: f64) -> f64 {
    (sphere_radius * sphere_radius - z * z).max(0.0).sqrt()
}

fn main() -> Result<()> {
    env_logger::init();

    let sphere_radius = 15.4_f64;
    let inner_sphere_radius = sphere_radius - 1.2;
    let half_num_steps = sphere_radius.floor() as i64;
    let (min_z, max_z) = (-half_num_steps, half_num_steps);

    let min_angle = -360.0;
    let max_angle = 0.0;
    let slice_angle = 90.0;

    let c = sphere_radius.floor();
    let center = Point2d::new(c + 0.5, c + 0.5);
    let max = c as i64 * 2;

    for z in min_z..=max_z {
        println!("z {z}");

        let mu = z as f64 / (max_z - min_z) as f64;

        let r1 = slice_radius(sphere_radius, z as f64);
        let r2 = slice_radius(inner_sphere_radius, z as f64);
        let shell = &circle(center, r1) - &circle(center, r2);

        let start_angle = lerp(min_angle, max_angle, mu);
        let slice_1 = radial_slice(&shell, center, start_angle, start_angle + slice_angle)?;

        let start_angle = start_angle + 180.0;
        let slice_2 = radial_slice(&shell, center, start_angle, start_angle + slice_angle)?;

        let points = &slice_1 | &slice_2;
        println!("{}", "-".repeat(c as usize * 2));
        println!("{}", format_grid(&points, max, max, "#", "."));
    }
    Ok(())
}
