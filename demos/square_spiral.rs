//! A square that rotates a quarter turn over the course of the animation.

use anyhow::Result;
use nalgebra::Rotation2;
use voxcast_core::{lerp, Point2d, Vector2d};
use voxcast_diagram::{format_grid, polygon};

/// Vertices of a regular polygon in clockwise order, starting at
/// `start_angle_deg` counter-clockwise of straight up.
fn regular_polygon(radius: f64, num_sides: u32, start_angle_deg: f64) -> Vec<Vector2d> {
    (0..num_sides)
        .map(|i| {
            let angle = start_angle_deg - (i as f64 * 360.0) / num_sides as f64;
            Rotation2::new(angle.to_radians()) * Vector2d::new(0.0, radius)
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let radius = 5.0 * 2.0_f64.sqrt();
    let start_angle = 45.0;
    let end_angle = 90.0 + 45.0;

    let c = radius.floor();
    let center = Point2d::new(c, c);
    let max = c as i64 * 2;

    let num_steps = 20;

    for step in 0..=num_steps {
        println!("{step}");
        let mu = step as f64 / num_steps as f64;
        let angle = lerp(start_angle, end_angle, mu);

        let vertices: Vec<Point2d> = regular_polygon(radius, 4, angle)
            .into_iter()
            .map(|v| center + v)
            .collect();
        let points = polygon(&vertices)?;

        println!("{}", "-".repeat(c as usize * 2));
        println!("{}", format_grid(&points, max, max, "#", "."));
    }
    Ok(())
}
