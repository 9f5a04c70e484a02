//! A ring slice that sweeps inward frame by frame, tracing a spiral ramp.

use anyhow::Result;
use voxcast_core::{lerp, Point2d};
use voxcast_diagram::{format_grid, radial_slice, ring};

fn main() -> Result<()> {
    env_logger::init();

    let ring_width = 3.2;
    let slice_angle = 45.0;

    let min_radius = 10.5_f64;
    let max_radius = 0.0_f64;

    let min_angle = -360.0 * 1.5;
    let max_angle = 0.0;

    let num_steps = 40;

    let c = min_radius.max(max_radius).floor();
    let center = Point2d::new(c, c);
    let max = c as i64 * 2;

    for step in 0..=num_steps {
        let mu = step as f64 / num_steps as f64;
        println!("{mu}");

        let start_angle = lerp(min_angle, max_angle, mu);
        let end_angle = start_angle + slice_angle;

        let outer = lerp(min_radius, max_radius, mu);
        let inner = outer - ring_width;

        let band = ring(center, outer, inner);
        let points = radial_slice(&band, center, start_angle, end_angle)?;

        println!("{}", "-".repeat(c as usize * 2));
        println!("{}", format_grid(&points, max, max, "#", "."));
    }
    Ok(())
}
