//! Two overlapping spheres, unioned and drawn layer by layer.

use anyhow::Result;
use voxcast_core::{Point3d, PointSet};
use voxcast_diagram::draw_layers;
use voxcast_volumes::Volume;

fn main() -> Result<()> {
    env_logger::init();

    let a = Volume::sphere(Point3d::new(0.0, 0.0, 0.0), 10.0);
    let b = Volume::sphere(Point3d::new(5.0, 5.0, 5.0), 10.0);

    let a_points: PointSet = a.render()?.collect();
    let b_points: PointSet = b.render()?.collect();
    let points = &a_points | &b_points;

    let sep = "-".repeat(80);
    println!("{sep}");
    for layer in draw_layers(&points)? {
        println!("{layer}");
        println!("{sep}");
    }

    println!("{}", points.len());
    Ok(())
}
