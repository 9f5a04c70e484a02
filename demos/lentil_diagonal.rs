//! The lens-shaped intersection of two diagonally offset spheres.

use anyhow::Result;
use voxcast_core::Point3d;
use voxcast_diagram::draw_layers;
use voxcast_volumes::{bounds_of_volumes, render_all, Volume};

fn main() -> Result<()> {
    env_logger::init();

    let volumes = [
        Volume::sphere(Point3d::new(0.0, 0.0, 0.0), 10.0),
        Volume::sphere(Point3d::new(5.0, 5.0, 5.0), 10.0),
    ];
    let frame = bounds_of_volumes(&volumes)?;
    eprintln!("shared frame: {frame:?}");

    let rendered = render_all(&volumes)?;
    let points = &rendered[0] & &rendered[1];

    let sep = "-".repeat(80);
    println!("{sep}");
    for layer in draw_layers(&points)? {
        println!("{layer}");
        println!("{sep}");
    }
    Ok(())
}
