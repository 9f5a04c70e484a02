//! 2D lattice rasterizers: circles, rings, radial slices and polygons
//!
//! These build flat point sets directly, without going through the 3D
//! sampler. They share the diagram formatting in [`crate::grid`] and the
//! layer pipeline's conventions: inclusive circle membership, and partition
//! lines that keep points lying exactly on them.

use std::collections::HashSet;

use itertools::{iproduct, Itertools};
use nalgebra::Rotation2;
use voxcast_core::{perp_clockwise, to_real2, Error, LatticePoint2, Point2d, Result, Vector2d};

/// An unordered set of 2D lattice points, one diagram plane.
pub type PointSet2 = HashSet<LatticePoint2>;

/// Points closer than this to a partition line count as on the line.
const LINE_EPSILON: f64 = 1e-10;

/// All lattice points within `radius` of `center`, boundary inclusive.
pub fn circle(center: Point2d, radius: f64) -> PointSet2 {
    let radius2 = radius * radius;
    let min_x = (center.x - radius).ceil() as i64;
    let max_x = (center.x + radius).floor() as i64;
    let min_y = (center.y - radius).ceil() as i64;
    let max_y = (center.y + radius).floor() as i64;

    iproduct!(min_x..=max_x, min_y..=max_y)
        .map(|(x, y)| LatticePoint2::new(x, y))
        .filter(|p| {
            let dx = p.x as f64 - center.x;
            let dy = p.y as f64 - center.y;
            dx * dx + dy * dy <= radius2
        })
        .collect()
}

/// A circle centered on the half-integer grid point nearest `radius`, so
/// even-diameter circles come out symmetric.
pub fn even_circle(radius: f64) -> PointSet2 {
    let c = (radius + 0.5).floor() + 0.5;
    circle(Point2d::new(c, c), radius)
}

/// The points inside the outer circle but not the inner one.
pub fn ring(center: Point2d, outer_radius: f64, inner_radius: f64) -> PointSet2 {
    &circle(center, outer_radius) - &circle(center, inner_radius)
}

/// Where `p` lies relative to the directed line `l1 -> l2`: `1` on the
/// counter-clockwise side, `-1` on the clockwise side, `0` within
/// [`LINE_EPSILON`] of the line.
pub fn cmp_line(l1: Point2d, l2: Point2d, p: Point2d) -> i32 {
    let dy = l2.y - l1.y;
    let dx = l2.x - l1.x;
    let c = (p.y * dx) - (dy * (p.x - l1.x) + l1.y * dx);
    if c.abs() < LINE_EPSILON {
        0
    } else {
        sign_of(c)
    }
}

fn sign_of(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Keep the points on one side of the directed line `l1 -> l2`.
///
/// `side` is any point on the half-plane to keep; `None` keeps the
/// right-hand side (walking from `l1` to `l2`). Points on the line itself
/// are always kept.
///
/// Fails with [`Error::DegenerateInput`] when the line's endpoints coincide
/// or the side hint lies on the line.
pub fn partition(
    points: &PointSet2,
    l1: Point2d,
    l2: Point2d,
    side: Option<Point2d>,
) -> Result<PointSet2> {
    if l1 == l2 {
        return Err(Error::DegenerateInput(
            "partition line endpoints coincide".to_string(),
        ));
    }
    let side = side.unwrap_or_else(|| l1 + perp_clockwise(&(l2 - l1)));
    let keep = cmp_line(l1, l2, side);
    if keep == 0 {
        return Err(Error::DegenerateInput(
            "side hint lies on the partition line".to_string(),
        ));
    }

    Ok(points
        .iter()
        .copied()
        .filter(|p| {
            let c = cmp_line(l1, l2, to_real2(p));
            c == keep || c == 0
        })
        .collect())
}

/// The angular slice of `points` swept counter-clockwise from `start_deg`
/// to `end_deg` around `center`. Angles are in degrees.
pub fn radial_slice(
    points: &PointSet2,
    center: Point2d,
    start_deg: f64,
    end_deg: f64,
) -> Result<PointSet2> {
    let unit = Vector2d::new(1.0, 0.0);
    let start_point = center + Rotation2::new(start_deg.to_radians()) * unit;
    let end_point = center + Rotation2::new(end_deg.to_radians()) * unit;

    // The start edge points inward so its right-hand side sweeps
    // counter-clockwise; the end edge points outward so its right-hand side
    // sweeps back clockwise. Their intersection is the sector.
    let from_start = partition(points, start_point, center, None)?;
    let to_end = partition(points, center, end_point, None)?;
    Ok(&from_start & &to_end)
}

/// Rasterize a convex polygon given its vertices in clockwise order.
pub fn polygon(vertices: &[Point2d]) -> Result<PointSet2> {
    if vertices.is_empty() {
        return Err(Error::EmptyInput("polygon with no vertices".to_string()));
    }
    let min_x = vertices.iter().map(|v| v.x).fold(f64::INFINITY, f64::min).floor() as i64;
    let max_x = vertices.iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
    let min_y = vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min).floor() as i64;
    let max_y = vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;

    let mut points: PointSet2 = iproduct!(min_x..=max_x, min_y..=max_y)
        .map(|(x, y)| LatticePoint2::new(x, y))
        .collect();
    for (a, b) in vertices.iter().copied().circular_tuple_windows::<(_, _)>() {
        points = partition(&points, a, b, None)?;
    }
    Ok(points)
}

/// Translate a point set so it sits snug in the +x/+y quadrant.
pub fn offset_points(points: &PointSet2) -> PointSet2 {
    let (Some(min_x), Some(min_y)) = (
        points.iter().map(|p| p.x).min(),
        points.iter().map(|p| p.y).min(),
    ) else {
        return PointSet2::new();
    };
    points
        .iter()
        .map(|p| LatticePoint2::new(p.x - min_x, p.y - min_y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::format_points;

    fn set(points: &[(i64, i64)]) -> PointSet2 {
        points.iter().map(|&(x, y)| LatticePoint2::new(x, y)).collect()
    }

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn test_circle_includes_boundary_points() {
        let points = circle(p(1.5, 1.5), 2.0);
        assert_eq!(points.len(), 12);
        assert_eq!(
            points,
            set(&[
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 0),
                (2, 1),
                (2, 2),
                (2, 3),
                (3, 1),
                (3, 2),
            ])
        );
    }

    #[test]
    fn test_circle_at_origin_formats_visible_quadrant() {
        // Points at negative coordinates simply fall off the diagram.
        let points = circle(p(0.0, 0.0), 2.3);
        assert_eq!(format_points(&points, "#", " "), "##\n###\n###");
    }

    #[test]
    fn test_even_circle_is_symmetric() {
        let points = even_circle(1.9);
        assert_eq!(
            format_points(&offset_points(&points), "#", " "),
            " ##\n####\n####\n ##"
        );
    }

    #[test]
    fn test_ring_pattern() {
        let points = ring(p(0.0, 0.0), 3.5, 1.0);
        assert_eq!(
            format_points(&offset_points(&points), "#", " "),
            "  ###\n #####\n### ###\n##   ##\n### ###\n #####\n  ###"
        );
    }

    #[test]
    fn test_cmp_line_diagonal_and_vertical() {
        assert_eq!(cmp_line(p(-1.0, -1.0), p(1.0, 1.0), p(1.0, 0.0)), -1);
        assert_eq!(cmp_line(p(-1.0, -1.0), p(1.0, 1.0), p(0.0, 1.0)), 1);
        assert_eq!(cmp_line(p(-1.0, -1.0), p(1.0, 1.0), p(0.0, 0.0)), 0);

        assert_eq!(cmp_line(p(0.0, -1.0), p(0.0, 1.0), p(1.0, 0.0)), -1);
        assert_eq!(cmp_line(p(0.0, -1.0), p(0.0, 1.0), p(-1.0, 0.0)), 1);
        assert_eq!(cmp_line(p(0.0, -1.0), p(0.0, 1.0), p(0.0, 0.0)), 0);
    }

    #[test]
    fn test_cmp_line_near_misses_count_as_on_the_line() {
        assert_eq!(cmp_line(p(0.0, -1.0), p(0.0, 1.0), p(1e-16, 0.0)), 0);
    }

    #[test]
    fn test_partition_keeps_chosen_side_and_line_points() {
        let points = set(&[(-1, 0), (0, 0), (1, 0)]);
        let down = (p(0.0, 1.0), p(0.0, -1.0));

        let right = partition(&points, down.0, down.1, Some(p(2.0, 0.0))).unwrap();
        assert_eq!(right, set(&[(0, 0), (1, 0)]));

        let left = partition(&points, down.0, down.1, Some(p(-2.0, 0.0))).unwrap();
        assert_eq!(left, set(&[(-1, 0), (0, 0)]));
    }

    #[test]
    fn test_partition_oblique_line() {
        let points = set(&[(-2, 2), (-1, 0), (0, 0), (1, 0)]);
        let below = partition(&points, p(-1.0, 0.0), p(0.0, 1.0), Some(p(3.0, 0.0))).unwrap();
        assert_eq!(below, set(&[(-1, 0), (0, 0), (1, 0)]));

        let above = partition(&points, p(-1.0, 0.0), p(0.0, 1.0), Some(p(-3.0, 0.0))).unwrap();
        assert_eq!(above, set(&[(-2, 2), (-1, 0)]));
    }

    #[test]
    fn test_partition_default_side_is_right_of_travel() {
        let points = set(&[(-1, 0), (0, 0), (1, 0)]);
        let kept = partition(&points, p(0.0, 1.0), p(0.0, -1.0), None).unwrap();
        assert_eq!(kept, set(&[(-1, 0), (0, 0)]));
    }

    #[test]
    fn test_partition_rejects_degenerate_lines() {
        let points = set(&[(0, 0)]);
        assert!(matches!(
            partition(&points, p(1.0, 1.0), p(1.0, 1.0), None),
            Err(Error::DegenerateInput(_))
        ));
        // A side hint on the line cannot pick a half-plane.
        assert!(matches!(
            partition(&points, p(0.0, 0.0), p(2.0, 0.0), Some(p(1.0, 0.0))),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_radial_slice_narrows_a_circle() {
        let full = circle(p(0.0, 0.0), 2.3);
        assert_eq!(
            format_points(&offset_points(&full), "#", " "),
            " ###\n#####\n#####\n#####\n ###"
        );

        let quarter = radial_slice(&full, p(0.0, 0.0), -90.0, 45.0).unwrap();
        assert_eq!(
            format_points(&offset_points(&quarter), "#", " "),
            " ##\n###\n###\n##"
        );

        let sliver = radial_slice(&quarter, p(0.0, 0.0), 0.0, 30.0).unwrap();
        assert_eq!(format_points(&offset_points(&sliver), "#", " "), "  #\n###");
    }

    #[test]
    fn test_polygon_clockwise_quad() {
        let points = polygon(&[p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0), p(4.0, 0.0)]).unwrap();
        assert_eq!(format_points(&points, "#", " "), "###\n####\n#####");
    }

    #[test]
    fn test_polygon_fractional_vertices() {
        let points = polygon(&[p(0.0, 0.0), p(0.0, 2.3), p(2.7, 0.0)]).unwrap();
        assert_eq!(format_points(&points, "#", " "), "#\n##\n###");
    }

    #[test]
    fn test_polygon_needs_vertices() {
        assert!(matches!(polygon(&[]), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_offset_points_moves_into_first_quadrant() {
        let points = set(&[(-2, 3), (0, 5), (-1, 4)]);
        assert_eq!(offset_points(&points), set(&[(0, 0), (2, 2), (1, 1)]));
        assert!(offset_points(&PointSet2::new()).is_empty());
    }
}
