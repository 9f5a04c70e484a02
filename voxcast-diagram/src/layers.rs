//! Layer compositor: slice a 3D point set into per-z ASCII diagrams

use log::debug;
use voxcast_core::{Error, LatticePoint2, PointSet, Result};

use crate::grid::format_grid;
use crate::shapes::PointSet2;

/// Default glyph for occupied cells.
pub const DEFAULT_ON: &str = "[]";

/// Default glyph for empty cells, the same width as [`DEFAULT_ON`].
pub const DEFAULT_OFF: &str = "  ";

/// Split a point set into per-z planes covering its full z range.
///
/// The result holds one entry for every z between the set's minimum and
/// maximum, in ascending z order; planes with no points are present and
/// empty. Fails with [`Error::EmptyInput`] on an empty set, which has no z
/// range to cover.
pub fn split_layers(points: &PointSet) -> Result<Vec<PointSet2>> {
    let bounds = points
        .lattice_bounds()
        .ok_or_else(|| Error::EmptyInput("split layers of an empty point set".to_string()))?;
    let zmin = bounds.mins.z;
    let zmax = bounds.maxs.z;

    let mut layers = vec![PointSet2::new(); (zmax - zmin + 1) as usize];
    for p in points.iter() {
        layers[(p.z - zmin) as usize].insert(LatticePoint2::new(p.x, p.y));
    }
    Ok(layers)
}

/// Draw every z layer of a point set with the default `"[]"`/`"  "` glyphs.
pub fn draw_layers(points: &PointSet) -> Result<Vec<String>> {
    draw_layers_with(points, DEFAULT_ON, DEFAULT_OFF)
}

/// Draw every z layer of a point set as an ASCII diagram, bottom layer
/// first.
///
/// The set is translated so its minimum corner sits at the origin, then
/// split into z planes; every plane is drawn on a grid sized to the global
/// x/y extent so the layers line up when printed in sequence. Planes with no
/// points come out as empty strings.
pub fn draw_layers_with(points: &PointSet, on: &str, off: &str) -> Result<Vec<String>> {
    let bounds = points
        .lattice_bounds()
        .ok_or_else(|| Error::EmptyInput("draw layers of an empty point set".to_string()))?;
    let extent = bounds.maxs - bounds.mins;
    let origin = points.translated(&(-bounds.mins.coords));

    let layers = split_layers(&origin)?;
    debug!(
        "drawing {} layers on a {}x{} grid",
        layers.len(),
        extent.x + 1,
        extent.y + 1
    );
    Ok(layers
        .iter()
        .map(|layer| format_grid(layer, extent.x, extent.y, on, off))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxcast_core::{LatticePoint, LatticeVector};

    fn set(points: &[(i64, i64, i64)]) -> PointSet {
        points
            .iter()
            .map(|&(x, y, z)| LatticePoint::new(x, y, z))
            .collect()
    }

    #[test]
    fn test_single_point() {
        let layers = draw_layers(&set(&[(5, 5, 5)])).unwrap();
        assert_eq!(layers, vec!["[]"]);
    }

    #[test]
    fn test_layers_are_ordered_by_ascending_z() {
        let points = set(&[(0, 0, 2), (1, 0, 3)]);
        let layers = draw_layers_with(&points, "#", "-").unwrap();
        assert_eq!(layers, vec!["#-", "-#"]);
    }

    #[test]
    fn test_gap_layers_are_emitted_empty() {
        let points = set(&[(0, 0, 0), (0, 0, 2)]);
        let layers = draw_layers_with(&points, "#", "-").unwrap();
        assert_eq!(layers, vec!["#", "", "#"]);
    }

    #[test]
    fn test_grids_share_the_global_extent() {
        // The z=0 plane only spans one column, but it is drawn on the full
        // two-column frame so the layers align.
        let points = set(&[(0, 0, 0), (1, 1, 1)]);
        let layers = draw_layers_with(&points, "#", "-").unwrap();
        assert_eq!(layers, vec!["--\n#-", "-#\n--"]);
    }

    #[test]
    fn test_diagrams_are_translation_invariant() {
        let points = set(&[(0, 0, 0), (2, 1, 0), (1, 1, 1)]);
        let moved = points.translated(&LatticeVector::new(-7, 3, 11));
        assert_eq!(
            draw_layers(&points).unwrap(),
            draw_layers(&moved).unwrap()
        );
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            draw_layers(&PointSet::new()),
            Err(Error::EmptyInput(_))
        ));
        assert!(matches!(
            split_layers(&PointSet::new()),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_split_layers_keeps_absolute_xy() {
        // Splitting alone does not normalize coordinates.
        let points = set(&[(3, 4, 1), (3, 5, 2)]);
        let layers = split_layers(&points).unwrap();
        assert_eq!(layers.len(), 2);
        assert!(layers[0].contains(&LatticePoint2::new(3, 4)));
        assert!(layers[1].contains(&LatticePoint2::new(3, 5)));
    }
}
