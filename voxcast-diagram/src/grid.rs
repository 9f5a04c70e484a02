//! ASCII grid formatting for one diagram plane

use crate::shapes::PointSet2;
use voxcast_core::LatticePoint2;

/// Render points as an ASCII grid with explicit extents.
///
/// The grid spans `0..=max_x` by `0..=max_y`; points outside that window are
/// simply not shown. Row 0 of the output is `y = max_y`, so diagrams read
/// with +y up. Each cell prints the `on` or `off` glyph (these may be more
/// than one character wide), rows are right-trimmed of trailing whitespace,
/// and an empty point set renders as the empty string.
pub fn format_grid(points: &PointSet2, max_x: i64, max_y: i64, on: &str, off: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    for row in 0..=max_y {
        let y = max_y - row;
        let mut line = String::new();
        for x in 0..=max_x {
            if points.contains(&LatticePoint2::new(x, y)) {
                line.push_str(on);
            } else {
                line.push_str(off);
            }
        }
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
        lines.push(line);
    }
    lines.join("\n")
}

/// Render points as an ASCII grid sized to the set's own maxima.
pub fn format_points(points: &PointSet2, on: &str, off: &str) -> String {
    let (Some(max_x), Some(max_y)) = (
        points.iter().map(|p| p.x).max(),
        points.iter().map(|p| p.y).max(),
    ) else {
        return String::new();
    };
    format_grid(points, max_x, max_y, on, off)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[(i64, i64)]) -> PointSet2 {
        points.iter().map(|&(x, y)| LatticePoint2::new(x, y)).collect()
    }

    #[test]
    fn test_rows_print_top_down() {
        let points = set(&[(1, 0), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(format_points(&points, "#", " "), "##\n ##");
    }

    #[test]
    fn test_empty_set_formats_as_empty_string() {
        assert_eq!(format_points(&PointSet2::new(), "#", " "), "");
        assert_eq!(format_grid(&PointSet2::new(), 4, 4, "#", "-"), "");
    }

    #[test]
    fn test_explicit_extents_pad_the_frame() {
        let points = set(&[(0, 0)]);
        assert_eq!(format_grid(&points, 2, 1, "#", "-"), "---\n#--");
    }

    #[test]
    fn test_only_trailing_whitespace_is_trimmed() {
        let points = set(&[(0, 0)]);
        // A whitespace off-glyph trims away; a visible one stays.
        assert_eq!(format_grid(&points, 1, 0, "#", " "), "#");
        assert_eq!(format_grid(&points, 1, 0, "#", "-"), "#-");
    }

    #[test]
    fn test_wide_glyphs() {
        let points = set(&[(0, 0), (1, 1)]);
        assert_eq!(
            format_grid(&points, 1, 1, "[]", "  "),
            "  []\n[]"
        );
    }
}
