//! Per-line background classification.
//!
//! Two externally produced sets of line numbers drive the row styling:
//! "common" lines get one background, everything else the alternate, and
//! "covered" lines additionally tint the line-number cell. The sets come
//! from flat sidecar files next to the working directory and are optional
//! metadata: a missing or unreadable sidecar is an empty set.

use std::collections::HashSet;
use std::path::Path;

/// Primary row style for lines in the common set.
pub const COMMON_STYLE: &str = "style=\"background-color:aquamarine;\"";
/// Primary row style for every other line.
pub const UNCOMMON_STYLE: &str = "style=\"background-color:lightcoral;\"";
/// Secondary style for lines in the covered set.
pub const COVERED_STYLE: &str = "style=\"background-color:gold;\"";

/// Immutable line-number sets for one render.
#[derive(Debug, Clone, Default)]
pub struct LineOverlays {
    common: HashSet<u32>,
    covered: HashSet<u32>,
}

impl LineOverlays {
    /// Empty overlays: every line renders as uncommon and uncovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build overlays from explicit sets.
    pub fn from_sets(common: HashSet<u32>, covered: HashSet<u32>) -> Self {
        Self { common, covered }
    }

    /// Load `<basename>.common` and `<basename>.coverage` from `dir`.
    pub fn load(dir: &Path, basename: &str) -> Self {
        Self {
            common: read_line_set(&dir.join(format!("{basename}.common"))),
            covered: read_line_set(&dir.join(format!("{basename}.coverage"))),
        }
    }

    /// Whether `line` is in the common set.
    pub fn is_common(&self, line: u32) -> bool {
        self.common.contains(&line)
    }

    /// Whether `line` is in the covered set.
    pub fn is_covered(&self, line: u32) -> bool {
        self.covered.contains(&line)
    }

    /// Primary style for a row: exactly one of common/uncommon.
    pub fn row_style(&self, line: u32) -> &'static str {
        if self.is_common(line) {
            COMMON_STYLE
        } else {
            UNCOMMON_STYLE
        }
    }

    /// Secondary style for the line-number cell, empty when uncovered.
    pub fn line_number_style(&self, line: u32) -> &'static str {
        if self.is_covered(line) {
            COVERED_STYLE
        } else {
            ""
        }
    }
}

/// Read whitespace-separated decimal line numbers, stopping at the first
/// token that is not one. Absent or unreadable files yield an empty set.
fn read_line_set(path: &Path) -> HashSet<u32> {
    match std::fs::read_to_string(path) {
        Ok(text) => text
            .split_whitespace()
            .map_while(|tok| tok.parse().ok())
            .collect(),
        Err(_) => HashSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_overlays_are_uncommon() {
        let overlays = LineOverlays::new();
        assert_eq!(overlays.row_style(1), UNCOMMON_STYLE);
        assert_eq!(overlays.line_number_style(1), "");
    }

    #[test]
    fn test_membership_drives_styles() {
        let overlays =
            LineOverlays::from_sets([2].into_iter().collect(), [3].into_iter().collect());
        assert_eq!(overlays.row_style(2), COMMON_STYLE);
        assert_eq!(overlays.row_style(3), UNCOMMON_STYLE);
        assert_eq!(overlays.line_number_style(3), COVERED_STYLE);
        assert_eq!(overlays.line_number_style(2), "");
    }

    #[test]
    fn test_load_missing_sidecars_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let overlays = LineOverlays::load(dir.path(), "absent.c");
        assert!(!overlays.is_common(1));
        assert!(!overlays.is_covered(1));
    }

    #[test]
    fn test_load_sidecar_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut common = std::fs::File::create(dir.path().join("f.c.common")).unwrap();
        write!(common, "1 3\n5").unwrap();
        let mut coverage = std::fs::File::create(dir.path().join("f.c.coverage")).unwrap();
        write!(coverage, "3").unwrap();

        let overlays = LineOverlays::load(dir.path(), "f.c");
        assert!(overlays.is_common(1));
        assert!(overlays.is_common(3));
        assert!(overlays.is_common(5));
        assert!(!overlays.is_common(2));
        assert!(overlays.is_covered(3));
        assert!(!overlays.is_covered(1));
    }

    #[test]
    fn test_load_stops_at_first_bad_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut common = std::fs::File::create(dir.path().join("f.c.common")).unwrap();
        write!(common, "1 2 oops 4").unwrap();

        let overlays = LineOverlays::load(dir.path(), "f.c");
        assert!(overlays.is_common(2));
        assert!(!overlays.is_common(4));
    }
}
