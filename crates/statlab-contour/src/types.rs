//! Contour output types

use std::fmt;

/// All polylines extracted for one iso-level
///
/// Each polyline is a short open segment in data-space coordinates
/// (typically two points, one per cell crossing). A level that never
/// crosses the grid carries an empty polyline set.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    level: f64,
    polylines: Vec<Vec<(f64, f64)>>,
}

impl Contour {
    pub fn new(level: f64, polylines: Vec<Vec<(f64, f64)>>) -> Self {
        Self { level, polylines }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn polylines(&self) -> &[Vec<(f64, f64)>] {
        &self.polylines
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

impl fmt::Display for Contour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contour(level={:.6}, segments={})",
            self.level,
            self.polylines.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contour_accessors() {
        let c = Contour::new(0.5, vec![vec![(0.0, 0.0), (1.0, 1.0)]]);
        assert_eq!(c.level(), 0.5);
        assert_eq!(c.polylines().len(), 1);
        assert!(!c.is_empty());

        let empty = Contour::new(2.0, vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "Contour(level=2.000000, segments=0)");
    }
}
