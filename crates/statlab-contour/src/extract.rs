//! Cell-wise marching squares over a density grid

use crate::Contour;
use statlab_core::{Error, Result};
use statlab_density::DensityGrid;
use tracing::debug;

/// Extract one `Contour` per requested level
///
/// Levels outside `[grid.min_value(), grid.max_value()]` yield an empty
/// polyline set for that level rather than an error; a non-finite level is
/// rejected. The grid itself is read-only here.
pub fn extract(grid: &DensityGrid, levels: &[f64]) -> Result<Vec<Contour>> {
    if levels.iter().any(|&level| !level.is_finite()) {
        return Err(Error::NumericalDomain(
            "contour levels must be finite".to_string(),
        ));
    }

    let grid_min = grid.min_value();
    let grid_max = grid.max_value();

    let contours: Vec<Contour> = levels
        .iter()
        .map(|&level| {
            if level < grid_min || level > grid_max {
                Contour::new(level, Vec::new())
            } else {
                Contour::new(level, level_segments(grid, level))
            }
        })
        .collect();

    let total: usize = contours.iter().map(|c| c.polylines().len()).sum();
    debug!(levels = levels.len(), segments = total, "extracted contours");
    Ok(contours)
}

/// Sweep every 2x2 cell for crossings of one level
fn level_segments(grid: &DensityGrid, level: f64) -> Vec<Vec<(f64, f64)>> {
    let r = grid.resolution();
    let mut segments = Vec::new();

    for ix in 0..r - 1 {
        for iy in 0..r - 1 {
            cell_segments(grid, ix, iy, level, &mut segments);
        }
    }
    segments
}

fn cell_segments(
    grid: &DensityGrid,
    ix: usize,
    iy: usize,
    level: f64,
    segments: &mut Vec<Vec<(f64, f64)>>,
) {
    let d00 = grid.value(ix, iy);
    let d10 = grid.value(ix + 1, iy);
    let d11 = grid.value(ix + 1, iy + 1);
    let d01 = grid.value(ix, iy + 1);

    // A flat cell sitting exactly on the level would contour everywhere;
    // skip it instead of emitting degenerate segments.
    if d00 == level && d10 == level && d11 == level && d01 == level {
        return;
    }

    let cell_min = d00.min(d10).min(d11).min(d01);
    let cell_max = d00.max(d10).max(d11).max(d01);
    if !(cell_min < level && level < cell_max) {
        return;
    }

    let x0 = grid.x_coordinate(ix);
    let x1 = grid.x_coordinate(ix + 1);
    let y0 = grid.y_coordinate(iy);
    let y1 = grid.y_coordinate(iy + 1);

    // Edges in a fixed scan order: bottom, right, top, left
    let edges = [
        ((x0, y0), d00, (x1, y0), d10),
        ((x1, y0), d10, (x1, y1), d11),
        ((x1, y1), d11, (x0, y1), d01),
        ((x0, y1), d01, (x0, y0), d00),
    ];

    let mut crossings: Vec<(f64, f64)> = Vec::with_capacity(4);
    for ((ax, ay), da, (bx, by), db) in edges {
        if let Some(t) = crossing_fraction(level, da, db) {
            crossings.push((ax + t * (bx - ax), ay + t * (by - ay)));
        }
    }

    // Fewer than two crossings means the cell is malformed for this level;
    // four (a saddle) pairs off in scan order into two segments.
    for pair in crossings.chunks(2) {
        if let [a, b] = *pair {
            segments.push(vec![a, b]);
        }
    }
}

/// Linear-interpolation fraction along an edge, if the level crosses it
fn crossing_fraction(level: f64, d1: f64, d2: f64) -> Option<f64> {
    if d1 == d2 {
        return None;
    }
    let t = (level - d1) / (d2 - d1);
    (0.0..=1.0).contains(&t).then_some(t)
}
