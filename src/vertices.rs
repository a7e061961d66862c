//! Vertex sources: random grid generation and text loading.
//!
//! The solver only ever sees an index-addressable `&[Point]`; these
//! helpers produce one.

use std::path::Path;

use log::warn;
use rand::Rng;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Generates integer vertices snapped to a grid inside a bordered canvas.
///
/// Each coordinate is `cell * step + border`, with `cell` drawn uniformly
/// from `0..(extent - 3 * border) / step`.
///
/// # Examples
///
/// ```
/// use u_tspga::random::create_rng;
/// use u_tspga::vertices::RandomGrid;
///
/// let mut rng = create_rng(1);
/// let points = RandomGrid::default().generate(10, &mut rng);
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|p| p.x >= 25.0 && p.y >= 25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGrid {
    pub width: u32,
    pub height: u32,
    pub border: u32,
    pub step: u32,
}

impl Default for RandomGrid {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            border: 25,
            step: 10,
        }
    }
}

impl RandomGrid {
    pub fn new(width: u32, height: u32, border: u32, step: u32) -> Self {
        Self {
            width,
            height,
            border,
            step,
        }
    }

    /// Number of grid cells along an axis of the given extent (at least 1).
    fn cells(&self, extent: u32) -> u32 {
        (extent.saturating_sub(self.border * 3) / self.step.max(1)).max(1)
    }

    /// Draws `count` vertices.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Point> {
        let (cols, rows) = (self.cells(self.width), self.cells(self.height));
        (0..count)
            .map(|_| {
                let x = rng.random_range(0..cols) * self.step + self.border;
                let y = rng.random_range(0..rows) * self.step + self.border;
                Point::new(x as f64, y as f64)
            })
            .collect()
    }
}

/// Parses `count` vertices from whitespace-separated integers, read
/// pairwise as `x y`.
///
/// Extra numbers after the first `2 * count` are ignored.
pub fn parse_vertices(text: &str, count: usize) -> Result<Vec<Point>> {
    let numbers = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|e| Error::invalid_vertex_data(format!("bad number {token:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let needed = count * 2;
    if numbers.len() < needed {
        return Err(Error::invalid_vertex_data(format!(
            "expected {needed} numbers for {count} vertices, found {}",
            numbers.len()
        )));
    }
    if numbers.len() > needed {
        warn!(
            "vertex data holds {} numbers, using the first {needed}",
            numbers.len()
        );
    }

    Ok(numbers[..needed]
        .chunks_exact(2)
        .map(|pair| Point::from((pair[0], pair[1])))
        .collect())
}

/// Reads a vertex file and parses it with [`parse_vertices`].
pub fn load_vertices(path: impl AsRef<Path>, count: usize) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    parse_vertices(&text, count)
}
