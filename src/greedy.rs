//! Nearest-neighbor baseline.
//!
//! Builds a tour greedily: from the start vertex, always walk to the
//! nearest unvisited vertex, then close the cycle back to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// A greedy tour and its closed cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    pub tour: Vec<usize>,
    pub cost: f64,
}

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// Ties go to the lowest index. Deterministic.
///
/// # Examples
///
/// ```
/// use u_tspga::{greedy_tour, Point};
///
/// let points = [[0, 0], [3, 0], [1, 0], [2, 0]].map(Point::from);
/// let result = greedy_tour(&points, 0).expect("non-empty input");
/// assert_eq!(result.tour, vec![0, 2, 3, 1]);
/// assert!((result.cost - 6.0).abs() < 1e-12);
/// ```
pub fn greedy_tour(points: &[Point], start: usize) -> Result<GreedyResult> {
    let n = points.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if start >= n {
        return Err(Error::StartOutOfRange { start, len: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;
    let mut cost = 0.0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for next in 0..n {
            if visited[next] {
                continue;
            }
            let d = points[current].distance_to(&points[next]);
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((next, d));
            }
        }

        let (next, d) = best.expect("an unvisited vertex remains");
        visited[next] = true;
        tour.push(next);
        cost += d;
        current = next;
    }
    cost += points[current].distance_to(&points[start]);

    Ok(GreedyResult { tour, cost })
}

/// Runs [`greedy_tour`] from every start and keeps the cheapest tour.
///
/// Ties go to the lowest start index.
pub fn greedy_best_start(points: &[Point]) -> Result<GreedyResult> {
    let mut best = greedy_tour(points, 0)?;
    for start in 1..points.len() {
        let candidate = greedy_tour(points, start)?;
        if candidate.cost < best.cost {
            best = candidate;
        }
    }
    Ok(best)
}
