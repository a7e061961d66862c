//! Dense pairwise cost matrix.

use crate::geometry::Point;

/// Cost of travelling from a vertex to itself.
///
/// Larger than any real distance, so a self-loop is never a cheapest edge.
pub const SELF_COST: f64 = f64::INFINITY;

/// A symmetric n×n Euclidean cost matrix stored in row-major order.
///
/// Off-diagonal entries hold the distance between two vertices; the
/// diagonal holds [`SELF_COST`]. Built once, read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_tspga::{CostMatrix, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let costs = CostMatrix::from_points(&points);
/// assert!((costs.get(0, 1) - 5.0).abs() < 1e-12);
/// assert!(costs.get(1, 1).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Computes the matrix from vertex coordinates in O(n²).
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = SELF_COST;
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the cost of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.size && to < self.size, "vertex index out of bounds");
        self.data[from * self.size + to]
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cost of a closed tour: the sum over cyclically adjacent
    /// positions, including the edge from the last vertex back to the first.
    ///
    /// O(n). An empty tour costs 0.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.get(tour[i], tour[(i + 1) % n])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_symmetric_with_infinite_diagonal() {
        let costs = CostMatrix::from_points(&unit_square());
        assert_eq!(costs.size(), 4);
        for i in 0..4 {
            assert_eq!(costs.get(i, i), SELF_COST);
            for j in 0..4 {
                assert_eq!(costs.get(i, j), costs.get(j, i));
                if i != j {
                    assert!(costs.get(i, j) < SELF_COST);
                }
            }
        }
    }

    #[test]
    fn test_perimeter_tour_cost() {
        let costs = CostMatrix::from_points(&unit_square());
        assert!((costs.tour_cost(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_tour_cost() {
        let costs = CostMatrix::from_points(&unit_square());
        let expected = 2.0 * 2f64.sqrt() + 2.0;
        assert!((costs.tour_cost(&[0, 2, 1, 3]) - expected).abs() < 1e-12);
        assert!((costs.tour_cost(&[0, 2, 1, 3]) - 4.828).abs() < 1e-3);
    }

    #[test]
    fn test_tour_cost_is_rotation_invariant() {
        let costs = CostMatrix::from_points(&unit_square());
        let a = costs.tour_cost(&[0, 2, 1, 3]);
        let b = costs.tour_cost(&[1, 3, 0, 2]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let costs = CostMatrix::from_points(&[]);
        assert_eq!(costs.size(), 0);
        assert_eq!(costs.tour_cost(&[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let costs = CostMatrix::from_points(&unit_square());
        costs.get(0, 4);
    }
}
