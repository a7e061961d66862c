//! Truncation selection.
//!
//! Every slot of the population is scored by its closed-tour cost and the
//! buffer is reordered by ascending cost. The first `base_size` slots then
//! hold the parents of the next generation.

use crate::cost::CostMatrix;

use super::population::Population;

/// Computes the closed-tour cost of every tour, in slot order.
///
/// O(n) per tour.
pub fn evaluate(costs: &CostMatrix, tours: &[Vec<usize>]) -> Vec<f64> {
    tours.iter().map(|tour| costs.tour_cost(tour)).collect()
}

/// Scores the whole population and reorders it by ascending cost.
///
/// Returns the sorted costs; element 0 is the cost of the tour now in
/// slot 0. The sort is stable, so among equal costs the tour from the
/// lower slot stays first (surviving parents win ties against offspring).
///
/// # Examples
///
/// ```
/// use u_tspga::{CostMatrix, Point};
/// use u_tspga::ga::{select, Population};
/// use u_tspga::random::create_rng;
///
/// let points: Vec<Point> = [[0, 0], [4, 0], [4, 3], [0, 3]].map(Point::from).to_vec();
/// let costs = CostMatrix::from_points(&points);
/// let mut population = Population::random(4, 6, 2, 2, &mut create_rng(3));
///
/// let scores = select(&costs, &mut population);
/// assert!(scores.windows(2).all(|w| w[0] <= w[1]));
/// assert!((costs.tour_cost(population.best()) - scores[0]).abs() < 1e-12);
/// ```
pub fn select(costs: &CostMatrix, population: &mut Population) -> Vec<f64> {
    let scores = evaluate(costs, population.tours());
    let tours = std::mem::take(population.tours_mut());

    let mut scored: Vec<(f64, Vec<usize>)> = scores.into_iter().zip(tours).collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (sorted_costs, sorted_tours): (Vec<f64>, Vec<Vec<usize>>) = scored.into_iter().unzip();
    *population.tours_mut() = sorted_tours;
    sorted_costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::random::create_rng;

    fn unit_square_costs() -> CostMatrix {
        let points: Vec<Point> = [[0, 0], [1, 0], [1, 1], [0, 1]]
            .into_iter()
            .map(Point::from)
            .collect();
        CostMatrix::from_points(&points)
    }

    #[test]
    fn test_evaluate_in_slot_order() {
        let costs = unit_square_costs();
        let tours = vec![vec![0, 2, 1, 3], vec![0, 1, 2, 3]];
        let scores = evaluate(&costs, &tours);
        assert!((scores[0] - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
        assert!((scores[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_select_sorts_tours_with_costs() {
        let costs = unit_square_costs();
        let mut population = Population::random(4, 10, 5, 5, &mut create_rng(42));
        let scores = select(&costs, &mut population);

        assert_eq!(scores.len(), population.capacity());
        for (i, tour) in population.tours().iter().enumerate() {
            assert!((costs.tour_cost(tour) - scores[i]).abs() < 1e-12);
        }
        for w in scores.windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert!((scores[0] - 4.0).abs() < 1e-12, "a perimeter tour should be found");
    }

    #[test]
    fn test_select_keeps_multiset() {
        let costs = unit_square_costs();
        let mut population = Population::random(4, 6, 3, 2, &mut create_rng(8));
        let mut before = population.tours().to_vec();
        select(&costs, &mut population);
        let mut after = population.tours().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_select_is_stable() {
        let costs = unit_square_costs();
        let mut population = Population::random(4, 2, 1, 0, &mut create_rng(1));
        // Equal cost, distinct tours: order must be kept.
        population.replace(0, vec![1, 2, 3, 0]);
        population.replace(1, vec![0, 1, 2, 3]);
        population.replace(2, vec![0, 2, 1, 3]);
        population.replace(3, vec![3, 2, 1, 0]);

        let scores = select(&costs, &mut population);
        assert_eq!(population.get(0), &[1, 2, 3, 0]);
        assert_eq!(population.get(1), &[0, 1, 2, 3]);
        assert_eq!(population.get(2), &[3, 2, 1, 0]);
        assert_eq!(population.get(3), &[0, 2, 1, 3]);
        assert!(scores[2] < scores[3]);
    }
}
