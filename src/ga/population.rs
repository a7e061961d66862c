//! Fixed-capacity population buffer.
//!
//! Slots are laid out in three regions:
//!
//! ```text
//! [0, base)                         surviving parents
//! [base, base + 2 * hybrid)         hybridization offspring, two per pairing
//! [base + 2 * hybrid, capacity)     mutation offspring, one per draw
//! ```
//!
//! Offspring regions are overwritten in place every generation; selection
//! then reorders the whole buffer so the best tours land in the parent
//! region.

use rand::Rng;

use super::operators::random_tour_into;

/// A population of tours over a fixed number of vertices.
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Vec<usize>>,
    base_size: usize,
    hybrid_count: usize,
    mutation_count: usize,
}

impl Population {
    /// Allocates the buffer and fills every slot, offspring slots included,
    /// with a random tour over `vertices` vertices.
    pub fn random<R: Rng>(
        vertices: usize,
        base_size: usize,
        hybrid_count: usize,
        mutation_count: usize,
        rng: &mut R,
    ) -> Self {
        let capacity = base_size + 2 * hybrid_count + mutation_count;
        let tours = (0..capacity)
            .map(|_| {
                let mut tour = vec![0; vertices];
                random_tour_into(&mut tour, rng);
                tour
            })
            .collect();
        Self {
            tours,
            base_size,
            hybrid_count,
            mutation_count,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.tours.len()
    }

    pub fn base_size(&self) -> usize {
        self.base_size
    }

    pub fn hybrid_count(&self) -> usize {
        self.hybrid_count
    }

    pub fn mutation_count(&self) -> usize {
        self.mutation_count
    }

    /// Tour at slot `index`.
    pub fn get(&self, index: usize) -> &[usize] {
        &self.tours[index]
    }

    /// Replaces the tour at slot `index`.
    ///
    /// # Panics
    /// Panics if the new tour has a different length.
    pub fn replace(&mut self, index: usize, tour: Vec<usize>) {
        assert_eq!(
            tour.len(),
            self.tours[index].len(),
            "replacement tour must keep the vertex count"
        );
        self.tours[index] = tour;
    }

    /// All slots.
    pub fn tours(&self) -> &[Vec<usize>] {
        &self.tours
    }

    /// The parent region.
    pub fn parents(&self) -> &[Vec<usize>] {
        &self.tours[..self.base_size]
    }

    /// Best tour after the last selection.
    pub fn best(&self) -> &[usize] {
        &self.tours[0]
    }

    /// Splits the buffer into the parent region and the two slots reserved
    /// for hybridization `i`.
    ///
    /// # Panics
    /// Panics if `i >= hybrid_count`.
    pub fn hybrid_slots(&mut self, i: usize) -> (&[Vec<usize>], &mut [usize], &mut [usize]) {
        assert!(i < self.hybrid_count, "hybrid slot {i} out of range");
        let (parents, offspring) = self.tours.split_at_mut(self.base_size);
        let (first, second) = offspring[2 * i..2 * i + 2].split_at_mut(1);
        (&*parents, first[0].as_mut_slice(), second[0].as_mut_slice())
    }

    /// Splits the buffer into the parent region and the slot reserved for
    /// mutation `i`.
    ///
    /// # Panics
    /// Panics if `i >= mutation_count`.
    pub fn mutation_slot(&mut self, i: usize) -> (&[Vec<usize>], &mut [usize]) {
        assert!(i < self.mutation_count, "mutation slot {i} out of range");
        let offset = 2 * self.hybrid_count + i;
        let (parents, offspring) = self.tours.split_at_mut(self.base_size);
        (&*parents, offspring[offset].as_mut_slice())
    }

    /// Mutable access to every slot, for selection.
    pub(crate) fn tours_mut(&mut self) -> &mut Vec<Vec<usize>> {
        &mut self.tours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sample() -> Population {
        Population::random(6, 4, 3, 2, &mut create_rng(42))
    }

    #[test]
    fn test_capacity_layout() {
        let pop = sample();
        assert_eq!(pop.capacity(), 4 + 2 * 3 + 2);
        assert_eq!(pop.base_size(), 4);
        assert_eq!(pop.hybrid_count(), 3);
        assert_eq!(pop.mutation_count(), 2);
        assert_eq!(pop.parents().len(), 4);
    }

    #[test]
    fn test_every_slot_initialized() {
        let pop = sample();
        for tour in pop.tours() {
            let mut sorted = tour.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_hybrid_slots_positions() {
        let mut pop = sample();
        {
            let (parents, a, b) = pop.hybrid_slots(1);
            assert_eq!(parents.len(), 4);
            a.copy_from_slice(&[0, 1, 2, 3, 4, 5]);
            b.copy_from_slice(&[5, 4, 3, 2, 1, 0]);
        }
        assert_eq!(pop.get(4 + 2), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(pop.get(4 + 3), &[5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_mutation_slot_position() {
        let mut pop = sample();
        {
            let (_, slot) = pop.mutation_slot(1);
            slot.copy_from_slice(&[1, 0, 3, 2, 5, 4]);
        }
        assert_eq!(pop.get(pop.capacity() - 1), &[1, 0, 3, 2, 5, 4]);
    }

    #[test]
    fn test_replace() {
        let mut pop = sample();
        pop.replace(0, vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(pop.best(), &[5, 4, 3, 2, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "keep the vertex count")]
    fn test_replace_wrong_length() {
        let mut pop = sample();
        pop.replace(0, vec![0, 1]);
    }

    #[test]
    #[should_panic(expected = "hybrid slot 3 out of range")]
    fn test_hybrid_slot_out_of_range() {
        let mut pop = sample();
        pop.hybrid_slots(3);
    }

    #[test]
    #[should_panic(expected = "mutation slot 2 out of range")]
    fn test_mutation_slot_out_of_range() {
        let mut pop = sample();
        pop.mutation_slot(2);
    }
}
