//! Permutation operators for tours.
//!
//! All operators work on `&[usize]` index vectors and keep the permutation
//! invariant: every output holds each of `0..n` exactly once.
//!
//! # Initialization
//!
//! - [`random_tour`]: uniform random permutation by draw-without-replacement
//!
//! # Crossover
//!
//! - [`hybridize`]: reciprocal window exchange, remaining positions refilled
//!   in each parent's own order (an order-crossover variant)
//!
//! # Mutation
//!
//! - [`MutationMethod::Swap`]: exchange the two window endpoints, O(1)
//! - [`MutationMethod::Reverse`]: reverse the window (2-opt move), O(n)
//! - [`MutationMethod::Rotate`]: move the window behind the tail, O(n)
//!
//! The `*_into` variants write into caller-owned buffers so that the
//! evolver can overwrite population slots in place.

use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Returns a uniformly random tour over `n` vertices.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::operators::random_tour;
/// use u_tspga::random::create_rng;
///
/// let mut tour = random_tour(6, &mut create_rng(42));
/// tour.sort_unstable();
/// assert_eq!(tour, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = vec![0; n];
    random_tour_into(&mut tour, rng);
    tour
}

/// Fills `tour` with a uniformly random permutation of `0..tour.len()`.
///
/// Position `j` receives the `k`-th still-unused vertex in index order,
/// with `k` drawn uniformly from the `n - j` remaining ones.
///
/// # Complexity
/// O(n²) time, O(n) space
pub fn random_tour_into<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    let mut used = vec![false; n];

    for j in 0..n {
        let shift = rng.random_range(0..n - j);
        let vertex = (0..n)
            .filter(|&v| !used[v])
            .nth(shift)
            .expect("shift is below the number of unused vertices");
        tour[j] = vertex;
        used[vertex] = true;
    }
}

// ============================================================================
// Crossover
// ============================================================================

/// Produces two children from two parents and a window.
///
/// The inclusive window `[min(from, to), max(from, to)]` is exchanged:
/// `child1` takes `parent2`'s values there and `child2` takes `parent1`'s.
/// Every other position of a child is filled, left to right, with its own
/// parent's remaining values in their original relative order.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::operators::hybridize;
///
/// let p1 = [0, 1, 2, 3, 4, 5];
/// let p2 = [5, 4, 3, 2, 1, 0];
/// let (c1, c2) = hybridize(&p1, &p2, 3, 2);
/// assert_eq!(c1, vec![0, 1, 3, 2, 4, 5]);
/// assert_eq!(c2, vec![5, 4, 2, 3, 1, 0]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length or a window bound is out of range.
pub fn hybridize(
    parent1: &[usize],
    parent2: &[usize],
    from: usize,
    to: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    let mut child1 = vec![0; n];
    let mut child2 = vec![0; n];
    hybridize_into(parent1, parent2, from, to, &mut child1, &mut child2);
    (child1, child2)
}

/// In-place form of [`hybridize`]; the children are overwritten entirely.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn hybridize_into(
    parent1: &[usize],
    parent2: &[usize],
    from: usize,
    to: usize,
    child1: &mut [usize],
    child2: &mut [usize],
) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        child1.len() == n && child2.len() == n,
        "children must match parent length"
    );
    let (lo, hi) = window(from, to, n);

    build_child(parent1, parent2, lo, hi, child1);
    build_child(parent2, parent1, lo, hi, child2);
}

/// Build one child: window from `donor`, the rest from `own` in order.
fn build_child(own: &[usize], donor: &[usize], lo: usize, hi: usize, child: &mut [usize]) {
    let n = own.len();
    let mut taken = vec![false; n];

    for i in lo..=hi {
        child[i] = donor[i];
        taken[donor[i]] = true;
    }

    let mut rest = own.iter().copied().filter(|&v| !taken[v]);
    for i in (0..lo).chain(hi + 1..n) {
        child[i] = rest
            .next()
            .expect("valid permutation: outside slots match untaken values");
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Structural perturbation applied by [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationMethod {
    /// Exchange the values at the two window endpoints.
    Swap,
    /// Reverse the values inside the window.
    Reverse,
    /// Excise the window, shift the tail left to close the gap and append
    /// the window after it: a left rotation of `tour[from..]` by the
    /// window length.
    Rotate,
}

impl MutationMethod {
    pub const ALL: [MutationMethod; 3] = [Self::Swap, Self::Reverse, Self::Rotate];

    /// Maps a selector in `{0, 1, 2}` to a method.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Picks a method uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Produces one child by applying `method` to `parent` over the window
/// `[min(from, to), max(from, to)]`.
///
/// A window of size one is legal for every method; swap and reverse then
/// return the parent unchanged.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::operators::{mutate, MutationMethod};
///
/// let parent = [0, 1, 2, 3, 4, 5];
/// assert_eq!(mutate(&parent, MutationMethod::Swap, 4, 1), vec![0, 4, 2, 3, 1, 5]);
/// assert_eq!(mutate(&parent, MutationMethod::Reverse, 1, 4), vec![0, 4, 3, 2, 1, 5]);
/// assert_eq!(mutate(&parent, MutationMethod::Rotate, 1, 4), vec![0, 5, 1, 2, 3, 4]);
/// ```
///
/// # Panics
/// Panics if a window bound is out of range.
pub fn mutate(parent: &[usize], method: MutationMethod, from: usize, to: usize) -> Vec<usize> {
    let mut child = vec![0; parent.len()];
    mutate_into(parent, &mut child, method, from, to);
    child
}

/// In-place form of [`mutate`]; `child` is overwritten entirely.
pub fn mutate_into(
    parent: &[usize],
    child: &mut [usize],
    method: MutationMethod,
    from: usize,
    to: usize,
) {
    assert_eq!(parent.len(), child.len(), "child must match parent length");
    let (lo, hi) = window(from, to, parent.len());

    child.copy_from_slice(parent);
    match method {
        MutationMethod::Swap => child.swap(lo, hi),
        MutationMethod::Reverse => child[lo..=hi].reverse(),
        MutationMethod::Rotate => child[lo..].rotate_left(hi - lo + 1),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Normalizes two window bounds into an inclusive `(lo, hi)` within `0..n`.
fn window(from: usize, to: usize, n: usize) -> (usize, usize) {
    assert!(
        from < n && to < n,
        "window [{from}, {to}] out of range for tour of length {n}"
    );
    if from <= to {
        (from, to)
    } else {
        (to, from)
    }
}

// ============================================================================
// Tests
// ============================================================================
