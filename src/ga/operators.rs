//! Permutation primitives used by the TSP operator set.
//!
//! These work on plain `&[usize]` index sequences and know nothing about
//! cities or distances; [`TspOperators`](super::TspOperators) wraps their
//! output into [`Genome`](super::Genome)s.
//!
//! # Crossover
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), keeps absolute
//!   positions of the donor's window
//!
//! # Mutation
//!
//! - [`exchange_mutation`]: swap two distinct random positions, O(1)
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Construction
// ============================================================================

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX), single child.
///
/// The child starts as a copy of `parent1`. For every position `i` of a
/// random window `[start, end]` the value currently at `child[i]` trades
/// places with `parent2[i]` wherever that value sits in the child. Each step
/// is a transposition, so the child stays a permutation, and once position
/// `i` is processed it holds `parent2[i]` for good. The result matches the
/// textbook construction: the window comes from `parent2`, everything else
/// from `parent1` with conflicts repaired through the window mapping.
///
/// Sequences shorter than 2 are returned unchanged.
///
/// # Complexity
/// O(n · w) time for window width w, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn pmx_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    if parent1.len() < 2 {
        return parent1.to_vec();
    }
    let (start, end) = random_window(parent1.len(), rng);
    pmx_with_window(parent1, parent2, start, end)
}

/// PMX over a fixed window `[start, end]` (inclusive).
///
/// # Panics
/// Panics if the parents differ in length or `end` is out of bounds.
pub fn pmx_with_window(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    let mut child = parent1.to_vec();
    for i in start..=end {
        let incoming = parent2[i];
        if child[i] == incoming {
            continue;
        }
        // A value missing from the child means the inputs were not
        // permutations of each other; leave the position alone.
        if let Some(j) = child.iter().position(|&v| v == incoming) {
            child.swap(i, j);
        }
    }
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Exchange mutation: swap the values at two distinct random positions.
///
/// Both positions are uniform over the sequence and never equal, so every
/// call changes exactly two positions. Sequences shorter than 2 are left
/// unchanged.
///
/// # Complexity
/// O(1)
pub fn exchange_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Picks a window `[start, end]` with `0 <= start < end < n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn random_window<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(0..n - 1);
    let end = rng.random_range(start + 1..n);
    (start, end)
}

/// Two distinct indices in `0..n`, uniformly over unordered pairs.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    /// Textbook PMX: window from `donor`, rest from `template` with
    /// conflicts resolved by following the window mapping.
    fn reference_pmx(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
        let n = template.len();
        let mut child = vec![usize::MAX; n];
        child[start..=end].copy_from_slice(&donor[start..=end]);
        for i in (0..start).chain(end + 1..n) {
            let mut v = template[i];
            while let Some(k) = (start..=end).find(|&k| donor[k] == v) {
                v = template[k];
            }
            child[i] = v;
        }
        child
    }

    // ---- random_permutation ----

    #[test]
    fn test_random_permutation_valid() {
        let mut rng = create_rng(42);
        for n in [1, 2, 5, 40] {
            assert!(is_valid_permutation(&random_permutation(n, &mut rng), n));
        }
    }

    #[test]
    fn test_random_permutation_empty() {
        assert!(random_permutation(0, &mut create_rng(1)).is_empty());
    }

    #[test]
    fn test_random_permutation_reaches_every_ordering() {
        let mut rng = create_rng(2024);
        let seen: HashSet<Vec<usize>> = (0..600).map(|_| random_permutation(3, &mut rng)).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_random_permutation_same_seed() {
        let a = random_permutation(25, &mut create_rng(9));
        let b = random_permutation(25, &mut create_rng(9));
        assert_eq!(a, b);
    }

    // ---- PMX ----

    #[test]
    fn test_pmx_worked_example() {
        // Classic illustration with window [3, 6].
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];
        let p2 = vec![8, 2, 6, 7, 1, 5, 4, 0, 3];
        let child = pmx_with_window(&p1, &p2, 3, 6);
        assert_eq!(&child[3..=6], &p2[3..=6]);
        assert_eq!(child, reference_pmx(&p1, &p2, 3, 6));
        assert!(is_valid_permutation(&child, 9));
    }

    #[test]
    fn test_pmx_chained_mapping() {
        // Window values swap twice; naive value-swapping on parent1's
        // window values would leave child[0] != p2[0].
        let p1 = vec![0, 1, 2];
        let p2 = vec![1, 2, 0];
        let child = pmx_with_window(&p1, &p2, 0, 1);
        assert_eq!(child, vec![1, 2, 0]);
        assert_eq!(child, reference_pmx(&p1, &p2, 0, 1));
    }

    #[test]
    fn test_pmx_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];

        for _ in 0..100 {
            let c = pmx_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&c, 8), "PMX child not valid: {c:?}");
        }
    }

    #[test]
    fn test_pmx_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(pmx_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_pmx_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![0, 1, 2, 3, 4];
        assert_eq!(pmx_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_pmx_length_mismatch_panics() {
        let mut rng = create_rng(42);
        pmx_crossover(&[0, 1, 2], &[0, 1], &mut rng);
    }

    // ---- Exchange Mutation ----

    #[test]
    fn test_exchange_changes_exactly_two_positions() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            exchange_mutation(&mut perm, &mut rng);
            let changed = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_exchange_two_elements_always_swaps() {
        let mut rng = create_rng(9);
        for _ in 0..20 {
            let mut perm = vec![0, 1];
            exchange_mutation(&mut perm, &mut rng);
            assert_eq!(perm, vec![1, 0]);
        }
    }

    #[test]
    fn test_exchange_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        exchange_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Helpers ----

    #[test]
    fn test_random_window_bounds() {
        let mut rng = create_rng(42);
        for n in 2..12 {
            for _ in 0..200 {
                let (start, end) = random_window(n, &mut rng);
                assert!(start < end, "start {start} !< end {end}");
                assert!(end < n);
            }
        }
    }

    #[test]
    fn test_distinct_pair_covers_all_pairs() {
        let mut rng = create_rng(3);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let (i, j) = distinct_pair(4, &mut rng);
            assert_ne!(i, j);
            seen.insert((i.min(j), i.max(j)));
        }
        assert_eq!(seen.len(), 6);
    }

    proptest! {
        #[test]
        fn prop_pmx_matches_reference(
            (p1, p2, start, end) in (2usize..16).prop_flat_map(|n| {
                let perm = Just((0..n).collect::<Vec<_>>());
                (perm.clone().prop_shuffle(), perm.prop_shuffle(), 0..n - 1)
                    .prop_flat_map(move |(a, b, s)| (Just(a), Just(b), Just(s), s + 1..n))
            })
        ) {
            let child = pmx_with_window(&p1, &p2, start, end);
            prop_assert!(is_valid_permutation(&child, p1.len()));
            prop_assert_eq!(child, reference_pmx(&p1, &p2, start, end));
        }
    }
}
