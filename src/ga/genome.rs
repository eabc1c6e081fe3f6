//! Tour genome.

use crate::error::{ensure, GaError, Result};
use crate::world::City;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate tour: a sequence of city indices and its total length.
///
/// Genomes are immutable values. Operators that "modify" a genome produce a
/// new one. The sequence is reference-counted, so cloning a genome (to carry
/// an elite forward or hand it to a snapshot) never copies the tour.
///
/// The constructor checks only the sequence length. Whether the sequence is
/// a permutation of `0..n` is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use u_salesman::ga::Genome;
/// use u_salesman::world::City;
///
/// let square = [
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ];
/// let tour = Genome::new(&square, vec![0, 1, 2, 3]).unwrap();
/// assert!((tour.distance() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genome {
    sequence: Arc<[usize]>,
    distance: f64,
}

impl Genome {
    /// Creates a genome, computing its tour distance over `cities`.
    ///
    /// Fails with `InvalidArgument` if `sequence.len() != cities.len()` or
    /// if any index is out of range for `cities`.
    pub fn new(cities: &[City], sequence: Vec<usize>) -> Result<Self> {
        ensure(cities.len() == sequence.len(), "sequence", || {
            format!(
                "lengths of cities and sequence must match, got {} and {}",
                cities.len(),
                sequence.len()
            )
        })?;
        if let Some(&index) = sequence.iter().find(|&&i| i >= cities.len()) {
            return Err(GaError::invalid(
                "sequence",
                format!("index {} out of range for {} cities", index, cities.len()),
            ));
        }
        Ok(Self::from_sequence(cities, sequence))
    }

    /// Builds a genome from a sequence already known to span `cities`.
    pub(crate) fn from_sequence(cities: &[City], sequence: Vec<usize>) -> Self {
        debug_assert_eq!(cities.len(), sequence.len());
        let distance = tour_distance(cities, &sequence);
        Self {
            sequence: sequence.into(),
            distance,
        }
    }

    /// The visiting order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Total closed-tour length.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether two genomes share the same underlying sequence allocation.
    pub fn ptr_eq(&self, other: &Genome) -> bool {
        Arc::ptr_eq(&self.sequence, &other.sequence)
    }
}

/// Closed-tour length: the sum of Euclidean legs between consecutive cities,
/// plus the leg from the last city back to the first.
///
/// A tour over fewer than two cities has length 0.
///
/// # Panics
/// Panics if any index in `sequence` is out of bounds for `cities`.
pub fn tour_distance(cities: &[City], sequence: &[usize]) -> f64 {
    if sequence.len() < 2 {
        return 0.0;
    }
    let closing = cities[sequence[sequence.len() - 1]].distance_to(&cities[sequence[0]]);
    sequence
        .windows(2)
        .map(|leg| cities[leg[0]].distance_to(&cities[leg[1]]))
        .sum::<f64>()
        + closing
}
