//! City type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A city: an identifier and a fixed position on the plane.
///
/// Cities are created once during world setup and never change.
///
/// # Examples
///
/// ```
/// use u_salesman::world::City;
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City identifier (its index in the world).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let c = City::new(3, 1.5, -2.0);
        assert_eq!(c.id(), 3);
        assert_eq!(c.x(), 1.5);
        assert_eq!(c.y(), -2.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = City::new(0, 1.0, 2.0);
        let b = City::new(1, -4.0, 7.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
