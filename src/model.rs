use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use strum::{Display, EnumIter, EnumString};

use crate::RouteError;

/// Identifies a vertex of the graph by its position in the adjacency structure.
/// The meaning of a vertex (garage, warehouse, customer) belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative accumulated distance along a path.
///
/// The maximum value doubles as the unreachable sentinel, addition saturates
/// so that extending an unreachable distance keeps it unreachable.
/// The bounds of [`crate::Graph`] on weights and vertex count keep every real path
/// length (and the sum of two) strictly below the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(u64);

impl Length {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);
    /// Distance of a target that cannot be reached from the source.
    pub const UNREACHABLE: Self = Self::MAX;

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_reachable(&self) -> bool {
        self.0 != Self::UNREACHABLE.0
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, length| acc + length)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}

/// Product category of an order.
/// Each category is stocked at its own warehouse, the facility every trip for
/// that category has to pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Phone,
    Tablet,
    Computer,
}

impl Category {
    /// Parses a category key such as `"phone"`.
    pub fn from_key(key: &str) -> Result<Self, RouteError> {
        key.parse()
            .map_err(|_| RouteError::UnknownCategory(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_log::test;

    use super::*;

    #[test]
    fn length_addition_saturates_at_unreachable() {
        assert_eq!(Length::new(3) + Length::new(4), Length::new(7));
        assert_eq!(Length::UNREACHABLE + Length::new(1), Length::UNREACHABLE);
        assert_eq!(Length::new(u64::MAX - 1) + Length::new(5), Length::UNREACHABLE);
        assert!(!Length::UNREACHABLE.is_reachable());
        assert!(Length::ZERO.is_reachable());
    }

    #[test]
    fn length_sum() {
        let total: Length = [1, 2, 3].into_iter().map(Length::new).sum();
        assert_eq!(total, Length::new(6));

        let empty: Length = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn length_display() {
        assert_eq!(Length::new(42).to_string(), "42");
        assert_eq!(Length::UNREACHABLE.to_string(), "unreachable");
    }

    #[test]
    fn category_keys() {
        for category in Category::iter() {
            assert_eq!(Category::from_key(&category.to_string()), Ok(category));
        }

        assert_eq!(Category::from_key("phone"), Ok(Category::Phone));
        assert_eq!(Category::from_key("tablet"), Ok(Category::Tablet));
        assert_eq!(Category::from_key("computer"), Ok(Category::Computer));
    }

    #[test]
    fn category_unknown_key() {
        assert_eq!(
            Category::from_key("laptop"),
            Err(RouteError::UnknownCategory("laptop".to_owned()))
        );
        assert_eq!(
            Category::from_key("Phone"),
            Err(RouteError::UnknownCategory("Phone".to_owned()))
        );
        assert!(Category::from_key("").is_err());
    }
}
