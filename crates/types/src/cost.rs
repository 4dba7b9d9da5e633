//! Link and path costs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative link or path cost.
///
/// Two sentinel values matter to the engines:
///
/// - [`Cost::INFINITY`] marks an unreachable destination in link-state
///   tables. It never appears on a link.
/// - [`Cost::POISONED`] is the cost advertised for a poisoned link: large
///   but finite, so a poisoned route still participates in path
///   computation and can be routed around when an alternate path is
///   cheaper.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost(u32);

impl Cost {
    /// Cost of a node to itself.
    pub const ZERO: Self = Cost(0);

    /// Unreachable sentinel, used only in link-state routing tables.
    pub const INFINITY: Self = Cost(u32::MAX);

    /// Classic poison-reverse value advertised for a failed link.
    pub const POISONED: Self = Cost(16);

    /// Create a cost from a raw value.
    pub fn new(cost: u32) -> Self {
        Cost(cost)
    }

    /// Get the raw value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Whether this is the unreachable sentinel.
    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    /// Add two costs without wrapping past the infinity sentinel.
    pub fn saturating_add(self, other: Cost) -> Cost {
        if self.is_infinite() || other.is_infinite() {
            return Cost::INFINITY;
        }
        Cost(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_puts_infinity_last() {
        assert!(Cost::ZERO < Cost::POISONED);
        assert!(Cost::POISONED < Cost::INFINITY);
        assert!(Cost::new(1_000_000) < Cost::INFINITY);
    }

    #[test]
    fn test_saturating_add_preserves_infinity() {
        assert_eq!(Cost::INFINITY.saturating_add(Cost::new(1)), Cost::INFINITY);
        assert_eq!(Cost::new(1).saturating_add(Cost::INFINITY), Cost::INFINITY);
        assert_eq!(Cost::new(2).saturating_add(Cost::new(3)), Cost::new(5));
    }

    #[test]
    fn test_saturating_add_never_wraps_into_finite_range() {
        let huge = Cost::new(u32::MAX - 1);
        assert_eq!(huge.saturating_add(huge), Cost::INFINITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::new(4).to_string(), "4");
        assert_eq!(Cost::INFINITY.to_string(), "inf");
    }
}
