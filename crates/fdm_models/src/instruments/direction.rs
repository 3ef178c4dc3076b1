//! Option direction.

use std::fmt;

/// Direction of an option: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Call => write!(f, "call"),
            Direction::Put => write!(f, "put"),
        }
    }
}
