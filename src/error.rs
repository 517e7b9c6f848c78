//! Error types for cloth setup.

use core::fmt;

/// Errors that can occur while mounting a cloth.
///
/// Numeric settings (mass, damping, segment counts, timestep) are a caller
/// contract and never produce an error; out-of-range values simply make
/// the simulation misbehave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClothError {
    /// A pin refers to a particle that does not exist.
    PinOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::PinOutOfBounds { index, count } => {
                write!(f, "pin index {} out of bounds (particle count: {})", index, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClothError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_index() {
        let err = ClothError::PinOutOfBounds { index: 170, count: 170 };
        assert_eq!(err.to_string(), "pin index 170 out of bounds (particle count: 170)");
    }
}
