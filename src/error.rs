//! Error types for dungeon generation

use std::fmt;

use crate::hex::CoordForm;

/// Errors that can occur during dungeon generation or coordinate math
#[derive(Debug, Clone)]
pub enum DungeonError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// A two-coordinate operation received mismatched representations
    IncompatibleRepresentation {
        /// Representation of the first operand
        a: CoordForm,
        /// Representation of the second operand
        b: CoordForm,
    },
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DungeonError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            DungeonError::IncompatibleRepresentation { a, b } => {
                write!(f, "incompatible coordinate representations: {:?} vs {:?}", a, b)
            }
        }
    }
}

impl std::error::Error for DungeonError {}

/// Result type alias for dungeon operations
pub type Result<T> = std::result::Result<T, DungeonError>;
