//! Error types for rope construction and control.

use core::fmt;

/// Errors from building or driving a rope.
///
/// Nothing inside a tick fails: degenerate geometry is skipped and capacity
/// overflows are truncated. Errors only come from bad configuration and bad
/// host input.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// A rope needs at least one node.
    InvalidNodeCount,
    /// Node distance must be positive and finite.
    InvalidNodeDistance,
    /// Collision radius must be non-negative and finite.
    InvalidRadius,
    /// At least one solver iteration is required.
    InvalidIterations,
    /// Snapshot capacities must be at least 1.
    InvalidCapacity,
    /// Gravity must be finite.
    NonFiniteGravity,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Positions handed to the rope must be finite.
    NonFinitePosition,
    /// Node index is out of bounds.
    NodeOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::InvalidNodeCount => write!(f, "rope needs at least one node"),
            RopeError::InvalidNodeDistance => write!(f, "node distance must be positive and finite"),
            RopeError::InvalidRadius => write!(f, "collision radius must be non-negative and finite"),
            RopeError::InvalidIterations => write!(f, "iteration count must be at least 1"),
            RopeError::InvalidCapacity => write!(f, "snapshot capacities must be at least 1"),
            RopeError::NonFiniteGravity => write!(f, "gravity must be finite"),
            RopeError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            RopeError::NonFinitePosition => write!(f, "position must be finite"),
            RopeError::NodeOutOfBounds { index, count } => {
                write!(f, "node index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for RopeError {}
