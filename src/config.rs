//! Rope configuration.

use crate::constraint::ConstraintOrdering;
use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for a [`Rope`](crate::rope::Rope).
///
/// # Builder Pattern
/// ```
/// use verlet_rope::config::RopeConfig;
/// use verlet_rope::vec::Vec2;
///
/// let config: RopeConfig<f32> = RopeConfig::new()
///     .with_total_nodes(40)
///     .with_node_distance(0.25)
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_iterations(40)
///     .with_end_to_end_constraint(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RopeConfig<F: Float> {
    /// Number of nodes. Fixed for the rope's lifetime. Default: 100.
    pub total_nodes: usize,
    /// Rest distance between adjacent nodes. Default: 0.1.
    pub node_distance: F,
    /// Constant acceleration applied every tick. Default: (0, -9.81).
    pub gravity: Vec2<F>,
    /// Constraint + collision passes per tick. Default: 80.
    pub iterations: usize,
    /// Radius around each node searched for shapes. Default: 0.5.
    pub collision_radius: F,
    /// Distinct shapes tracked per snapshot. Default: 32.
    pub max_tracked_shapes: usize,
    /// Query results kept per node. Default: 8.
    pub max_colliders_per_node: usize,
    /// Cap the first-to-last distance at `total_nodes * node_distance`. Default: false.
    pub use_end_to_end_constraint: bool,
    /// Pair ordering inside a constraint pass. Default: sequential.
    pub constraint_ordering: ConstraintOrdering,
    /// Pin node 0 at the construction anchor. Default: true.
    pub pin_anchor: bool,
}

impl<F: Float> RopeConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            total_nodes: 100,
            node_distance: F::from_f32(0.1),
            gravity: Vec2::new(F::zero(), F::from_f32(-9.81)),
            iterations: 80,
            collision_radius: F::from_f32(0.5),
            max_tracked_shapes: 32,
            max_colliders_per_node: 8,
            use_end_to_end_constraint: false,
            constraint_ordering: ConstraintOrdering::Sequential,
            pin_anchor: true,
        }
    }

    pub fn with_total_nodes(mut self, total_nodes: usize) -> Self {
        self.total_nodes = total_nodes;
        self
    }

    pub fn with_node_distance(mut self, node_distance: F) -> Self {
        self.node_distance = node_distance;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_collision_radius(mut self, collision_radius: F) -> Self {
        self.collision_radius = collision_radius;
        self
    }

    pub fn with_max_tracked_shapes(mut self, max_tracked_shapes: usize) -> Self {
        self.max_tracked_shapes = max_tracked_shapes;
        self
    }

    pub fn with_max_colliders_per_node(mut self, max_colliders_per_node: usize) -> Self {
        self.max_colliders_per_node = max_colliders_per_node;
        self
    }

    pub fn with_end_to_end_constraint(mut self, enabled: bool) -> Self {
        self.use_end_to_end_constraint = enabled;
        self
    }

    pub fn with_constraint_ordering(mut self, ordering: ConstraintOrdering) -> Self {
        self.constraint_ordering = ordering;
        self
    }

    pub fn with_pin_anchor(mut self, pin_anchor: bool) -> Self {
        self.pin_anchor = pin_anchor;
        self
    }

    /// Check every field. A rope is never built from a config that fails here.
    pub fn validate(&self) -> Result<(), RopeError> {
        if self.total_nodes == 0 {
            return Err(RopeError::InvalidNodeCount);
        }
        if !self.node_distance.is_finite() || self.node_distance <= F::zero() {
            return Err(RopeError::InvalidNodeDistance);
        }
        if !self.gravity.is_finite() {
            return Err(RopeError::NonFiniteGravity);
        }
        if self.iterations == 0 {
            return Err(RopeError::InvalidIterations);
        }
        if !self.collision_radius.is_finite() || self.collision_radius < F::zero() {
            return Err(RopeError::InvalidRadius);
        }
        if self.max_tracked_shapes == 0 || self.max_colliders_per_node == 0 {
            return Err(RopeError::InvalidCapacity);
        }
        Ok(())
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
