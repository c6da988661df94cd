//! Verlet rope simulation with collision against static shapes.
//!
//! `verlet_rope` runs a 2D rope as a chain of position-based (Verlet) nodes:
//! fixed-step integration, iterative distance constraints, and collision
//! against circles and boxes supplied by the host's spatial index.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, fixed timestep only
//! - **Distance constraints**: Gauss-Seidel or red-black ordering, optional end-to-end cap
//! - **Collision snapshots**: one world query per node per world step, deduplicated by shape
//! - **Circle & box resolution**: minimum-penetration push-out in the shape's local frame
//! - **Deferred commands**: anchor, pin and gravity changes land between ticks
//! - **Observable**: monitor ticks via the `StepObserver` trait, or log them with `LogObserver`
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use verlet_rope::{NoOpStepObserver, Rope, RopeConfig, ShapeHandle, ShapeId, StaticWorld, Vec2};
//!
//! let mut world = StaticWorld::new();
//! world.insert(ShapeHandle::circle(ShapeId(1), Vec2::new(0.0f32, -3.0), 1.0));
//!
//! let config: RopeConfig<f32> = RopeConfig::new().with_total_nodes(20).with_node_distance(0.25);
//! let mut rope = Rope::new(Vec2::new(0.0, 0.0), config).unwrap();
//! for _ in 0..60 {
//!     world.advance();
//!     rope.tick(1.0 / 60.0, &world, &mut NoOpStepObserver).unwrap();
//! }
//! assert_eq!(rope.positions().len(), 20);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod transform;
pub mod node;
pub mod integrator;
pub mod constraint;
pub mod collision;
pub mod command;
pub mod rope;
pub mod timestep;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use transform::Affine2;
pub use node::VerletNode;
pub use constraint::{ConstraintOrdering, DistanceConstraint, EndToEndConstraint};
pub use collision::{
    CollisionWorld, NoCollisions, RefreshOutcome, ShapeGeometry, ShapeHandle, ShapeId, ShapeSnapshot,
    SnapshotGeometry, SnapshotSet, SnapshotStats, StaticWorld,
};
pub use command::{CommandQueue, RopeCommand};
pub use rope::Rope;
pub use timestep::FixedTimestep;
pub use config::RopeConfig;
pub use observer::{LogObserver, NoOpStepObserver, StepObserver};
pub use error::RopeError;
