//! Collision against static shapes owned by the host.
//!
//! The host exposes its shapes through [`CollisionWorld`]. Once per tick the
//! rope gathers the shapes near its nodes into a [`SnapshotSet`], and every
//! solver iteration pushes nodes back out of them with [`resolve_collisions`].

pub mod shape;
pub mod world;
pub mod snapshot;
pub mod resolver;

pub use shape::{ShapeGeometry, ShapeHandle, ShapeId};
pub use world::{CollisionWorld, NoCollisions, StaticWorld};
pub use snapshot::{RefreshOutcome, ShapeSnapshot, SnapshotGeometry, SnapshotSet, SnapshotStats};
pub use resolver::{resolve_box, resolve_circle, resolve_collisions};
