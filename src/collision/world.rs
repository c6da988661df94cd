//! The boundary between the rope and the host's spatial index.

use crate::float::Float;
use crate::transform::Affine2;
use crate::vec::Vec2;
use super::shape::{ShapeHandle, ShapeId};
use alloc::vec::Vec as AllocVec;

/// Spatial index owned by the host (physics engine or custom structure).
///
/// Queries must be synchronous lookups; the rope calls them from inside its
/// tick.
pub trait CollisionWorld<F: Float> {
    /// Append every shape within `radius` of `position` to `out`.
    fn query_nearby(&self, position: Vec2<F>, radius: F, out: &mut AllocVec<ShapeHandle<F>>);

    /// Counter that changes whenever the world advances or its shapes change.
    /// The rope rebuilds its collision snapshot only when this differs from
    /// the value seen at the previous rebuild.
    ///
    /// The host must advance the world once per fixed rope tick. A world whose
    /// generation never changes keeps the node-to-shape associations of the
    /// first tick, and nodes that move near a shape later pass through it.
    fn generation(&self) -> u64;
}

/// A world with no shapes. Use when the rope should not collide at all.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCollisions;

impl<F: Float> CollisionWorld<F> for NoCollisions {
    fn query_nearby(&self, _position: Vec2<F>, _radius: F, _out: &mut AllocVec<ShapeHandle<F>>) {}

    fn generation(&self) -> u64 {
        0
    }
}

/// A flat list of shapes with brute-force queries.
///
/// Good enough for a handful of static colliders; hosts with many shapes
/// should implement [`CollisionWorld`] over their own broad phase.
///
/// Shapes never move on their own, so the host calls [`advance`](Self::advance)
/// before every [`Rope::tick`](crate::Rope::tick) to let the rope re-query
/// with its current node positions.
#[derive(Clone, Debug, Default)]
pub struct StaticWorld<F: Float> {
    shapes: AllocVec<ShapeHandle<F>>,
    generation: u64,
}

impl<F: Float> StaticWorld<F> {
    pub fn new() -> Self {
        StaticWorld { shapes: AllocVec::new(), generation: 0 }
    }

    /// Add a shape, replacing any existing shape with the same id.
    pub fn insert(&mut self, handle: ShapeHandle<F>) {
        match self.shapes.iter_mut().find(|s| s.id == handle.id) {
            Some(existing) => *existing = handle,
            None => self.shapes.push(handle),
        }
        self.advance();
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeHandle<F>> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        self.advance();
        Some(self.shapes.remove(index))
    }

    /// Move a shape. Returns `false` if no shape has that id.
    pub fn set_transform(&mut self, id: ShapeId, local_to_world: Affine2<F>) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.local_to_world = local_to_world;
        self.advance();
        true
    }

    /// Mark the world as having ticked without any shape change. Call once
    /// per fixed tick.
    pub fn advance(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn shapes(&self) -> &[ShapeHandle<F>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<F: Float> CollisionWorld<F> for StaticWorld<F> {
    fn query_nearby(&self, position: Vec2<F>, radius: F, out: &mut AllocVec<ShapeHandle<F>>) {
        out.extend(self.shapes.iter().filter(|shape| {
            let reach = radius + shape.bounding_radius();
            shape.world_position().distance_sq(position) <= reach * reach
        }));
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
