//! Rope nodes: position-based points with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A Verlet node. Velocity is implicit: `position - previous_position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerletNode<F: Float> {
    pub position: Vec2<F>,
    pub previous_position: Vec2<F>,
    /// Pinned nodes are skipped by the integrator, the distance solver and the
    /// collision resolver. They only move through commands.
    pub pinned: bool,
}

impl<F: Float> VerletNode<F> {
    /// A node at rest at `position`.
    pub fn new(position: Vec2<F>) -> Self {
        VerletNode {
            position,
            previous_position: position,
            pinned: false,
        }
    }

    pub fn pinned(position: Vec2<F>) -> Self {
        VerletNode { pinned: true, ..Self::new(position) }
    }

    /// Implicit per-tick displacement.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.position - self.previous_position
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.previous_position = self.position;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Move without introducing velocity.
    pub fn teleport(&mut self, position: Vec2<F>) {
        self.position = position;
        self.previous_position = position;
    }

    /// Shift both positions by `offset`, keeping the implicit velocity.
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.position += offset;
        self.previous_position += offset;
    }
}

/// Sample `count` nodes on a vertical line hanging down from `anchor`,
/// `spacing` apart.
pub fn vertical_line<F: Float>(anchor: Vec2<F>, count: usize, spacing: F) -> AllocVec<VerletNode<F>> {
    (0..count)
        .map(|i| {
            let drop = spacing * F::from_usize(i);
            VerletNode::new(Vec2::new(anchor.x, anchor.y - drop))
        })
        .collect()
}
