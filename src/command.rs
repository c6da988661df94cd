//! Deferred rope mutations.
//!
//! Hosts never edit nodes while a tick runs. They queue a [`RopeCommand`]
//! instead, and the rope drains the queue at the start of its next tick,
//! before integration.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::collections::VecDeque;

/// A change to apply between ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RopeCommand<F: Float> {
    /// Pin node 0 and move it to this position every tick (e.g. follow the cursor).
    SetAnchor(Vec2<F>),
    /// Stop overriding node 0 and let it fall freely.
    ReleaseAnchor,
    Pin(usize),
    Unpin(usize),
    /// Move one node without giving it velocity.
    Teleport { index: usize, position: Vec2<F> },
    /// Shift the whole rope, keeping its motion.
    Translate(Vec2<F>),
    SetGravity(Vec2<F>),
    SetIterations(usize),
    SetEndToEndConstraint(bool),
    /// Force a collision snapshot rebuild on the next tick even if the world
    /// generation is unchanged.
    InvalidateCollisions,
}

/// FIFO of commands waiting for the next tick.
#[derive(Clone, Debug, Default)]
pub struct CommandQueue<F: Float> {
    pending: VecDeque<RopeCommand<F>>,
}

impl<F: Float> CommandQueue<F> {
    pub fn new() -> Self {
        CommandQueue { pending: VecDeque::new() }
    }

    pub fn push(&mut self, command: RopeCommand<F>) {
        self.pending.push_back(command);
    }

    /// Take every pending command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = RopeCommand<F>> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
