//! Verlet rope: nodes, distance constraints and collision, run on a fixed tick.

use crate::collision::{resolve_collisions, CollisionWorld, SnapshotSet, SnapshotStats};
use crate::command::{CommandQueue, RopeCommand};
use crate::config::RopeConfig;
use crate::constraint::{solve_chain, EndToEndConstraint};
use crate::error::RopeError;
use crate::float::Float;
use crate::integrator;
use crate::node::{self, VerletNode};
use crate::observer::StepObserver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A rope of a fixed number of Verlet nodes.
///
/// The host owns scheduling: it calls [`tick`](Rope::tick) at a constant
/// rate and reads [`positions`](Rope::positions) afterwards. All outside
/// changes go through [`queue`](Rope::queue) and take effect at the start of
/// the next tick.
pub struct Rope<F: Float> {
    nodes: AllocVec<VerletNode<F>>,
    config: RopeConfig<F>,
    anchor: Option<Vec2<F>>,
    snapshots: SnapshotSet<F>,
    commands: CommandQueue<F>,
}

impl<F: Float> Rope<F> {
    /// Build a rope hanging straight down from `anchor`.
    ///
    /// With `pin_anchor` set, node 0 stays fixed at `anchor` until a
    /// [`RopeCommand::ReleaseAnchor`] is queued.
    pub fn new(anchor: Vec2<F>, config: RopeConfig<F>) -> Result<Self, RopeError> {
        if !anchor.is_finite() {
            return Err(RopeError::NonFinitePosition);
        }
        config.validate()?;
        let nodes = node::vertical_line(anchor, config.total_nodes, config.node_distance);
        Ok(Self::assemble(nodes, config))
    }

    /// Build a rope from explicit nodes. `config.total_nodes` is replaced by
    /// `nodes.len()`; node 0 is pinned in place if `pin_anchor` is set.
    pub fn from_nodes(nodes: AllocVec<VerletNode<F>>, mut config: RopeConfig<F>) -> Result<Self, RopeError> {
        config.total_nodes = nodes.len();
        config.validate()?;
        if nodes.iter().any(|n| !n.position.is_finite() || !n.previous_position.is_finite()) {
            return Err(RopeError::NonFinitePosition);
        }
        Ok(Self::assemble(nodes, config))
    }

    fn assemble(mut nodes: AllocVec<VerletNode<F>>, config: RopeConfig<F>) -> Self {
        let snapshots = SnapshotSet::new(
            config.max_tracked_shapes,
            nodes.len(),
            config.max_colliders_per_node,
        );
        let anchor = if config.pin_anchor {
            nodes[0].pin();
            Some(nodes[0].position)
        } else {
            None
        };
        Rope {
            nodes,
            config,
            anchor,
            snapshots,
            commands: CommandQueue::new(),
        }
    }

    /// Queue a change for the next tick. Commands naming a node outside the
    /// rope, or carrying non-finite values, are rejected here.
    pub fn queue(&mut self, command: RopeCommand<F>) -> Result<(), RopeError> {
        let count = self.nodes.len();
        let check_index = |index: usize| {
            if index < count {
                Ok(())
            } else {
                Err(RopeError::NodeOutOfBounds { index, count })
            }
        };

        match command {
            RopeCommand::Pin(index) | RopeCommand::Unpin(index) => check_index(index)?,
            RopeCommand::Teleport { index, position } => {
                check_index(index)?;
                if !position.is_finite() {
                    return Err(RopeError::NonFinitePosition);
                }
            }
            RopeCommand::SetAnchor(position) | RopeCommand::Translate(position) => {
                if !position.is_finite() {
                    return Err(RopeError::NonFinitePosition);
                }
            }
            RopeCommand::SetGravity(gravity) if !gravity.is_finite() => {
                return Err(RopeError::NonFiniteGravity);
            }
            RopeCommand::SetIterations(0) => return Err(RopeError::InvalidIterations),
            _ => {}
        }

        self.commands.push(command);
        Ok(())
    }

    /// Advance the rope by one fixed timestep.
    ///
    /// Order: queued commands, anchor override, integration, collision
    /// snapshot refresh, then `iterations` rounds of constraint solving and
    /// collision resolution. `dt` must be the same every call.
    pub fn tick<W: CollisionWorld<F>, O: StepObserver>(
        &mut self,
        dt: F,
        world: &W,
        observer: &mut O,
    ) -> Result<(), RopeError> {
        if !dt.is_finite() || dt <= F::zero() {
            return Err(RopeError::InvalidTimestep);
        }

        let applied = self.apply_commands();
        observer.on_commands_applied(applied);

        if let Some(anchor) = self.anchor {
            self.nodes[0].teleport(anchor);
        }

        integrator::integrate(&mut self.nodes, self.config.gravity, dt);
        observer.on_integrate();

        let outcome = self.snapshots.refresh(&self.nodes, world, self.config.collision_radius);
        observer.on_snapshot(outcome, self.snapshots.len(), self.snapshots.stats());

        let end_to_end = EndToEndConstraint::for_rope(self.nodes.len(), self.config.node_distance);
        for i in 0..self.config.iterations {
            solve_chain(&mut self.nodes, self.config.node_distance, self.config.constraint_ordering);
            if self.config.use_end_to_end_constraint {
                end_to_end.solve(&mut self.nodes);
            }
            let resolved = resolve_collisions(&self.snapshots, &mut self.nodes);
            observer.on_constraint_iteration(i, resolved);
        }

        observer.on_step_complete();
        Ok(())
    }

    fn apply_commands(&mut self) -> usize {
        let mut queue = core::mem::take(&mut self.commands);
        let mut applied = 0;
        for command in queue.drain() {
            self.apply(command);
            applied += 1;
        }
        self.commands = queue;
        if applied > 0 {
            log::debug!("applied {} rope commands", applied);
        }
        applied
    }

    fn apply(&mut self, command: RopeCommand<F>) {
        match command {
            RopeCommand::SetAnchor(position) => {
                self.anchor = Some(position);
                self.nodes[0].pin();
                self.snapshots.invalidate();
            }
            RopeCommand::ReleaseAnchor => {
                self.anchor = None;
                self.nodes[0].unpin();
            }
            RopeCommand::Pin(index) => self.nodes[index].pin(),
            RopeCommand::Unpin(index) => {
                if index == 0 {
                    self.anchor = None;
                }
                self.nodes[index].unpin();
            }
            RopeCommand::Teleport { index, position } => {
                if index == 0 && self.anchor.is_some() {
                    self.anchor = Some(position);
                }
                self.nodes[index].teleport(position);
                self.snapshots.invalidate();
            }
            RopeCommand::Translate(offset) => {
                for node in self.nodes.iter_mut() {
                    node.translate(offset);
                }
                if let Some(anchor) = self.anchor.as_mut() {
                    *anchor += offset;
                }
                self.snapshots.invalidate();
            }
            RopeCommand::SetGravity(gravity) => self.config.gravity = gravity,
            RopeCommand::SetIterations(iterations) => self.config.iterations = iterations,
            RopeCommand::SetEndToEndConstraint(enabled) => {
                self.config.use_end_to_end_constraint = enabled;
            }
            RopeCommand::InvalidateCollisions => self.snapshots.invalidate(),
        }
    }

    /// Current node positions, anchor first.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Positions at the start of the last tick, for render interpolation.
    pub fn previous_positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.previous_position).collect()
    }

    /// All nodes, anchor first.
    pub fn nodes(&self) -> &[VerletNode<F>] {
        &self.nodes
    }

    /// Node at `index`, if it exists.
    pub fn node(&self, index: usize) -> Option<&VerletNode<F>> {
        self.nodes.get(index)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a rope built through `new` or `from_nodes`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of segments between adjacent nodes.
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Sum of the current segment lengths.
    pub fn length(&self) -> F {
        self.nodes
            .windows(2)
            .fold(F::zero(), |acc, pair| acc + pair[0].position.distance(pair[1].position))
    }

    /// Position node 0 is held at, if anchored.
    pub fn anchor(&self) -> Option<Vec2<F>> {
        self.anchor
    }

    /// Current configuration, including changes applied by commands.
    pub fn config(&self) -> &RopeConfig<F> {
        &self.config
    }

    /// Collision snapshot used by the last tick.
    pub fn snapshots(&self) -> &SnapshotSet<F> {
        &self.snapshots
    }

    /// Truncation counters from the last snapshot rebuild.
    pub fn snapshot_stats(&self) -> SnapshotStats {
        self.snapshots.stats()
    }

    /// Number of commands waiting for the next tick.
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }
}
