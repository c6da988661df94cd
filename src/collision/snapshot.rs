//! Per-tick cache of the shapes near the rope.
//!
//! Querying the host world is the expensive part of collision handling, and
//! the answer does not change between solver iterations of the same tick.
//! [`SnapshotSet::refresh`] therefore queries once per node, deduplicates the
//! results by [`ShapeId`], and keeps the set until the world's generation
//! changes.

use crate::float::Float;
use crate::node::VerletNode;
use crate::transform::Affine2;
use crate::vec::Vec2;
use super::shape::{ShapeGeometry, ShapeHandle, ShapeId};
use super::world::CollisionWorld;
use alloc::collections::BTreeMap;
use alloc::vec::Vec as AllocVec;

/// Resolver-ready geometry with scale already folded in where it applies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SnapshotGeometry<F: Float> {
    /// World-space radius: local radius times the larger axis scale.
    Circle { radius: F },
    /// Local-space (unscaled) half extents.
    Box { half_extents: Vec2<F> },
    Unsupported,
}

/// Everything the resolver needs about one shape, plus the nodes near it.
#[derive(Clone, Debug)]
pub struct ShapeSnapshot<F: Float> {
    pub id: ShapeId,
    pub geometry: SnapshotGeometry<F>,
    /// Unscaled extent: the radius for circles, the full size for boxes.
    pub size: Vec2<F>,
    pub world_position: Vec2<F>,
    pub scale: Vec2<F>,
    pub world_to_local: Affine2<F>,
    pub local_to_world: Affine2<F>,
    nodes: AllocVec<usize>,
}

impl<F: Float> ShapeSnapshot<F> {
    /// Capture a query result. Shapes whose transform cannot be inverted are
    /// classified as unsupported.
    pub fn from_handle(handle: &ShapeHandle<F>) -> Self {
        let local_to_world = handle.local_to_world;
        let scale = local_to_world.column_scale();
        let inverse = local_to_world.inverse();

        let (geometry, size) = match (handle.geometry, inverse) {
            (ShapeGeometry::Circle { radius }, Some(_)) => (
                SnapshotGeometry::Circle { radius: radius * scale.max_element() },
                Vec2::splat(radius),
            ),
            (ShapeGeometry::Box { size }, Some(_)) => (
                SnapshotGeometry::Box { half_extents: size.scale(F::half()) },
                size,
            ),
            _ => (SnapshotGeometry::Unsupported, Vec2::zero()),
        };

        ShapeSnapshot {
            id: handle.id,
            geometry,
            size,
            world_position: local_to_world.translation,
            scale,
            world_to_local: inverse.unwrap_or_else(Affine2::identity),
            local_to_world,
            nodes: AllocVec::new(),
        }
    }

    /// Indices of the nodes near this shape, in the order they were found.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }
}

/// Truncation counters from the most recent rebuild.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    /// Distinct shapes ignored because `max_tracked_shapes` was reached.
    pub shapes_dropped: usize,
    /// Node associations ignored because a shape's node list was full.
    pub associations_dropped: usize,
    /// Query results ignored because a node hit `max_colliders_per_node`.
    pub query_results_dropped: usize,
}

impl SnapshotStats {
    pub fn truncated(&self) -> bool {
        self.shapes_dropped + self.associations_dropped + self.query_results_dropped > 0
    }
}

/// Whether [`SnapshotSet::refresh`] queried the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rebuilt,
    /// The world had not advanced; the previous snapshot was kept as is.
    Reused,
}

/// Capacity-bounded map from shape identity to snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotSet<F: Float> {
    entries: AllocVec<ShapeSnapshot<F>>,
    index: BTreeMap<ShapeId, usize>,
    max_shapes: usize,
    max_nodes_per_shape: usize,
    max_results_per_node: usize,
    generation: Option<u64>,
    stats: SnapshotStats,
    scratch: AllocVec<ShapeHandle<F>>,
}

impl<F: Float> SnapshotSet<F> {
    pub fn new(max_shapes: usize, max_nodes_per_shape: usize, max_results_per_node: usize) -> Self {
        SnapshotSet {
            entries: AllocVec::with_capacity(max_shapes),
            index: BTreeMap::new(),
            max_shapes,
            max_nodes_per_shape,
            max_results_per_node,
            generation: None,
            stats: SnapshotStats::default(),
            scratch: AllocVec::with_capacity(max_results_per_node),
        }
    }

    /// Rebuild if the world's generation changed since the last rebuild (or
    /// if nothing was ever built), otherwise keep the current entries.
    pub fn refresh<W: CollisionWorld<F>>(
        &mut self,
        nodes: &[VerletNode<F>],
        world: &W,
        radius: F,
    ) -> RefreshOutcome {
        let generation = world.generation();
        if self.generation == Some(generation) {
            return RefreshOutcome::Reused;
        }
        self.rebuild(nodes, world, radius);
        RefreshOutcome::Rebuilt
    }

    /// Unconditionally clear and re-query every node.
    pub fn rebuild<W: CollisionWorld<F>>(&mut self, nodes: &[VerletNode<F>], world: &W, radius: F) {
        self.clear();
        let generation = world.generation();
        let mut scratch = core::mem::take(&mut self.scratch);

        for (node_index, node) in nodes.iter().enumerate() {
            scratch.clear();
            world.query_nearby(node.position, radius, &mut scratch);

            if scratch.len() > self.max_results_per_node {
                self.stats.query_results_dropped += scratch.len() - self.max_results_per_node;
                scratch.truncate(self.max_results_per_node);
            }
            for handle in scratch.iter() {
                self.record(node_index, handle);
            }
        }

        self.scratch = scratch;
        self.generation = Some(generation);

        log::debug!(
            "collision snapshot rebuilt: {} shapes, world generation {}",
            self.entries.len(),
            generation
        );
        if self.stats.truncated() {
            log::warn!(
                "collision snapshot truncated: {} shapes, {} node associations, {} query results dropped",
                self.stats.shapes_dropped,
                self.stats.associations_dropped,
                self.stats.query_results_dropped
            );
        }
    }

    fn record(&mut self, node_index: usize, handle: &ShapeHandle<F>) {
        if let Some(&slot) = self.index.get(&handle.id) {
            let entry = &mut self.entries[slot];
            if entry.nodes.contains(&node_index) {
                return;
            }
            if entry.nodes.len() >= self.max_nodes_per_shape {
                self.stats.associations_dropped += 1;
                return;
            }
            entry.nodes.push(node_index);
            return;
        }

        if self.entries.len() >= self.max_shapes || self.max_nodes_per_shape == 0 {
            self.stats.shapes_dropped += 1;
            return;
        }
        let mut entry = ShapeSnapshot::from_handle(handle);
        entry.nodes.push(node_index);
        self.index.insert(handle.id, self.entries.len());
        self.entries.push(entry);
    }

    /// Drop all entries and counters, keeping the recorded generation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.stats = SnapshotStats::default();
    }

    /// Force the next [`refresh`](Self::refresh) to rebuild.
    pub fn invalidate(&mut self) {
        self.generation = None;
    }

    pub fn entries(&self) -> &[ShapeSnapshot<F>] {
        &self.entries
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeSnapshot<F>> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SnapshotStats {
        self.stats
    }

    /// World generation seen by the last rebuild.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    pub fn max_shapes(&self) -> usize {
        self.max_shapes
    }
}
