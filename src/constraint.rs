//! Distance constraints: adjacent-pair relaxation and the end-to-end clamp.

use crate::float::Float;
use crate::node::VerletNode;

/// Order in which adjacent pairs are relaxed within one pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintOrdering {
    /// Gauss-Seidel sweep from the first pair to the last. Each pair sees its
    /// neighbour's already-updated position.
    #[default]
    Sequential,
    /// All pairs starting at an even index, then all pairs starting at an odd
    /// index. Pairs inside one half share no node, so each half can be split
    /// across threads without write conflicts.
    RedBlack,
}

/// Keeps nodes `a` and `b` at `rest_length` apart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// One relaxation step. Free nodes split the correction evenly; if one
    /// node is pinned the other takes all of it.
    pub fn solve(&self, nodes: &mut [VerletNode<F>]) {
        let delta = nodes[self.a].position - nodes[self.b].position;
        let dist = delta.length();
        if dist == F::zero() {
            return; // coincident, direction undefined
        }

        let correction = (self.rest_length - dist) / dist;
        let shift = delta.scale(correction);

        match (nodes[self.a].pinned, nodes[self.b].pinned) {
            (false, false) => {
                let half = shift.scale(F::half());
                nodes[self.a].position += half;
                nodes[self.b].position -= half;
            }
            (true, false) => nodes[self.b].position -= shift,
            (false, true) => nodes[self.a].position += shift,
            (true, true) => {}
        }
    }
}

/// Caps the straight-line distance between the first and last node.
///
/// Only ever pulls the ends together; a slack rope is left alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EndToEndConstraint<F: Float> {
    pub max_length: F,
}

impl<F: Float> EndToEndConstraint<F> {
    /// The cap used by a rope: `node_count * node_distance`.
    pub fn for_rope(node_count: usize, node_distance: F) -> Self {
        EndToEndConstraint { max_length: F::from_usize(node_count) * node_distance }
    }

    pub fn solve(&self, nodes: &mut [VerletNode<F>]) {
        if nodes.len() < 2 {
            return;
        }
        let last = nodes.len() - 1;
        let dist = nodes[0].position.distance(nodes[last].position);
        if dist <= self.max_length {
            return;
        }
        DistanceConstraint::new(0, last, self.max_length).solve(nodes);
    }
}

/// One full pass over every adjacent pair of the chain.
pub fn solve_chain<F: Float>(nodes: &mut [VerletNode<F>], rest_length: F, ordering: ConstraintOrdering) {
    let pairs = nodes.len().saturating_sub(1);
    match ordering {
        ConstraintOrdering::Sequential => {
            for i in 0..pairs {
                DistanceConstraint::new(i, i + 1, rest_length).solve(nodes);
            }
        }
        ConstraintOrdering::RedBlack => {
            for i in (0..pairs).step_by(2) {
                DistanceConstraint::new(i, i + 1, rest_length).solve(nodes);
            }
            for i in (1..pairs).step_by(2) {
                DistanceConstraint::new(i, i + 1, rest_length).solve(nodes);
            }
        }
    }
}
