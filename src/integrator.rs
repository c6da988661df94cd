//! Fixed-step Verlet integration.

use crate::float::Float;
use crate::node::VerletNode;
use crate::vec::Vec2;

/// Advance one node by one fixed timestep.
///
/// `new = pos + (pos - prev) + acceleration * dt^2`, and `prev` becomes the
/// pre-update position. Pinned nodes are left untouched.
pub fn integrate_node<F: Float>(node: &mut VerletNode<F>, acceleration: Vec2<F>, dt: F) {
    if node.pinned {
        return;
    }
    let current = node.position;
    let velocity = current - node.previous_position;
    node.position = current + velocity + acceleration.scale(dt * dt);
    node.previous_position = current;
}

/// Advance every node by one fixed timestep.
///
/// Nodes are independent here, so a host may split `nodes` into chunks and
/// integrate them in parallel with the same result.
pub fn integrate<F: Float>(nodes: &mut [VerletNode<F>], acceleration: Vec2<F>, dt: F) {
    for node in nodes.iter_mut() {
        integrate_node(node, acceleration, dt);
    }
}
