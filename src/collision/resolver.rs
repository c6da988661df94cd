//! Push nodes out of snapshot shapes.

use crate::float::Float;
use crate::node::VerletNode;
use crate::transform::Affine2;
use crate::vec::Vec2;
use super::snapshot::{ShapeSnapshot, SnapshotGeometry, SnapshotSet};

/// Project `point` onto the circle boundary if it lies inside.
///
/// Returns `None` when there is nothing to do: the point is on or outside the
/// boundary, or it sits exactly on the center where no push direction exists.
/// Points within a few ulps of the boundary count as on it, so a projected
/// point is left alone by the next call.
pub fn resolve_circle<F: Float>(point: Vec2<F>, center: Vec2<F>, radius: F) -> Option<Vec2<F>> {
    let offset = point - center;
    if offset.length() >= radius - boundary_slack(center, radius) {
        return None;
    }
    let direction = offset.try_normalize()?;
    Some(center + direction.scale(radius))
}

// Rounding error of `center + n * radius` grows with the magnitude of the
// center coordinates, not only with the radius.
fn boundary_slack<F: Float>(center: Vec2<F>, radius: F) -> F {
    let magnitude = radius + center.x.abs() + center.y.abs();
    F::epsilon() * F::from_f32(16.0) * magnitude
}

/// Push `point` out of a box through the face of least scaled penetration.
///
/// `half_extents` are in the box's local, unscaled frame; `scale` is the
/// per-axis world scale used to compare penetrations fairly.
pub fn resolve_box<F: Float>(
    point: Vec2<F>,
    half_extents: Vec2<F>,
    scale: Vec2<F>,
    world_to_local: &Affine2<F>,
    local_to_world: &Affine2<F>,
) -> Option<Vec2<F>> {
    let mut local = world_to_local.transform_point(point);
    let penetration = half_extents - local.abs();
    if penetration.x <= F::zero() || penetration.y <= F::zero() {
        return None;
    }

    if penetration.x * scale.x <= penetration.y * scale.y {
        local.x = half_extents.x * local.x.signum_or_one();
    } else {
        local.y = half_extents.y * local.y.signum_or_one();
    }
    Some(local_to_world.transform_point(local))
}

impl<F: Float> ShapeSnapshot<F> {
    /// Corrected position for `point`, or `None` if it is not colliding.
    pub fn resolve(&self, point: Vec2<F>) -> Option<Vec2<F>> {
        match self.geometry {
            SnapshotGeometry::Circle { radius } => resolve_circle(point, self.world_position, radius),
            SnapshotGeometry::Box { half_extents } => resolve_box(
                point,
                half_extents,
                self.scale,
                &self.world_to_local,
                &self.local_to_world,
            ),
            SnapshotGeometry::Unsupported => None,
        }
    }
}

/// One resolver pass: every shape in insertion order, every associated node.
///
/// A later shape may push a node back into an earlier one; the next solver
/// iteration gets another chance at it. Returns the number of corrections.
pub fn resolve_collisions<F: Float>(snapshots: &SnapshotSet<F>, nodes: &mut [VerletNode<F>]) -> usize {
    let mut corrected = 0;
    for shape in snapshots.entries() {
        for &index in shape.nodes() {
            let Some(node) = nodes.get_mut(index) else { continue };
            if node.pinned {
                continue;
            }
            if let Some(position) = shape.resolve(node.position) {
                node.position = position;
                corrected += 1;
            }
        }
    }
    corrected
}
