//! Shape handles returned by a collision world query.

use crate::float::Float;
use crate::transform::Affine2;
use crate::vec::Vec2;

/// Stable identity of a host shape. Two query results with the same id are
/// the same shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

/// Local-space geometry of a host shape, before its transform is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeGeometry<F: Float> {
    /// Circle centred on the transform's origin. Local offsets are not supported.
    Circle { radius: F },
    /// Axis-aligned box in local space, centred on the origin. `size` is the full width/height.
    Box { size: Vec2<F> },
    /// Any shape the resolver has no rule for. Tracked, never resolved.
    Unsupported,
}

/// What the host hands back from [`CollisionWorld::query_nearby`](super::CollisionWorld::query_nearby).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHandle<F: Float> {
    pub id: ShapeId,
    pub geometry: ShapeGeometry<F>,
    pub local_to_world: Affine2<F>,
}

impl<F: Float> ShapeHandle<F> {
    pub fn new(id: ShapeId, geometry: ShapeGeometry<F>, local_to_world: Affine2<F>) -> Self {
        ShapeHandle { id, geometry, local_to_world }
    }

    /// Unscaled, unrotated circle at `center`.
    pub fn circle(id: ShapeId, center: Vec2<F>, radius: F) -> Self {
        Self::new(id, ShapeGeometry::Circle { radius }, Affine2::from_translation(center))
    }

    /// Box of full `size` placed by `local_to_world`.
    pub fn cuboid(id: ShapeId, size: Vec2<F>, local_to_world: Affine2<F>) -> Self {
        Self::new(id, ShapeGeometry::Box { size }, local_to_world)
    }

    /// World-space position of the shape's origin.
    pub fn world_position(&self) -> Vec2<F> {
        self.local_to_world.translation
    }

    /// Radius of a world-space circle around [`world_position`](Self::world_position)
    /// that contains the whole shape.
    pub fn bounding_radius(&self) -> F {
        let scale = self.local_to_world.column_scale();
        match self.geometry {
            ShapeGeometry::Circle { radius } => radius * scale.max_element(),
            ShapeGeometry::Box { size } => size.scale(F::half()).component_mul(scale).length(),
            ShapeGeometry::Unsupported => F::zero(),
        }
    }
}
