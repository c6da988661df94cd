use verlet_rope::collision::{resolve_box, resolve_circle, resolve_collisions};
use verlet_rope::{
    Affine2, ShapeGeometry, ShapeHandle, ShapeId, SnapshotSet, StaticWorld, Vec2, VerletNode,
};

fn close(a: Vec2<f64>, b: Vec2<f64>) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn circle_pushes_node_to_boundary() {
    let resolved = resolve_circle(Vec2::new(1.0f64, 0.0), Vec2::new(0.0, 0.0), 2.0);
    assert_eq!(resolved, Some(Vec2::new(2.0, 0.0)));
}

#[test]
fn circle_resolution_is_idempotent() {
    let center = Vec2::new(0.0f64, 0.0);
    let once = resolve_circle(Vec2::new(1.0, 0.0), center, 2.0).unwrap();
    let twice = resolve_circle(once, center, 2.0).unwrap_or(once);
    assert_eq!(once, twice);
}

#[test]
fn circle_resolution_is_idempotent_in_every_direction() {
    let circles = [
        (Vec2::new(0.3f32, -1.7), 1.3f32, 0.37f32),
        (Vec2::new(1000.5, -250.25), 0.5, 0.2),
    ];
    for (center, radius, depth) in circles {
        for step in 0..2000 {
            let angle = step as f32 * std::f32::consts::TAU / 2000.0;
            let point = center + Vec2::new(angle.cos(), angle.sin()).scale(depth);
            let once = resolve_circle(point, center, radius).unwrap();
            let twice = resolve_circle(once, center, radius).unwrap_or(once);
            assert_eq!(once, twice, "center {:?}, angle {}", center, angle);
            assert!((once.distance(center) - radius).abs() < 1e-3);
        }
    }
}

#[test]
fn circle_ignores_outside_and_boundary_points() {
    let center = Vec2::new(1.0f32, 1.0);
    assert_eq!(resolve_circle(Vec2::new(4.0, 1.0), center, 2.0), None);
    assert_eq!(resolve_circle(Vec2::new(3.0, 1.0), center, 2.0), None);
}

#[test]
fn circle_center_is_left_unresolved() {
    let center = Vec2::new(1.0f32, 1.0);
    assert_eq!(resolve_circle(center, center, 2.0), None);
}

#[test]
fn box_pushes_out_along_smallest_penetration() {
    let identity = Affine2::identity();
    let resolved = resolve_box(
        Vec2::new(0.9f64, 0.3),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 1.0),
        &identity,
        &identity,
    );
    assert_eq!(resolved, Some(Vec2::new(1.0, 0.3)));
}

#[test]
fn box_keeps_sign_of_penetrated_side() {
    let identity = Affine2::identity();
    let resolved = resolve_box(
        Vec2::new(0.3f64, -0.8),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 1.0),
        &identity,
        &identity,
    );
    assert_eq!(resolved, Some(Vec2::new(0.3, -1.0)));
}

#[test]
fn box_ignores_points_outside_or_on_edge() {
    let identity = Affine2::identity();
    let half = Vec2::new(1.0f32, 1.0);
    let scale = Vec2::new(1.0, 1.0);
    assert_eq!(resolve_box(Vec2::new(1.5, 0.0), half, scale, &identity, &identity), None);
    assert_eq!(resolve_box(Vec2::new(1.0, 0.3), half, scale, &identity, &identity), None);
    assert_eq!(resolve_box(Vec2::new(0.3, 1.0), half, scale, &identity, &identity), None);
}

#[test]
fn box_compares_penetration_in_world_scale() {
    // Stretched 4x along x: 0.3 local units of x penetration are 1.2 world
    // units, deeper than the 0.4 along y.
    let to_world = Affine2::from_scale_angle_translation(Vec2::new(4.0f64, 1.0), 0.0, Vec2::zero());
    let to_local = to_world.inverse().unwrap();
    let resolved = resolve_box(
        Vec2::new(2.8, 0.6),
        Vec2::new(1.0, 1.0),
        to_world.column_scale(),
        &to_local,
        &to_world,
    )
    .unwrap();
    assert!(close(resolved, Vec2::new(2.8, 1.0)), "resolved to {:?}", resolved);
}

#[test]
fn rotated_box_resolves_in_local_frame() {
    let to_world = Affine2::from_scale_angle_translation(
        Vec2::new(1.0f64, 1.0),
        core::f64::consts::FRAC_PI_2,
        Vec2::new(5.0, 0.0),
    );
    let mut world = StaticWorld::new();
    world.insert(ShapeHandle::cuboid(ShapeId(7), Vec2::new(2.0, 4.0), to_world));

    // Local y points along world -x after the quarter turn, so the box spans
    // x in [3, 7] and y in [-1, 1]. (5.0, 0.8) sits 0.2 inside the top face.
    let mut nodes = vec![VerletNode::new(Vec2::new(5.0, 0.8))];
    let mut snapshots = SnapshotSet::new(4, 1, 4);
    snapshots.rebuild(&nodes, &world, 0.5);
    assert_eq!(resolve_collisions(&snapshots, &mut nodes), 1);

    assert!(close(nodes[0].position, Vec2::new(5.0, 1.0)), "resolved to {:?}", nodes[0].position);
}

#[test]
fn resolver_skips_pinned_nodes_and_unsupported_shapes() {
    let mut world = StaticWorld::new();
    world.insert(ShapeHandle::circle(ShapeId(1), Vec2::new(0.0f32, 0.0), 1.0));
    world.insert(ShapeHandle::new(ShapeId(2), ShapeGeometry::Unsupported, Affine2::identity()));

    let mut nodes = vec![
        VerletNode::pinned(Vec2::new(0.5, 0.0)),
        VerletNode::new(Vec2::new(0.0, 0.5)),
    ];
    let mut snapshots = SnapshotSet::new(8, 2, 8);
    snapshots.rebuild(&nodes, &world, 1.0);
    assert_eq!(snapshots.len(), 2);

    assert_eq!(resolve_collisions(&snapshots, &mut nodes), 1);
    assert_eq!(nodes[0].position, Vec2::new(0.5, 0.0));
    assert_eq!(nodes[1].position, Vec2::new(0.0, 1.0));
}

#[test]
fn later_shape_may_undo_earlier_one_within_a_pass() {
    // Two overlapping circles: escaping the first pushes the node into the
    // second, and the pass does not go back to re-check the first.
    let mut world = StaticWorld::new();
    world.insert(ShapeHandle::circle(ShapeId(1), Vec2::new(0.0f64, 0.0), 1.0));
    world.insert(ShapeHandle::circle(ShapeId(2), Vec2::new(1.5, 0.0), 1.0));

    let mut nodes = vec![VerletNode::new(Vec2::new(0.5, 0.0))];
    let mut snapshots = SnapshotSet::new(8, 1, 8);
    snapshots.rebuild(&nodes, &world, 0.0);

    assert_eq!(resolve_collisions(&snapshots, &mut nodes), 2);
    assert!(close(nodes[0].position, Vec2::new(0.5, 0.0)));
}
