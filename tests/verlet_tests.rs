use verlet_rope::integrator::{integrate, integrate_node};
use verlet_rope::{Vec2, VerletNode};

#[test]
fn free_fall_gravity() {
    let mut node: VerletNode<f32> = VerletNode::new(Vec2::new(0.0, 100.0));
    let g = Vec2::new(0.0, -9.81);
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        integrate_node(&mut node, g, dt);
    }

    let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
    assert!((node.position.y - expected_y).abs() < 1.0, "y = {}, expected ~ {}", node.position.y, expected_y);
    assert_eq!(node.position.x, 0.0);
}

#[test]
fn integration_step_matches_formula() {
    let mut node = VerletNode {
        position: Vec2::new(1.0f64, 1.0),
        previous_position: Vec2::new(0.5, 1.0),
        pinned: false,
    };
    integrate_node(&mut node, Vec2::new(0.0, -2.0), 0.5);

    assert_eq!(node.position, Vec2::new(1.5, 0.5));
    assert_eq!(node.previous_position, Vec2::new(1.0, 1.0));
}

#[test]
fn implicit_velocity_is_carried() {
    let mut node = VerletNode {
        position: Vec2::new(2.0f32, 0.0),
        previous_position: Vec2::new(1.0, 0.0),
        pinned: false,
    };
    for _ in 0..3 {
        integrate_node(&mut node, Vec2::zero(), 1.0 / 30.0);
    }
    assert_eq!(node.position, Vec2::new(5.0, 0.0));
    assert_eq!(node.velocity_raw(), Vec2::new(1.0, 0.0));
}

#[test]
fn pinned_node_stays_fixed() {
    let mut node: VerletNode<f32> = VerletNode::pinned(Vec2::new(5.0, 5.0));
    node.previous_position = Vec2::new(4.0, 4.0);
    integrate_node(&mut node, Vec2::new(1000.0, 1000.0), 1.0 / 60.0);
    assert_eq!(node.position, Vec2::new(5.0, 5.0));
    assert_eq!(node.previous_position, Vec2::new(4.0, 4.0));
}

#[test]
fn repeated_integration_is_bit_identical() {
    let run = || {
        let mut nodes: Vec<VerletNode<f32>> = (0..16)
            .map(|i| VerletNode {
                position: Vec2::new(i as f32 * 0.1, 3.0),
                previous_position: Vec2::new(i as f32 * 0.1 - 0.01, 3.02),
                pinned: false,
            })
            .collect();
        for _ in 0..500 {
            integrate(&mut nodes, Vec2::new(0.3, -9.81), 1.0 / 50.0);
        }
        nodes
    };

    let first = run();
    for _ in 0..4 {
        let again = run();
        for (a, b) in first.iter().zip(again.iter()) {
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
            assert_eq!(a.previous_position.x.to_bits(), b.previous_position.x.to_bits());
            assert_eq!(a.previous_position.y.to_bits(), b.previous_position.y.to_bits());
        }
    }
}
