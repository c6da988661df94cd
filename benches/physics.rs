//! Benchmarks for rope ticks with and without collision.

use criterion::{criterion_group, criterion_main, Criterion};
use verlet_rope::*;

fn bench_rope_free(c: &mut Criterion) {
    c.bench_function("rope_100_nodes_80_iterations_60_ticks", |b| {
        b.iter(|| {
            let config: RopeConfig<f32> = RopeConfig::new();
            let mut rope = Rope::new(Vec2::new(0.0, 10.0), config).unwrap();
            for _ in 0..60 {
                rope.tick(1.0 / 60.0, &NoCollisions, &mut NoOpStepObserver).unwrap();
            }
            rope.positions()
        });
    });
}

fn bench_rope_colliding(c: &mut Criterion) {
    let mut world = StaticWorld::new();
    for i in 0..16u64 {
        let x = (i % 4) as f32 * 1.5 - 2.25;
        let y = 8.0 - (i / 4) as f32 * 2.0;
        if i % 2 == 0 {
            world.insert(ShapeHandle::circle(ShapeId(i), Vec2::new(x, y), 0.4));
        } else {
            world.insert(ShapeHandle::cuboid(
                ShapeId(i),
                Vec2::new(0.8, 0.4),
                Affine2::from_scale_angle_translation(Vec2::new(1.0, 1.0), 0.5, Vec2::new(x, y)),
            ));
        }
    }

    c.bench_function("rope_100_nodes_16_shapes_60_ticks", |b| {
        b.iter(|| {
            let config: RopeConfig<f32> = RopeConfig::new();
            let mut rope = Rope::new(Vec2::new(0.0, 10.0), config).unwrap();
            let mut world = world.clone();
            for _ in 0..60 {
                world.advance();
                rope.tick(1.0 / 60.0, &world, &mut NoOpStepObserver).unwrap();
            }
            rope.positions()
        });
    });
}

fn bench_constraint_ordering(c: &mut Criterion) {
    for ordering in [ConstraintOrdering::Sequential, ConstraintOrdering::RedBlack] {
        let name = format!("rope_200_nodes_{:?}_60_ticks", ordering);
        c.bench_function(&name, |b| {
            b.iter(|| {
                let config: RopeConfig<f32> = RopeConfig::new()
                    .with_total_nodes(200)
                    .with_iterations(40)
                    .with_constraint_ordering(ordering);
                let mut rope = Rope::new(Vec2::new(0.0, 10.0), config).unwrap();
                for _ in 0..60 {
                    rope.tick(1.0 / 60.0, &NoCollisions, &mut NoOpStepObserver).unwrap();
                }
                rope.positions()
            });
        });
    }
}

criterion_group!(benches, bench_rope_free, bench_rope_colliding, bench_constraint_ordering);
criterion_main!(benches);
