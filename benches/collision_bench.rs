use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use collision_engine::{
    collision::{
        capsule_capsule_mtv, capsule_capsule_mtv_exact, check_collision_circle_circle,
        circle_polygon_mtv, polygon_polygon_mtv, separating_axis_test,
    },
    math::{transform::Transform, vec2::Vec2},
    shapes::{Capsule, Circle, Polygon, Shape},
    check_collision,
};

// --- Helper for laying out a ring of shapes that partly overlap their neighbours ---
fn ring_of_circles(count: usize) -> Vec<Circle> {
    let radius = 1.0;
    let ring = count as f64 * radius * 0.3;
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * std::f64::consts::TAU;
            Circle::new(Vec2::from_angle(angle) * ring, radius)
        })
        .collect()
}

fn placed_polygon(sides: usize, x: f64, y: f64, rotation: f64) -> Polygon {
    let mut polygon = Polygon::regular(sides, 1.0);
    polygon.update(&Transform::from_translation_rotation(Vec2::new(x, y), rotation));
    polygon
}

// All-pairs circle tests, the shape of a brute-force broad phase
fn bench_circle_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_pairs");

    for count in [10, 100, 500].iter() {
        let circles = ring_of_circles(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &circles, |b, circles| {
            b.iter(|| {
                let mut hits = 0;
                for (i, a) in circles.iter().enumerate() {
                    for other in &circles[i + 1..] {
                        if check_collision_circle_circle(black_box(*a), black_box(*other)) {
                            hits += 1;
                        }
                    }
                }
                hits
            });
        });
    }
    group.finish();
}

// SAT cost grows with vertex count; separated pairs exit early
fn bench_polygon_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_sat");

    for sides in [3, 8, 32].iter() {
        let a = placed_polygon(*sides, 0.0, 0.0, 0.0);
        let overlapping = placed_polygon(*sides, 1.2, 0.3, 0.4);
        let separated = placed_polygon(*sides, 5.0, 0.0, 0.4);

        group.bench_with_input(BenchmarkId::new("overlapping_mtv", sides), sides, |b, _| {
            b.iter(|| polygon_polygon_mtv(black_box(&a), black_box(&overlapping)));
        });
        group.bench_with_input(BenchmarkId::new("separated", sides), sides, |b, _| {
            b.iter(|| separating_axis_test(black_box(&a), black_box(&separated)));
        });
        group.bench_with_input(BenchmarkId::new("circle_mtv", sides), sides, |b, _| {
            let circle = Circle::new(Vec2::new(1.2, 0.0), 0.5);
            b.iter(|| circle_polygon_mtv(black_box(circle), black_box(&a)));
        });
    }
    group.finish();
}

// Alternating projection against the exact segment solver
fn bench_capsules(c: &mut Criterion) {
    let mut group = c.benchmark_group("capsule_capsule");
    let c1 = Capsule::from_endpoints(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 1.0);
    let c2 = Capsule::from_endpoints(Vec2::new(3.0, 1.5), Vec2::new(8.0, 6.0), 1.0);

    group.bench_function("approximate", |b| {
        b.iter(|| capsule_capsule_mtv(black_box(c1), black_box(c2)));
    });
    group.bench_function("exact", |b| {
        b.iter(|| capsule_capsule_mtv_exact(black_box(c1), black_box(c2)));
    });
    group.finish();
}

// Enum dispatch overhead over a mixed scene
fn bench_dispatch(c: &mut Criterion) {
    let shapes: Vec<Shape> = vec![
        Circle::new(Vec2::new(0.0, 0.0), 1.0).into(),
        Capsule::new(Vec2::new(1.0, 0.5), Vec2::UNIT_X, 0.5, 2.0).into(),
        placed_polygon(5, -1.0, 0.5, 0.2).into(),
        Circle::new(Vec2::new(0.5, -1.0), 0.75).into(),
        placed_polygon(4, 1.5, -0.5, 0.0).into(),
    ];

    c.bench_function("dispatch_mixed_scene", |b| {
        b.iter(|| {
            let mut resolved = 0;
            for (i, a) in shapes.iter().enumerate() {
                for other in &shapes[i + 1..] {
                    if let Ok(Some(_)) = check_collision(black_box(a), black_box(other)) {
                        resolved += 1;
                    }
                }
            }
            resolved
        });
    });
}

criterion_group!(benches, bench_circle_pairs, bench_polygon_sat, bench_capsules, bench_dispatch);
criterion_main!(benches);
