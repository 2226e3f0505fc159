use bounding_volume::overlap::overlap_points;
use bounding_volume::{Scene, SceneConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Subsets per scene, each generated in the default [-100, 100] world
const SUBSETS: [usize; 3] = [10, 50, 200];

fn scene_setup(n: usize) -> Scene {
    let mut s = Scene::with_config(SceneConfig {
        seed: Some(42),
        ..Default::default()
    });
    for _ in 0..n {
        s.add_default_subset().unwrap();
    }
    s
}

fn recompute(c: &mut Criterion) {
    let mut g = c.benchmark_group("Recompute");
    for n in SUBSETS {
        let s = scene_setup(n);
        g.bench_function(format!("aabbs {}", n), |b| {
            b.iter(|| {
                let mut s = s.clone();
                s.recompute_aabbs();
                black_box(s)
            })
        });
        g.bench_function(format!("circles {}", n), |b| {
            b.iter(|| {
                let mut s = s.clone();
                s.recompute_circles();
                black_box(s)
            })
        });
    }
    g.finish()
}

fn overlaps(c: &mut Criterion) {
    let mut g = c.benchmark_group("Overlaps");
    for n in SUBSETS {
        let mut s = scene_setup(n);
        s.recompute_aabbs();
        let boxes = s.aabbs();
        g.bench_function(format!("overlap points {}", n), |b| {
            b.iter(|| overlap_points(black_box(&boxes)))
        });
    }
    g.finish()
}

criterion_group!(benches, recompute, overlaps);

criterion_main!(benches);
