use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plotpack::{
    LabelRequest, LabelSpec, NodeSpec, PackConfig, PackingRequest, ShapeKind, pack, place_labels,
};
use std::hint::black_box;

fn packing_request(count: usize, groups: usize) -> PackingRequest {
    let nodes = (0..count)
        .map(|i| NodeSpec {
            id: format!("n{i}"),
            value: 1.0 + (i % 13) as f32,
            group: if groups > 1 {
                Some(format!("g{}", i % groups))
            } else {
                None
            },
            fixed: false,
        })
        .collect();
    PackingRequest {
        nodes,
        shape: ShapeKind::Circle,
        canvas_width: 900.0,
        canvas_height: 600.0,
        area_budget_fraction: 0.35,
        min_size: 3.0,
        max_size: 90.0,
        protected_top_height: 40.0,
        iterations: 300,
        rng_seed: 7,
    }
}

fn label_request(count: usize) -> LabelRequest {
    // Clustered anchors so the DP has real conflicts to untangle.
    let labels = (0..count)
        .map(|i| LabelSpec {
            id: format!("l{i}"),
            anchor_y: (i / 3) as f32 * 60.0 + (i % 3) as f32 * 4.0,
            height: 14.0,
        })
        .collect();
    LabelRequest {
        labels,
        chart_height: (count as f32 / 3.0 + 1.0) * 60.0 + 100.0,
        grid_size: 3.0,
        protection_radius: 1,
    }
}

fn bench_packing(c: &mut Criterion) {
    let config = PackConfig::default();
    let mut group = c.benchmark_group("pack");
    for &(count, groups) in &[(20usize, 1usize), (60, 4), (150, 6)] {
        let request = packing_request(count, groups);
        group.bench_with_input(
            BenchmarkId::new("nodes", format!("{count}x{groups}")),
            &request,
            |b, request| b.iter(|| pack(black_box(request), black_box(&config)).unwrap()),
        );
    }
    group.finish();
}

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("labels");
    for &count in &[12usize, 48, 120] {
        let request = label_request(count);
        group.bench_with_input(BenchmarkId::new("labels", count), &request, |b, request| {
            b.iter(|| place_labels(black_box(request)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_packing, bench_labels);
criterion_main!(benches);
