//! Benchmarks for the layout reconstruction hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pdfreflow::{
    classify_direction, cluster_glyphs, Glyph, LayoutDirection, MergePolicy, Passthrough,
};

/// Build a synthetic vertical page: `columns` columns of `rows` 16pt glyphs.
fn synthetic_page(columns: usize, rows: usize) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(columns * rows);
    for col in 0..columns {
        let x0 = 60.0 + col as f32 * 24.0;
        for row in 0..rows {
            let top = 40.0 + row as f32 * 17.0;
            glyphs.push(Glyph::new(
                "觀",
                x0,
                x0 + 16.0,
                top,
                top + 16.0,
                16.0,
                "ABCDEF+SimSun",
            ));
        }
    }
    glyphs
}

fn bench_classify(c: &mut Criterion) {
    let page = synthetic_page(20, 30);
    c.bench_function("classify_direction_600_glyphs", |b| {
        b.iter(|| classify_direction(black_box(&page)))
    });
}

fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_glyphs");
    for columns in [5usize, 20, 40] {
        let page = synthetic_page(columns, 30);
        group.bench_with_input(BenchmarkId::from_parameter(columns), &page, |b, page| {
            b.iter(|| cluster_glyphs(LayoutDirection::Vertical, black_box(page.clone())))
        });
    }
    group.finish();
}

fn bench_full_page(c: &mut Criterion) {
    let page = synthetic_page(20, 30);
    c.bench_function("process_page_600_glyphs", |b| {
        b.iter(|| {
            pdfreflow::pipeline::process_page(
                1,
                black_box(page.clone()),
                MergePolicy::Styled,
                &Passthrough,
            )
        })
    });
}

criterion_group!(benches, bench_classify, bench_cluster, bench_full_page);
criterion_main!(benches);
