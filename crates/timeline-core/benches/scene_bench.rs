use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use timeline_core::{Category, DisasterRecord, TimelineConfig, TimelineView};

fn synthetic(n: usize) -> Vec<DisasterRecord> {
    (0..n)
        .map(|i| {
            let year = 1980 + (i % 38) as i32;
            let category = Category::ALL[i % Category::ALL.len()];
            let mid = NaiveDate::from_yo_opt(year, 1 + (i * 7 % 365) as u32).expect("ordinal within 1..=365");
            let cost = 1.0 + (i as f64 * 0.37).sin().abs() * 100.0;
            DisasterRecord { name: format!("event-{i}"), category, cost, year, mid }
        })
        .collect()
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_scene");
    for &n in &[250usize, 5_000usize] {
        let data = synthetic(n);
        group.bench_function(format!("init_vis_{n}"), |b| {
            b.iter(|| {
                let view = TimelineView::new(TimelineConfig::default(), data.clone());
                black_box(view.scene().primitive_count());
            });
        });
        let view = TimelineView::new(TimelineConfig::default(), data.clone());
        group.bench_function(format!("render_svg_{n}"), |b| {
            b.iter(|| black_box(view.render_svg()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
