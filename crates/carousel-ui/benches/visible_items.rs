use std::hint::black_box;
use std::time::Duration;

use carousel_core::Size;
use carousel_ui::{
    CarouselConfig, CarouselEngine, ItemLayout, LoopRendering, MeasureReport, ScaleAnimation,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn mounted(config: CarouselConfig, count: usize) -> CarouselEngine {
    let mut engine = match CarouselEngine::new(config, count) {
        Ok(engine) => engine,
        Err(err) => panic!("bench config rejected: {err}"),
    };
    engine.mount(Duration::ZERO);
    engine.on_geometry_measured(MeasureReport::Container(Size::new(1080.0, 600.0)));
    engine
}

fn bench_visible_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_items");
    for count in [10usize, 1_000, 100_000] {
        let base = CarouselConfig::new(ItemLayout::fixed(300.0))
            .with_initial_index(count as i64 / 2)
            .scale_animation(ScaleAnimation::default());

        let strip = mounted(base, count);
        group.bench_with_input(BenchmarkId::new("strip", count), &strip, |b, engine| {
            b.iter(|| black_box(engine.visible_items()))
        });

        let windowed = mounted(
            base
                .infinite_loop()
                .with_loop_rendering(LoopRendering::Windowed),
            count,
        );
        group.bench_with_input(BenchmarkId::new("windowed", count), &windowed, |b, engine| {
            b.iter(|| black_box(engine.visible_items()))
        });

        let circular = mounted(
            base.infinite_loop().with_loop_rendering(LoopRendering::Circular),
            count,
        );
        group.bench_with_input(BenchmarkId::new("circular", count), &circular, |b, engine| {
            b.iter(|| black_box(engine.visible_items()))
        });
    }
    group.finish();
}

fn bench_drag_frame(c: &mut Criterion) {
    let config = CarouselConfig::new(ItemLayout::fixed(300.0)).infinite_loop();
    let mut engine = mounted(config, 1_000);
    let mut now = Duration::ZERO;
    let mut tx = 0.0f32;
    c.bench_function("drag_frame", |b| {
        b.iter(|| {
            tx = (tx - 7.0) % 600.0;
            now += Duration::from_millis(16);
            engine.on_drag_changed(tx);
            engine.advance_frame(now);
            black_box(engine.visible_items())
        })
    });
}

criterion_group!(benches, bench_visible_items, bench_drag_frame);
criterion_main!(benches);
