use criterion::{Criterion, criterion_group, criterion_main};
use relog::collapse::RepeatTracker;
use relog::fmt::{format_line, memdump};
use relog::{Level, LocalTime};
use std::hint::black_box;

const TIME: LocalTime = LocalTime {
    year: 2026,
    month: 8,
    day: 5,
    hour: 12,
    minute: 34,
    second: 56,
};

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("fmt::format_line");

    group.bench_function("single_line", |b| {
        b.iter(|| {
            format_line(
                black_box(Level::Notice),
                TIME,
                black_box(7),
                black_box("Application started successfully"),
            )
        });
    });

    group.bench_function("multi_line", |b| {
        b.iter(|| {
            format_line(
                black_box(Level::Error),
                TIME,
                black_box(7),
                black_box("request failed\nretrying in 5s\ngiving up"),
            )
        });
    });

    group.finish();
}

fn bench_repeat_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("RepeatTracker::observe");

    group.bench_function("repeated", |b| {
        let mut tracker = RepeatTracker::new();
        tracker.observe("poll tick", Level::Debug, 1);
        b.iter(|| tracker.observe(black_box("poll tick"), Level::Debug, 1));
    });

    group.bench_function("alternating", |b| {
        let mut tracker = RepeatTracker::new();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let line = if flip { "request sent" } else { "response received" };
            tracker.observe(black_box(line), Level::Debug, 1)
        });
    });

    group.finish();
}

fn bench_memdump_rows(c: &mut Criterion) {
    let buffer: Vec<u8> = (0u8..=255).collect();

    c.bench_function("memdump::rows/256_bytes", |b| {
        b.iter(|| memdump::rows(black_box(&buffer)));
    });
}

criterion_group!(benches, bench_format_line, bench_repeat_tracker, bench_memdump_rows);
criterion_main!(benches);
