use board_clock_core::{formatting::format_time, ClockEngine, Player};
use criterion::{criterion_group, criterion_main, Criterion};

criterion_main!(benches);
criterion_group!(benches, tick, format);

fn tick(c: &mut Criterion) {
    let mut clock = ClockEngine::with_durations(u64::MAX, u64::MAX);
    clock.activate(Player::Top);

    c.bench_function("Tick Running Clock", move |b| b.iter(|| clock.tick()));
}

fn format(c: &mut Criterion) {
    c.bench_function("Format Remaining Time", |b| {
        b.iter(|| format_time(criterion::black_box(599_999)))
    });
}
