use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::rc::Rc;
use stow::{Maybe, SharedBox};

fn bench_shared_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("SharedBox vs Rc");

    // Creation
    group.bench_function("Rc::new", |b| {
        b.iter(|| {
            black_box(Rc::new(black_box(42)));
        })
    });

    group.bench_function("SharedBox::new", |b| {
        b.iter(|| {
            black_box(SharedBox::new(black_box(42)));
        })
    });

    // Cloning - the cost of getting another handle to the same data.
    group.bench_function("Rc::clone", |b| {
        b.iter_batched(
            || Rc::new(42),
            |rc| {
                let _ = black_box(rc.clone());
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("SharedBox::clone", |b| {
        b.iter_batched(
            || SharedBox::new(42),
            |handle| {
                let _ = black_box(handle.clone());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_maybe(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maybe vs Option");

    group.bench_function("Option::replace", |b| {
        b.iter(|| {
            let mut slot: Option<u64> = None;
            black_box(slot.replace(black_box(7)));
            black_box(slot);
        })
    });

    group.bench_function("Maybe::emplace", |b| {
        b.iter(|| {
            let mut slot: Maybe<u64> = Maybe::empty();
            black_box(*slot.emplace(black_box(7)));
            black_box(slot);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_shared_box, bench_maybe);
criterion_main!(benches);
