use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use canister::{EntityState, EntityStore, Merge, ReactiveCell, Store};

#[derive(Clone)]
struct State {
    counter: usize,
    name: String,
}

#[derive(Default)]
struct StatePatch {
    counter: Option<usize>,
    name: Option<String>,
}

impl Merge for State {
    type Patch = StatePatch;

    fn merge(&self, patch: StatePatch) -> Self {
        Self {
            counter: patch.counter.unwrap_or(self.counter),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
        }
    }
}

fn cell_publish_benchmark(c: &mut Criterion) {
    let cell: ReactiveCell<usize> = ReactiveCell::new(0);

    c.bench_function("cell_publish", |b| {
        let mut i = 0;
        b.iter(|| {
            cell.publish(black_box(i));
            i += 1;
        });
    });
}

fn cell_read_benchmark(c: &mut Criterion) {
    let cell: ReactiveCell<usize> = ReactiveCell::new(42);

    c.bench_function("cell_read", |b| {
        b.iter(|| {
            black_box(cell.current());
        });
    });
}

fn store_change_benchmark(c: &mut Criterion) {
    let store = Store::new(State {
        counter: 0,
        name: "test".to_string(),
    });

    c.bench_function("store_change", |b| {
        let mut i = 0;
        b.iter(|| {
            store.change(StatePatch {
                counter: Some(black_box(i)),
                ..Default::default()
            });
            i += 1;
        });
    });
}

fn store_change_with_benchmark(c: &mut Criterion) {
    let store = Store::new(State {
        counter: 0,
        name: "test".to_string(),
    });

    c.bench_function("store_change_with", |b| {
        let mut i = 0;
        b.iter(|| {
            store.change_with(|state| State {
                counter: black_box(i),
                name: state.name.clone(),
            });
            i += 1;
        });
    });
}

fn store_fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_fanout");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new(State {
            counter: 0,
            name: "test".to_string(),
        });

        let mut guards = Vec::new();
        for _ in 0..*subscriber_count {
            guards.push(store.listen(|_| {
                // Empty subscriber
            }));
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.change(StatePatch {
                        counter: Some(black_box(i)),
                        ..Default::default()
                    });
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn entity_update_benchmark(c: &mut Criterion) {
    let store: EntityStore<usize> = EntityStore::new(EntityState::new((0..100).collect(), None));

    c.bench_function("entity_update", |b| {
        b.iter(|| {
            store.update(|n| *n == black_box(50), 50);
        });
    });
}

criterion_group!(
    benches,
    cell_publish_benchmark,
    cell_read_benchmark,
    store_change_benchmark,
    store_change_with_benchmark,
    store_fanout_benchmark,
    entity_update_benchmark,
);
criterion_main!(benches);
