// Benchmark for drag gestures
// Measures full begin/update/end cycles against the default grid

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_timetable::models::catalog::Catalog;
use rust_timetable::models::slot::SlotSpace;
use rust_timetable::services::drag::DragController;

fn cell_keys() -> Vec<String> {
    SlotSpace::default().slots().map(|slot| slot.composite()).collect()
}

fn bench_pool_drops(c: &mut Criterion) {
    let keys = cell_keys();
    let mut group = c.benchmark_group("pool_drops");

    for updates in [1usize, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(updates), &updates, |b, &updates| {
            let mut ctl = DragController::new(Catalog::builtin(), SlotSpace::default());
            let mut n = 0usize;
            b.iter(|| {
                ctl.begin("classes", n % 8);
                for step in 0..updates {
                    ctl.update(Some(keys[(n + step) % keys.len()].as_str()));
                }
                let report = ctl.end(Some(keys[n % keys.len()].as_str()));
                n += 1;
                black_box(report)
            });
        });
    }

    group.finish();
}

fn bench_grid_moves(c: &mut Criterion) {
    let keys = cell_keys();
    let mut ctl = DragController::new(Catalog::builtin(), SlotSpace::default());
    ctl.begin("classes", 0);
    ctl.end(Some(keys[0].as_str()));
    ctl.begin("teachers", 0);
    ctl.end(Some(keys[0].as_str()));

    let mut at = 0usize;
    c.bench_function("grid_move_two_layers", |b| {
        b.iter(|| {
            let next = (at + 1) % keys.len();
            ctl.begin(&keys[at], 0);
            ctl.update(Some(keys[next].as_str()));
            let report = ctl.end(Some(keys[next].as_str()));
            at = next;
            black_box(report)
        });
    });
}

criterion_group!(benches, bench_pool_drops, bench_grid_moves);
criterion_main!(benches);
