use budgety::ledger::{EntryKind, Ledger};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_sample_ledger(entry_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..entry_count {
        let kind = if idx % 4 == 0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        ledger.add_item(kind, format!("entry {idx}"), 10.0 + (idx % 100) as f64);
    }
    ledger
}

fn bench_recompute(c: &mut Criterion) {
    let ledger = build_sample_ledger(10_000);
    c.bench_function("recompute_all_10k", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger| {
                ledger.recompute_all();
                black_box(ledger.percentages());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_add_delete(c: &mut Criterion) {
    let ledger = build_sample_ledger(1_000);
    c.bench_function("add_then_delete_1k", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger| {
                let entry = ledger.add_item(EntryKind::Expense, "bench", 1.0);
                black_box(ledger.delete_item(EntryKind::Expense, entry.id));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_recompute, bench_add_delete);
criterion_main!(benches);
