//! Benchmarks for checklist filtering primitives.
//!
//! These benchmarks measure the predicate work done on every keystroke and
//! selector change. Note: the binary crate does not expose a library target,
//! so the display predicate is mirrored here over a representative item set.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct Item {
    name: String,
    category: usize,
    completed: bool,
}

fn build_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            name: format!("Sacred item number {}", i),
            category: i % 5,
            completed: i % 3 == 0,
        })
        .collect()
}

fn display_scan(items: &[Item], category: usize, search: &str, hide_completed: bool) -> usize {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.category == category)
        .filter(|item| !hide_completed || !item.completed)
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .count()
}

fn bench_display_scan(c: &mut Criterion) {
    let items = build_items(2000);

    c.bench_function("display_scan_no_search", |b| {
        b.iter(|| display_scan(black_box(&items), black_box(2), black_box(""), true))
    });

    c.bench_function("display_scan_with_search", |b| {
        b.iter(|| display_scan(black_box(&items), black_box(2), black_box("number 19"), false))
    });
}

fn bench_case_insensitive_contains(c: &mut Criterion) {
    let name = "Tal Rasha's Guardianship";

    c.bench_function("lowercase_contains", |b| {
        b.iter(|| black_box(name).to_lowercase().contains(black_box("rasha")))
    });
}

criterion_group!(benches, bench_display_scan, bench_case_insensitive_contains);
criterion_main!(benches);
