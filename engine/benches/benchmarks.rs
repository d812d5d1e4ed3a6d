//! Performance benchmarks for pokedex-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pokedex_engine::{Directory, ElementType, Order, Pokedex, Record, RecordTree, Starter};

fn record(id: i32) -> Record {
    Record::new(id, format!("mon-{}", id), ElementType::Normal, 50, 50, false)
}

/// Ids spread over the key space so the tree stays reasonably shallow.
fn scattered_ids(count: i32) -> impl Iterator<Item = i32> {
    (0..count).map(move |i| (i * 7_919) % count)
}

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_operations");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, &size| {
            b.iter(|| scattered_ids(size).map(record).collect::<RecordTree>())
        });

        group.bench_with_input(BenchmarkId::new("find_by_id", size), size, |b, &size| {
            let tree: RecordTree = scattered_ids(size).map(record).collect();
            b.iter(|| tree.find_by_id(black_box(size / 2)))
        });

        group.bench_with_input(BenchmarkId::new("in_order", size), size, |b, &size| {
            let tree: RecordTree = scattered_ids(size).map(record).collect();
            b.iter(|| tree.iter(black_box(Order::InOrder)).count())
        });

        group.bench_with_input(BenchmarkId::new("remove_all", size), size, |b, &size| {
            b.iter(|| {
                let mut tree: RecordTree = scattered_ids(size).map(record).collect();
                for id in scattered_ids(size) {
                    let _ = tree.remove(black_box(id));
                }
                tree
            })
        });
    }

    group.finish();
}

fn bench_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory");
    let pokedex = Pokedex::standard();

    for size in [10, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::new("sort", size), size, |b, &size| {
            b.iter(|| {
                let mut directory = Directory::new();
                for i in (0..size).rev() {
                    let _ = directory.create_with_starter(
                        format!("owner-{:04}", i),
                        Starter::Bulbasaur,
                        &pokedex,
                    );
                }
                directory.sort()
            })
        });
    }

    group.bench_function("merge_full_pokedex", |b| {
        b.iter(|| {
            let mut directory = Directory::new();
            let _ = directory.create_with_starter("Ash", Starter::Bulbasaur, &pokedex);
            if let Ok(red) = directory.create_with_starter("Red", Starter::Squirtle, &pokedex) {
                if let Some(owner) = directory.owner_mut(red) {
                    for id in 1..=151 {
                        let _ = owner.add(id, &pokedex);
                    }
                }
            }
            directory.merge(black_box("Ash"), black_box("Red"))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tree_operations, bench_directory);
criterion_main!(benches);
