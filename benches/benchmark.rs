//! Performance benchmarks for replacecode

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use replacecode::Replacer;

fn generate_readme(num_blocks: usize, lines_per_block: usize) -> String {
    let mut md = String::from("# Benchmark Document\n\n");

    for i in 0..num_blocks {
        md.push_str(&format!("Section {} describes file{}.rs.\n\n", i, i));
        let prefix = if i % 3 == 0 { "> " } else { "" };
        md.push_str(&format!("{}<!-- REPLACECODE file{}.rs -->\n", prefix, i));
        md.push_str(&format!("{}```rust\n", prefix));
        for j in 0..lines_per_block {
            md.push_str(&format!("{}// stale line {}\n", prefix, j));
        }
        md.push_str(&format!("{}```\n\n", prefix));
    }

    md
}

fn generate_replacements(num_blocks: usize, lines_per_block: usize) -> HashMap<String, String> {
    (0..num_blocks)
        .map(|i| {
            let body: String = (0..lines_per_block)
                .map(|j| format!("fn f{}_{}() {{}}\n", i, j))
                .collect();
            (format!("file{}.rs", i), body)
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let replacer = Replacer::default();

    for num_blocks in [10, 100, 1000] {
        let readme = generate_readme(num_blocks, 20);
        let replacements = generate_replacements(num_blocks, 20);

        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &readme, |b, readme| {
            b.iter(|| replacer.update(black_box(readme), black_box(&replacements)))
        });
    }

    group.finish();
}

fn bench_unmapped(c: &mut Criterion) {
    let readme = generate_readme(1000, 20);
    let replacements: HashMap<String, String> = HashMap::new();
    let replacer = Replacer::default();

    c.bench_function("update_unmapped_1000", |b| {
        b.iter(|| replacer.update(black_box(&readme), black_box(&replacements)))
    });
}

criterion_group!(benches, bench_update, bench_unmapped);
criterion_main!(benches);
