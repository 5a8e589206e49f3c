// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use armval_config::ValidationPolicy;
use armval_core::{DecodeTable, Instruction, Report};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// A spread of words over the encoding space, generated with an LCG so the
// bench does not depend on a fixture.
fn words(n: usize) -> Vec<u32> {
    let mut state = 0x1234_5678u32;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let table = DecodeTable::arm32();
    let words = words(4096);

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("random_words", |b| {
        b.iter(|| {
            for &w in &words {
                black_box(table.classify(Instruction::new(w)));
            }
        })
    });
    group.bench_function("report", |b| {
        let policy = ValidationPolicy::default();
        b.iter(|| black_box(Report::build(&table, &policy, 0x1_0000, &words)))
    });
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("table_build", |b| b.iter(DecodeTable::arm32));
}

criterion_group!(benches, bench_classify, bench_table_build);
criterion_main!(benches);
