use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::parser::parse;
use quizforge_core::session::ScoreSummary;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let small = generate_bank(10);
    let medium = generate_bank(200);
    let large = generate_bank(2000);
    let noisy = generate_noisy_bank(200);

    group.bench_function("10_questions", |b| b.iter(|| parse(black_box(&small))));
    group.bench_function("200_questions", |b| b.iter(|| parse(black_box(&medium))));
    group.bench_function("2000_questions", |b| b.iter(|| parse(black_box(&large))));
    group.bench_function("200_noisy", |b| b.iter(|| parse(black_box(&noisy))));

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let bank = generate_bank(500);
    let records = parse(&bank).expect("generated bank parses");
    let answers: Vec<Option<String>> = (0..records.len())
        .map(|i| match i % 3 {
            0 => Some("1".to_string()),
            1 => Some("2".to_string()),
            _ => None,
        })
        .collect();

    c.bench_function("score_500", |b| {
        b.iter(|| ScoreSummary::compute(black_box(&records), black_box(&answers)))
    });
}

fn generate_bank(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!(
            "{i}\nप्रश्न {i}: निम्नलिखित में से कौन सा सही है?\nविकल्प A\nविकल्प B\nविकल्प C\nविकल्प D\n{}\nSolution for question {i}\n---\n",
            i % 4 + 1
        ));
    }
    s
}

/// Same shape with blank lines, indentation, and a short block every tenth entry.
fn generate_noisy_bank(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        if i % 10 == 0 {
            s.push_str("orphan line\nanother\n---\n");
        }
        s.push_str(&format!(
            "\n\n  {i}  \n\n  Question {i}?\n A \n\n B\nC\n D \n 2 \n\n---\n"
        ));
    }
    s
}

criterion_group!(benches, bench_parse, bench_score);
criterion_main!(benches);
