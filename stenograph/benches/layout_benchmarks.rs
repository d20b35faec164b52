use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stenograph::{Layout, LayoutConfig, Text};

fn sample_text(words: usize) -> String {
    let vocabulary = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "typing", "practice",
    ];

    (0..words)
        .map(|i| {
            let word = vocabulary[i % vocabulary.len()];
            if i % 12 == 11 {
                format!("{word}\n")
            } else {
                format!("{word} ")
            }
        })
        .collect()
}

fn benchmark_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    // (words, width)
    let test_cases = vec![
        (50, 40),    // Quote
        (500, 80),   // Paragraphs
        (5000, 120), // Source file
    ];

    for (words, width) in test_cases {
        let text = Text::new(&sample_text(words)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("new", format!("{words}words_{width}cols")),
            &(text, width),
            |b, (text, width)| {
                b.iter(|| Layout::new(black_box(text), LayoutConfig::new(*width, 30)))
            },
        );
    }

    group.finish();
}

fn benchmark_word_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_bounds");

    let text = Text::new(&sample_text(500)).unwrap();
    let indices = [0, text.len() / 2, text.len() - 1];

    for index in indices {
        group.bench_with_input(BenchmarkId::new("at", index), &index, |b, &index| {
            b.iter(|| text.word_bounds(black_box(index)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_layout, benchmark_word_bounds);
criterion_main!(benches);
