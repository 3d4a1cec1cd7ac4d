use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rabin_karp::cs::string::RabinKarp;

fn random_text(len: usize, rng: &mut ChaCha8Rng) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'd')).collect()
}

fn naive_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn bench_find_all(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("find_all");

    for &text_len in &[1_000usize, 100_000] {
        let text = random_text(text_len, &mut rng);
        for &pattern_len in &[4usize, 64] {
            let pattern = text[text_len / 2..text_len / 2 + pattern_len].to_vec();
            let id = format!("{}/{}", text_len, pattern_len);

            group.bench_with_input(BenchmarkId::new("rabin_karp", &id), &id, |b, _| {
                let mut matcher = RabinKarp::seeded(7);
                b.iter(|| matcher.find_all(black_box(&text), black_box(&pattern)))
            });
            group.bench_with_input(BenchmarkId::new("rabin_karp_verify", &id), &id, |b, _| {
                let mut matcher = RabinKarp::seeded(7).verify(true);
                b.iter(|| matcher.find_all(black_box(&text), black_box(&pattern)))
            });
            group.bench_with_input(BenchmarkId::new("naive", &id), &id, |b, _| {
                b.iter(|| naive_find_all(black_box(&text), black_box(&pattern)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_find_all);
criterion_main!(benches);
