use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icomp_codec::Codec;
use icomp_core::{CodecConfig, Line};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_lines(count: usize) -> Vec<Line> {
    let mut rng = StdRng::seed_from_u64(0xC0DE);
    let pool: Vec<Line> = (0..24)
        .map(|_| (0..32).map(|_| if rng.gen_bool(0.5) { '1' } else { '0' }).collect())
        .collect();
    let mut lines = Vec::with_capacity(count);
    while lines.len() < count {
        let mut bytes = pool[rng.gen_range(0..pool.len())].clone().into_bytes();
        if rng.gen_bool(0.3) {
            let p = rng.gen_range(0..32);
            bytes[p] = if bytes[p] == b'0' { b'1' } else { b'0' };
        }
        let line = String::from_utf8(bytes).unwrap();
        let repeats = if rng.gen_bool(0.1) { rng.gen_range(2..6) } else { 1 };
        lines.extend(std::iter::repeat(line).take(repeats));
    }
    lines.truncate(count);
    lines
}

fn bench_compress(c: &mut Criterion) {
    let codec = Codec::new(CodecConfig::default()).unwrap();
    for &n in &[100usize, 1_000, 10_000] {
        let lines = generate_lines(n);
        c.bench_function(&format!("compress_{n}_lines"), |b| {
            b.iter(|| black_box(codec.compress(black_box(&lines)).unwrap()))
        });
    }
}

fn bench_decompress(c: &mut Criterion) {
    let codec = Codec::new(CodecConfig::default()).unwrap();
    let lines = generate_lines(10_000);
    let artifact = codec.compress(&lines).unwrap().artifact;
    c.bench_function("decompress_10000_lines", |b| {
        b.iter(|| black_box(codec.decompress(black_box(&artifact)).unwrap()))
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
