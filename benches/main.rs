use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{prelude::SliceRandom, rngs::SmallRng, SeedableRng};

use charbuf::CharBuf;

const DATA: &[&str] = &[
    "hello, world",
    "なぜみんな日本語を話してくれないのか",
    "ПочемужеонинеговорятпоРусски",
    "PorquénopuedensimplementehablarenEspañol",
    "Grüße aus Köln",
    "ΑΒΓαβγςσ",
    "안녕하세요",
    "МОСКВА-москва",
    "ｆｕｌｌｗｉｄｔｈ　ＴＥＸＴ",
    "mixed ascii と multibyte 😀🎉",
    "a,b,,c,dddd,ee",
    "",
    "🦀.☕",
];

const SEED: u64 = 0x5EED_5EED;

fn corpus() -> Vec<CharBuf> {
    DATA.iter().copied().map(CharBuf::from).collect()
}

fn char_len(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    c.bench_function("char_len", |b| {
        b.iter_batched_ref(
            || {
                let mut x = corpus();
                x.shuffle(&mut rng);
                x
            },
            |bufs| {
                for buf in bufs {
                    black_box(black_box(&*buf).char_len());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn reverse(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    c.bench_function("reverse", |b| {
        b.iter_batched_ref(
            || {
                let mut x = corpus();
                x.shuffle(&mut rng);
                x
            },
            |bufs| {
                for buf in bufs {
                    black_box(black_box(&*buf).reverse());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn upcase(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    c.bench_function("upcase", |b| {
        b.iter_batched_ref(
            || {
                let mut x = corpus();
                x.shuffle(&mut rng);
                x
            },
            |bufs| {
                for buf in bufs {
                    black_box(black_box(&*buf).upcase());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn find(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    c.bench_function("find", |b| {
        b.iter_batched_ref(
            || {
                let mut x = corpus();
                x.shuffle(&mut rng);
                x
            },
            |bufs| {
                for buf in bufs {
                    black_box(black_box(&*buf).find("の".as_bytes(), 0));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, char_len, reverse, upcase, find);
criterion_main!(benches);
