use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keccak_sponge::permutation::LANES;
use keccak_sponge::{KeccakF1600, Sha3, Shake};
use rand::{RngCore, SeedableRng, rngs::SmallRng};

fn create_random_state(rng: &mut SmallRng) -> [u64; LANES] {
    let mut state = [0u64; LANES];
    for lane in state.iter_mut() {
        *lane = rng.next_u64();
    }
    state
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutation");
    let mut rng = SmallRng::seed_from_u64(42);

    group.bench_function("KeccakF1600::apply", |b| {
        let mut state = create_random_state(&mut rng);
        b.iter(|| KeccakF1600::apply(black_box(&mut state)))
    });

    group.finish();
}

fn bench_sponge(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sponge Operations");
    let mut rng = SmallRng::seed_from_u64(42);
    let data_sizes = [64, 256, 1024, 4096]; // Bytes

    for size in data_sizes.iter() {
        let mut input_data = vec![0u8; *size];
        rng.fill_bytes(&mut input_data);

        group.bench_with_input(
            criterion::BenchmarkId::new("Sha3-256::update+finalize", size),
            &input_data,
            |b, data| {
                let mut hasher = Sha3::new(256).unwrap();
                b.iter(|| {
                    hasher.update(black_box(data)).unwrap();
                    black_box(hasher.finalize());
                })
            },
        );
    }

    let mut filled = Shake::new(256).unwrap();
    let mut large_input = vec![0u8; 1024];
    rng.fill_bytes(&mut large_input);
    filled.update(&large_input).unwrap();

    group.bench_function("Shake256::output_into 4096", |b| {
        // Clone inside iter so every measurement starts before padding
        b.iter_batched(
            || filled.clone(),
            |mut xof| {
                let mut out = [0u8; 4096];
                xof.output_into(&mut out);
                black_box(out)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_permutation, bench_sponge);
criterion_main!(benches);
