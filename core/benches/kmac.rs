#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use sp800_185_core::{KeccakF1600, Kmac, SecurityLevel};

const KEY: [u8; 32] = [0x40; 32];

fn tag(kmac: &Kmac, x: &[u8]) -> Vec<u8> {
    let mut kmac = kmac.clone();
    kmac.update(x);
    kmac.finalize()
}

fn kmac_benchmark(c: &mut Criterion) {
    for &level in [SecurityLevel::Bits128, SecurityLevel::Bits256].iter() {
        c.bench_function(&format!("Key {}", level), move |b| {
            b.iter(|| Kmac::<KeccakF1600>::new(level, black_box(&KEY), 32, b"bench"))
        });

        let kmac: Kmac = Kmac::new(level, &KEY, 32, b"bench").unwrap();
        for &size in [1_usize, 1024, 16 * 1024].iter() {
            let kmac = kmac.clone();
            let x = vec![0_u8; size];
            c.bench_function(&format!("Run {}/({}B)", level, size), move |b| {
                b.iter(|| tag(&kmac, black_box(&x)))
            });
        }
    }
}

criterion_group!(benches, kmac_benchmark);
criterion_main!(benches);
