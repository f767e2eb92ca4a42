use curvekit::EccContext;
use curvekit::curves::{PrimeCurve, Secp256r1};
use curvekit::point::scalar_mul;
use curvekit::primitives::Uint;
use curvekit::rng::Csprng;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn keypair(seed: u8) -> (EccContext<Csprng>, [u8; 65]) {
    let mut ctx = EccContext::initialize(32, Csprng::from_seed([seed; 32])).unwrap();
    ctx.generate_keypair().unwrap();

    let mut public = [0u8; 65];
    ctx.export_public_key(&mut public).unwrap();

    (ctx, public)
}

pub fn bench_field(c: &mut Criterion) {
    let a = Secp256r1::G.x;
    let b = Secp256r1::G.y;

    c.bench_function("p256 field mul", |bench| {
        bench.iter(|| Secp256r1::field_mul(black_box(&a), black_box(&b)))
    });
    c.bench_function("p256 field invert", |bench| {
        bench.iter(|| Secp256r1::field_invert(black_box(&a)))
    });
}

pub fn bench_ladder(c: &mut Criterion) {
    let k = Secp256r1::ORDER.sub_with_borrow(&Uint::from_u64(12345)).0;

    c.bench_function("p256 scalar mul", |bench| {
        bench.iter(|| scalar_mul::<Secp256r1, 4>(&Secp256r1::G, black_box(&k), None))
    });
}

pub fn bench_protocols(c: &mut Criterion) {
    c.bench_function("p256 keygen", |bench| {
        let mut seed = 0u8;
        bench.iter(|| {
            seed = seed.wrapping_add(1);
            keypair(seed)
        })
    });

    let (mut alice, _) = keypair(1);
    let (_, bob_pub) = keypair(2);
    let mut secret = [0u8; 32];
    c.bench_function("p256 ecdh", |bench| {
        bench.iter(|| alice.shared_secret(black_box(&bob_pub), &mut secret))
    });

    let hash = [0x5Au8; 32];
    let mut signature = [0u8; 64];
    c.bench_function("p256 sign", |bench| {
        bench.iter(|| alice.sign(black_box(&hash), &mut signature))
    });

    let (_, alice_pub) = keypair(1);
    alice.sign(&hash, &mut signature).unwrap();
    c.bench_function("p256 verify", |bench| {
        bench.iter(|| alice.verify(black_box(&alice_pub), &hash, &signature))
    });
}

criterion_group!(benches, bench_field, bench_ladder, bench_protocols);
criterion_main!(benches);
