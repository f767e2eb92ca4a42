mod common;

use common::{FailingRng, FixedRng};
use curvekit::rng::Csprng;
use curvekit::{EccContext, EccError, Profile};
use hex_literal::hex;

fn context(width: usize, seed: u8) -> EccContext<Csprng> {
    let mut ctx = EccContext::initialize(width, Csprng::from_seed([seed; 32])).unwrap();
    ctx.generate_keypair().unwrap();
    ctx
}

fn public_key<R: rand_core::RngCore + rand_core::CryptoRng>(ctx: &EccContext<R>) -> Vec<u8> {
    let mut out = vec![0u8; ctx.profile().uncompressed_len()];
    ctx.export_public_key(&mut out).unwrap();
    out
}

#[test]
fn test_both_sides_agree_every_profile() {
    for profile in Profile::ALL {
        let width = profile.width();
        let mut alice = context(width, 0x11);
        let mut bob = context(width, 0x22);

        let alice_pub = public_key(&alice);
        let bob_pub = public_key(&bob);

        let mut k1 = vec![0u8; width];
        let mut k2 = vec![0u8; width];
        assert_eq!(alice.shared_secret(&bob_pub, &mut k1), Ok(width));
        assert_eq!(bob.shared_secret(&alice_pub, &mut k2), Ok(width));

        assert_eq!(k1, k2, "{profile}");
        assert!(k1.iter().any(|&b| b != 0));
    }
}

#[test]
fn test_peer_key_with_zero_x() {
    let peer = hex!(
        "04"
        "0000000000000000000000000000000000000000000000000000000000000000"
        "66485c780e2f83d72433bd5d84a06bb6541c2af31dae871728bf856a174f93f4"
    );

    let mut ctx = EccContext::initialize(32, Csprng::from_seed([9; 32])).unwrap();
    ctx.import_private_key(&[0x11; 32]).unwrap();

    let mut secret = [0u8; 32];
    assert_eq!(ctx.shared_secret(&peer, &mut secret), Ok(32));
    assert_eq!(
        secret,
        hex!("b391c56e557033a676e22e23aef7f8662502d530f92683878fa8ad649ab917be")
    );
}

#[test]
fn test_known_answer_p256() {
    let d1 = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let q2 = hex!(
        "04"
        "160b0615159ebbdf7fd4b1194d42b2986c6b2cccad799521b8b326292b6419b3"
        "93a20e124ad2a56ecea74f8dae84d8d91d0f5ac4a33f221226d1681cd12552ca"
    );

    let mut ctx = EccContext::initialize(32, Csprng::from_seed([5; 32])).unwrap();
    ctx.import_private_key(&d1).unwrap();

    let mut secret = [0u8; 32];
    ctx.shared_secret(&q2, &mut secret).unwrap();

    assert_eq!(
        secret,
        hex!("1a7bd1ec8dcb98a07ecebd9c8f9f7bb42e3fb0571e3750c0aeb221b751f8d417")
    );
}

#[test]
fn test_secret_independent_of_blinding_source() {
    let d1 = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let peer = public_key(&context(32, 0x33));

    let mut outputs = Vec::new();
    for pattern in [&[0x01u8][..], &[0xFF], &[0x12, 0x34, 0x56]] {
        let mut ctx = EccContext::initialize(32, FixedRng::new(pattern)).unwrap();
        ctx.import_private_key(&d1).unwrap();

        let mut secret = [0u8; 32];
        ctx.shared_secret(&peer, &mut secret).unwrap();
        outputs.push(secret);
    }

    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_rejects_malformed_peer_keys() {
    let mut alice = context(32, 0x11);
    let bob_pub = public_key(&context(32, 0x22));
    let mut out = [0u8; 32];

    // truncated
    assert_eq!(
        alice.shared_secret(&bob_pub[..64], &mut out),
        Err(EccError::InvalidEncoding)
    );

    // compressed tag on an uncompressed body
    let mut wrong_tag = bob_pub.clone();
    wrong_tag[0] = 0x02;
    assert_eq!(alice.shared_secret(&wrong_tag, &mut out), Err(EccError::InvalidEncoding));

    // point off the curve
    let mut off_curve = bob_pub.clone();
    off_curve[40] ^= 0x80;
    assert_eq!(alice.shared_secret(&off_curve, &mut out), Err(EccError::InvalidEncoding));

    // compressed keys are not accepted for key agreement
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02;
    compressed[1..].copy_from_slice(&bob_pub[1..33]);
    assert_eq!(alice.shared_secret(&compressed, &mut out), Err(EccError::InvalidEncoding));
}

#[test]
fn test_requires_keypair() {
    let bob_pub = public_key(&context(32, 0x22));
    let mut ctx = EccContext::initialize(32, Csprng::from_seed([1; 32])).unwrap();
    let mut out = [0u8; 32];

    assert_eq!(ctx.shared_secret(&bob_pub, &mut out), Err(EccError::MissingKeypair));
}

#[test]
fn test_output_buffer_too_small() {
    let mut alice = context(48, 0x11);
    let bob_pub = public_key(&context(48, 0x22));
    let mut out = [0u8; 47];

    assert_eq!(
        alice.shared_secret(&bob_pub, &mut out),
        Err(EccError::BufferTooSmall {
            needed: 48,
            actual: 47
        })
    );
}

#[test]
fn test_blinding_entropy_failure() {
    let d = [0x42u8; 24];
    let bob_pub = public_key(&context(24, 0x22));

    let mut ctx = EccContext::initialize(24, FailingRng::new()).unwrap();
    ctx.import_private_key(&d).unwrap();

    let mut out = [0u8; 24];
    assert_eq!(ctx.shared_secret(&bob_pub, &mut out), Err(EccError::EntropyExhausted));
}

#[test]
fn test_zero_blinding_draws_exhaust() {
    let d = [0x42u8; 16];
    let bob_pub = public_key(&context(16, 0x22));

    let mut ctx = EccContext::initialize(16, FixedRng::zeros()).unwrap();
    ctx.import_private_key(&d).unwrap();

    let mut out = [0u8; 16];
    assert_eq!(ctx.shared_secret(&bob_pub, &mut out), Err(EccError::EntropyExhausted));
}
