mod common;

use common::{FailingRng, FixedRng, digest};
use curvekit::curves::{PrimeCurve, Secp256r1};
use curvekit::keys::Keypair;
use curvekit::primitives::Uint;
use curvekit::rng::Csprng;
use curvekit::signatures::ecdsa;
use curvekit::{EccContext, EccError, Profile};
use hex_literal::hex;
use proptest::prelude::*;

const D: [u8; 32] = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
const K: [u8; 32] = hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60");

fn signer(width: usize, seed: u8) -> (EccContext<Csprng>, Vec<u8>) {
    let mut ctx = EccContext::initialize(width, Csprng::from_seed([seed; 32])).unwrap();
    ctx.generate_keypair().unwrap();

    let mut public = vec![0u8; 1 + 2 * width];
    ctx.export_public_key(&mut public).unwrap();

    (ctx, public)
}

#[test]
fn test_known_answer_with_fixed_nonce() {
    // SHA-256("sample") with the key and nonce of RFC 6979, A.2.5
    let hash = digest(b"sample", 32);

    let mut ctx = EccContext::initialize(32, FixedRng::new(&K)).unwrap();
    ctx.import_private_key(&D).unwrap();

    let mut signature = [0u8; 64];
    assert_eq!(ctx.sign(&hash, &mut signature), Ok(64));

    assert_eq!(
        signature[..32],
        hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716")
    );
    assert_eq!(
        signature[32..],
        hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8")
    );

    let mut public = [0u8; 65];
    ctx.export_public_key(&mut public).unwrap();
    assert!(ctx.verify(&public, &hash, &signature));
}

#[test]
fn test_sign_verify_every_profile() {
    for profile in Profile::ALL {
        let width = profile.width();
        let (mut ctx, public) = signer(width, 0x44);
        let hash = digest(b"hello curves", width);

        let mut signature = vec![0u8; profile.signature_len()];
        assert_eq!(ctx.sign(&hash, &mut signature), Ok(2 * width));
        assert!(ctx.verify(&public, &hash, &signature), "{profile}");

        let other = digest(b"hello curveS", width);
        assert!(!ctx.verify(&public, &other, &signature), "{profile}");
    }
}

#[test]
fn test_verify_with_compressed_key() {
    let (mut ctx, _) = signer(48, 0x55);
    let hash = digest(b"compressed", 48);

    let mut compressed = [0u8; 49];
    ctx.export_compressed_public_key(&mut compressed).unwrap();

    let mut signature = [0u8; 96];
    ctx.sign(&hash, &mut signature).unwrap();

    assert!(ctx.verify(&compressed, &hash, &signature));

    compressed[0] ^= 1;
    assert!(!ctx.verify(&compressed, &hash, &signature));
}

#[test]
fn test_verify_does_not_need_keypair() {
    let (mut signer_ctx, public) = signer(24, 0x66);
    let hash = digest(b"detached", 24);
    let mut signature = [0u8; 48];
    signer_ctx.sign(&hash, &mut signature).unwrap();

    let verifier = EccContext::initialize(24, Csprng::from_seed([0; 32])).unwrap();
    assert!(verifier.verify(&public, &hash, &signature));
}

#[test]
fn test_zero_hash_and_tampered_s() {
    let (mut ctx, public) = signer(32, 0x77);
    let hash = [0u8; 32];

    let mut signature = [0u8; 64];
    ctx.sign(&hash, &mut signature).unwrap();
    assert!(ctx.verify(&public, &hash, &signature));

    signature[63] = signature[63].wrapping_add(1);
    assert!(!ctx.verify(&public, &hash, &signature));
}

#[test]
fn test_any_single_bit_flip_fails() {
    let (mut ctx, public) = signer(16, 0x88);
    let hash = digest(b"bit flips", 16);

    let mut signature = [0u8; 32];
    ctx.sign(&hash, &mut signature).unwrap();

    for bit in 0..signature.len() * 8 {
        let mut tampered = signature;
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert!(!ctx.verify(&public, &hash, &tampered), "bit {bit}");
    }

    for bit in 0..hash.len() * 8 {
        let mut tampered = hash.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        assert!(!ctx.verify(&public, &tampered, &signature), "hash bit {bit}");
    }
}

#[test]
fn test_signature_range_checks() {
    let (ctx, public) = signer(32, 0x99);
    let hash = digest(b"range", 32);
    let order = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    let mut zero_r = [0u8; 64];
    zero_r[63] = 1;
    assert!(!ctx.verify(&public, &hash, &zero_r));

    let mut zero_s = [0u8; 64];
    zero_s[31] = 1;
    assert!(!ctx.verify(&public, &hash, &zero_s));

    let mut r_is_n = [0u8; 64];
    r_is_n[..32].copy_from_slice(&order);
    r_is_n[63] = 1;
    assert!(!ctx.verify(&public, &hash, &r_is_n));

    let mut s_is_n = [0u8; 64];
    s_is_n[31] = 1;
    s_is_n[32..].copy_from_slice(&order);
    assert!(!ctx.verify(&public, &hash, &s_is_n));

    assert!(!ctx.verify(&public, &hash, &[0u8; 63]));
}

#[test]
fn test_wrong_hash_length() {
    let (mut ctx, public) = signer(32, 0x12);
    let mut signature = [0u8; 64];

    assert_eq!(ctx.sign(&[0u8; 31], &mut signature), Err(EccError::InvalidEncoding));

    ctx.sign(&[1u8; 32], &mut signature).unwrap();
    assert!(!ctx.verify(&public, &[1u8; 33], &signature));
}

#[test]
fn test_hash_above_order_is_reduced() {
    let (mut ctx, public) = signer(32, 0x13);
    let hash = [0xFFu8; 32];

    let mut signature = [0u8; 64];
    ctx.sign(&hash, &mut signature).unwrap();
    assert!(ctx.verify(&public, &hash, &signature));

    // 2^256 - 1 and 2^256 - 1 - n are the same scalar
    let reduced = hex!("00000000ffffffff00000000000000004319055258e8617b0c46353d039cdaae");
    assert!(ctx.verify(&public, &reduced, &signature));
}

#[test]
fn test_sign_errors() {
    let mut ctx = EccContext::initialize(32, Csprng::from_seed([1; 32])).unwrap();
    let mut signature = [0u8; 64];
    assert_eq!(ctx.sign(&[1u8; 32], &mut signature), Err(EccError::MissingKeypair));

    ctx.import_private_key(&D).unwrap();
    let mut short = [0u8; 63];
    assert_eq!(
        ctx.sign(&[1u8; 32], &mut short),
        Err(EccError::BufferTooSmall {
            needed: 64,
            actual: 63
        })
    );

    let mut failing = EccContext::initialize(32, FailingRng::new()).unwrap();
    failing.import_private_key(&D).unwrap();
    assert_eq!(failing.sign(&[1u8; 32], &mut signature), Err(EccError::EntropyExhausted));

    let mut zeros = EccContext::initialize(32, FixedRng::zeros()).unwrap();
    zeros.import_private_key(&D).unwrap();
    assert_eq!(zeros.sign(&[1u8; 32], &mut signature), Err(EccError::SigningFailed));
}

#[test]
fn test_generic_api_matches_context() {
    let private = Uint::<4>::from_be_slice(&D).unwrap();
    let keypair = Keypair::<4>::from_private::<Secp256r1>(private).unwrap();
    let hash = digest(b"generic", 32);

    let (r, s) = ecdsa::sign::<Secp256r1, _, 4>(&keypair, &hash, &mut FixedRng::new(&K), 16).unwrap();

    let mut signature = r.to_be_vec();
    signature.extend(s.to_be_vec());
    assert!(ecdsa::verify::<Secp256r1, 4>(keypair.public(), &hash, &signature));
    assert!(!ecdsa::verify::<Secp256r1, 4>(&Secp256r1::G, &hash, &signature));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_sign_verify(seed in any::<[u8; 32]>(), message in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut ctx = EccContext::initialize(32, Csprng::from_seed(seed)).unwrap();
        ctx.generate_keypair().unwrap();

        let mut public = [0u8; 65];
        ctx.export_public_key(&mut public).unwrap();

        let hash = digest(&message, 32);
        let mut signature = [0u8; 64];
        ctx.sign(&hash, &mut signature).unwrap();

        prop_assert!(ctx.verify(&public, &hash, &signature));
    }
}
