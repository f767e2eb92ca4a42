use curvekit::EccError;
use curvekit::primitives::{Uint, Wide};
use hex_literal::hex;
use proptest::prelude::*;

type U128 = Uint<2>;
type U256 = Uint<4>;

const MAX2: U128 = Uint::from_limbs([u64::MAX; 2]);

#[test]
fn test_be_bytes_layout() {
    let bytes = hex!("0102030405060708 090A0B0C0D0E0F10");
    let value = U128::from_be_slice(&bytes).unwrap();

    assert_eq!(
        value.as_limbs(),
        &[0x090A0B0C0D0E0F10, 0x0102030405060708]
    );
    assert_eq!(value.to_be_vec(), bytes.to_vec());
}

#[test]
fn test_be_slice_wrong_length() {
    assert!(U128::from_be_slice(&[0u8; 15]).is_none());
    assert!(U128::from_be_slice(&[0u8; 17]).is_none());
    assert!(U256::from_be_slice(&[]).is_none());
}

#[test]
fn test_write_be_buffer_sizes() {
    let value = U128::from_be_slice(&hex!("0102030405060708 090A0B0C0D0E0F10")).unwrap();

    let mut short = [0u8; 15];
    assert_eq!(
        value.write_be(&mut short),
        Err(EccError::BufferTooSmall {
            needed: 16,
            actual: 15
        })
    );
    assert_eq!(short, [0u8; 15]);

    let mut long = [0xAAu8; 20];
    assert_eq!(value.write_be(&mut long), Ok(16));
    assert_eq!(long[..16], hex!("0102030405060708 090A0B0C0D0E0F10"));
    assert_eq!(long[16..], [0xAA; 4]);
}

#[test]
fn test_add_carry_out() {
    let (sum, carry) = MAX2.add_with_carry(&U128::ONE);

    assert!(sum.is_zero());
    assert_eq!(carry, 1);
}

#[test]
fn test_sub_borrow_out() {
    let (diff, borrow) = U128::ZERO.sub_with_borrow(&U128::ONE);

    assert_eq!(diff, MAX2);
    assert_eq!(borrow, 1);
}

#[test]
fn test_shl_small_returns_shifted_out_bits() {
    let value = U128::from_limbs([0x8000_0000_0000_0001, 0xF000_0000_0000_0000]);
    let (shifted, carry) = value.shl_small(4);

    assert_eq!(shifted.as_limbs(), &[0x0000_0000_0000_0010, 0x0000_0000_0000_0008]);
    assert_eq!(carry, 0xF);
}

#[test]
fn test_shr1_crosses_limbs() {
    let mut value = U128::from_limbs([0, 1]);
    value.shr1();

    assert_eq!(value.as_limbs(), &[0x8000_0000_0000_0000, 0]);
}

#[test]
fn test_bits_and_bit() {
    assert_eq!(U256::ZERO.bits(), 0);
    assert_eq!(U256::ONE.bits(), 1);

    let value = U256::from_limbs([0, 0, 0x10, 0]);
    assert_eq!(value.bits(), 128 + 5);
    assert!(value.bit(132));
    assert!(!value.bit(131));
    assert!(!value.bit(10_000));
}

#[test]
fn test_ordering_is_numeric() {
    let small = U256::from_limbs([u64::MAX, 0, 0, 0]);
    let large = U256::from_limbs([0, 0, 0, 1]);

    assert!(small < large);
    assert_eq!(large.cmp(&large), std::cmp::Ordering::Equal);
}

#[test]
fn test_mul_wide_max_operands() {
    // (2^128 - 1)^2 = 2^256 - 2^129 + 1
    let product = MAX2.mul_wide(&MAX2);

    assert_eq!(product.lo().as_limbs(), &[1, 0]);
    assert_eq!(product.hi().as_limbs(), &[0xFFFF_FFFF_FFFF_FFFE, u64::MAX]);
}

#[test]
fn test_square_wide_max_operand() {
    let max = U256::from_limbs([u64::MAX; 4]);

    assert_eq!(max.square_wide(), max.mul_wide(&max));
}

#[test]
fn test_wide_reduce_small_modulus() {
    // (2^128 - 1)^2 mod 1_000_003
    let modulus = U128::from_u64(1_000_003);
    let product = MAX2.mul_wide(&MAX2);

    assert_eq!(product.reduce(&modulus), U128::from_u64(150_598));
}

#[test]
fn test_wide_reduce_below_modulus_is_identity() {
    let modulus = U128::from_limbs([5, 1]);
    let value = Wide::new(U128::from_limbs([4, 1]), U128::ZERO);

    assert_eq!(value.reduce(&modulus), U128::from_limbs([4, 1]));
}

#[test]
fn test_display_colon_hex() {
    let value = U128::from_u64(0x1FA4);

    assert_eq!(
        value.to_string(),
        "00:00:00:00:00:00:00:00:00:00:00:00:00:00:1F:A4"
    );
}

fn uint4() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(Uint::from_limbs)
}

proptest! {
    #[test]
    fn prop_square_matches_mul(a in uint4()) {
        prop_assert_eq!(a.square_wide(), a.mul_wide(&a));
    }

    #[test]
    fn prop_mul_commutes(a in uint4(), b in uint4()) {
        prop_assert_eq!(a.mul_wide(&b), b.mul_wide(&a));
    }

    #[test]
    fn prop_add_then_sub(a in uint4(), b in uint4()) {
        let (sum, carry) = a.add_with_carry(&b);
        let (back, borrow) = sum.sub_with_borrow(&b);

        prop_assert_eq!(back, a);
        prop_assert_eq!(carry, borrow);
    }

    #[test]
    fn prop_be_round_trip(a in uint4()) {
        prop_assert_eq!(U256::from_be_slice(&a.to_be_vec()), Some(a));
    }

    #[test]
    fn prop_reduce_by_one_operand(a in uint4(), b in uint4()) {
        // (a·b) mod b = 0 for non-zero b
        prop_assume!(!b.is_zero());
        prop_assert!(a.mul_wide(&b).reduce(&b).is_zero());
    }
}
