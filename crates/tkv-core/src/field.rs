// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Scalar-field and base-field helpers.

use ark_bls12_381::Fr;
use ark_ff::{BigInt, BigInteger, Field, PrimeField};
use tkv_types::limbs::word_to_bigint;
use tkv_types::FqLimbs;

pub use tkv_types::reduce_check;

/// `base^exponent mod R_MOD`. `exponent = 0` yields one.
pub fn modexp(base: Fr, exponent: &BigInt<4>) -> Fr {
    base.pow(exponent)
}

pub fn pow_u64(base: Fr, exponent: u64) -> Fr {
    base.pow([exponent])
}

/// Modular inverse by Fermat's little theorem, `a^(R_MOD - 2)`.
/// Zero maps to zero; callers that divide must rule it out first.
pub fn inverse(value: Fr) -> Fr {
    let mut exponent = Fr::MODULUS;
    exponent.sub_with_borrow(&BigInt::from(2u64));
    modexp(value, &exponent)
}

/// `Q_MOD - y` on the two-limb representation.
///
/// The low limbs are subtracted as 256-bit words; an underflow borrows one
/// from the high limb.
pub fn base_field_negate(y: &FqLimbs) -> FqLimbs {
    let q = FqLimbs::modulus();
    let mut lo = word_to_bigint(&q.lo);
    let borrow = lo.sub_with_borrow(&word_to_bigint(&y.lo));
    let hi = q.hi.wrapping_sub(y.hi).wrapping_sub(borrow as u128);
    let mut lo_word = [0u8; 32];
    lo_word.copy_from_slice(&lo.to_bytes_be());
    FqLimbs::new(hi, lo_word)
}
