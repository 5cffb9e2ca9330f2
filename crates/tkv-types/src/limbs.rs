// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! 256-bit words and the 16/32-byte split of 384-bit base-field elements.
//!
//! All byte encodings are big-endian. A base-field element (48 bytes) is
//! carried as `hi` (top 16 bytes) and `lo` (bottom 32 bytes); in 256-bit
//! storage the `hi` part is left-padded with 16 zero bytes.

use ark_bls12_381::{Fq, Fr};
use ark_ff::{BigInt, BigInteger, PrimeField};

/// Big-endian 256-bit word.
pub type Word = [u8; 32];

pub const ZERO_WORD: Word = [0u8; 32];

fn be_bytes_to_limbs<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut limbs = [0u64; N];
    // BE bytes -> LE limbs
    for (i, chunk) in bytes.rchunks(8).enumerate().take(N) {
        let mut buf = [0u8; 8];
        buf[8 - chunk.len()..].copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(buf);
    }
    limbs
}

pub fn word_to_bigint(word: &Word) -> BigInt<4> {
    BigInt::new(be_bytes_to_limbs::<4>(word))
}

pub fn bigint_to_word(value: &BigInt<4>) -> Word {
    let mut word = ZERO_WORD;
    word.copy_from_slice(&value.to_bytes_be());
    word
}

pub fn word_from_u64(value: u64) -> Word {
    let mut word = ZERO_WORD;
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// True iff `0 <= word < R_MOD`.
pub fn reduce_check(word: &Word) -> bool {
    word_to_bigint(word) < Fr::MODULUS
}

/// Parse a scalar, rejecting anything outside `[0, R_MOD)`.
pub fn fr_from_word(word: &Word) -> Option<Fr> {
    Fr::from_bigint(word_to_bigint(word))
}

pub fn fr_to_word(value: &Fr) -> Word {
    bigint_to_word(&value.into_bigint())
}

/// Scalar-field modulus `R_MOD` as a word.
pub fn r_mod_word() -> Word {
    bigint_to_word(&Fr::MODULUS)
}

/// A 384-bit base-field element split into a 16-byte high part and a
/// 32-byte low part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqLimbs {
    pub hi: u128,
    pub lo: Word,
}

impl FqLimbs {
    pub const ZERO: FqLimbs = FqLimbs { hi: 0, lo: ZERO_WORD };

    pub const fn new(hi: u128, lo: Word) -> Self {
        Self { hi, lo }
    }

    /// `Q_MOD` in limb form.
    pub fn modulus() -> Self {
        Self::from_bigint(&Fq::MODULUS)
    }

    pub fn from_be_bytes(bytes: &[u8; 48]) -> Self {
        let mut hi = [0u8; 16];
        hi.copy_from_slice(&bytes[..16]);
        let mut lo = ZERO_WORD;
        lo.copy_from_slice(&bytes[16..]);
        Self { hi: u128::from_be_bytes(hi), lo }
    }

    pub fn to_be_bytes(&self) -> [u8; 48] {
        let mut out = [0u8; 48];
        out[..16].copy_from_slice(&self.hi.to_be_bytes());
        out[16..].copy_from_slice(&self.lo);
        out
    }

    /// High part left-padded to a full word (storage form).
    pub fn hi_word(&self) -> Word {
        let mut word = ZERO_WORD;
        word[16..].copy_from_slice(&self.hi.to_be_bytes());
        word
    }

    /// Rebuild from a padded high word and a low word. `None` when the
    /// padding bytes of `hi` are not zero.
    pub fn from_words(hi: &Word, lo: &Word) -> Option<Self> {
        if hi[..16].iter().any(|b| *b != 0) {
            return None;
        }
        let mut top = [0u8; 16];
        top.copy_from_slice(&hi[16..]);
        Some(Self { hi: u128::from_be_bytes(top), lo: *lo })
    }

    fn from_bigint(value: &BigInt<6>) -> Self {
        let mut bytes = [0u8; 48];
        bytes.copy_from_slice(&value.to_bytes_be());
        Self::from_be_bytes(&bytes)
    }

    pub fn to_bigint(&self) -> BigInt<6> {
        BigInt::new(be_bytes_to_limbs::<6>(&self.to_be_bytes()))
    }

    pub fn from_fq(value: &Fq) -> Self {
        Self::from_bigint(&value.into_bigint())
    }

    /// `None` unless the value is canonical, i.e. `< Q_MOD`.
    pub fn to_fq(&self) -> Option<Fq> {
        Fq::from_bigint(self.to_bigint())
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == ZERO_WORD
    }
}
