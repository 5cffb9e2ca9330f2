// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex conversion for calldata words, limbs and field elements.
//!
//! # Hex format
//!
//! Output is `0x`-prefixed big-endian hex. Input accepts both `0x`-prefixed
//! and raw hex and zero-pads short values on the left.

use ark_bls12_381::Fr;
use tkv_types::{fr_from_word, fr_to_word, FqLimbs, Word};

use crate::error::{SdkError, SdkResult};

fn decode_padded<const N: usize>(s: &str, context: &str) -> SdkResult<[u8; N]> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    let s = if s.len() % 2 == 1 { format!("0{s}") } else { s.to_string() };
    let bytes = hex::decode(&s).map_err(|e| SdkError::Hex {
        context: context.to_string(),
        reason: e.to_string(),
    })?;
    if bytes.len() > N {
        return Err(SdkError::Hex {
            context: context.to_string(),
            reason: format!("{} bytes exceeds {N}", bytes.len()),
        });
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

pub fn word_to_hex(word: &Word) -> String {
    format!("0x{}", hex::encode(word))
}

pub fn hex_to_word(s: &str) -> SdkResult<Word> {
    decode_padded::<32>(s, "word")
}

pub fn fr_to_hex(fr: &Fr) -> String {
    word_to_hex(&fr_to_word(fr))
}

pub fn hex_to_fr(s: &str) -> SdkResult<Fr> {
    let word = hex_to_word(s)?;
    fr_from_word(&word).ok_or_else(|| SdkError::NotInField { context: s.to_string() })
}

/// A part1 limb, 16 bytes.
pub fn u128_to_hex(value: u128) -> String {
    format!("0x{value:032x}")
}

pub fn hex_to_u128(s: &str) -> SdkResult<u128> {
    decode_padded::<16>(s, "part1 limb").map(u128::from_be_bytes)
}

/// Base-field element as 48 bytes of hex.
pub fn fq_to_hex(value: &FqLimbs) -> String {
    format!("0x{}", hex::encode(value.to_be_bytes()))
}

pub fn hex_to_fq(s: &str) -> SdkResult<FqLimbs> {
    decode_padded::<48>(s, "base field element").map(|b| FqLimbs::from_be_bytes(&b))
}

pub fn words_to_hex(words: &[Word]) -> Vec<String> {
    words.iter().map(word_to_hex).collect()
}

pub fn hex_to_words(values: &[String]) -> SdkResult<Vec<Word>> {
    values.iter().map(|s| hex_to_word(s)).collect()
}
