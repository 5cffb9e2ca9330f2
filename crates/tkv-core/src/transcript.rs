// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fiat-Shamir transcript: two 256-bit Keccak lanes.
//!
//! `absorb` hashes a 100-byte window
//! `[0,0,0,tag | state_0 | state_1 | value]` once with tag 0 and once with
//! tag 1, and the two digests become the new lanes. `squeeze` hashes the
//! 72-byte window `[0,0,0,2 | state_0 | state_1 | index_be32]` and clears
//! the top three bits of the digest. Squeezing never mutates the lanes, so
//! every challenge is a pure function of what was absorbed and its index.

use ark_bls12_381::Fr;
use ark_ff::PrimeField;
use sha3::{Digest, Keccak256};
use tkv_types::{fr_to_word, FqLimbs, G1Point, Word, ZERO_WORD};

const DST_0_TAG: u8 = 0;
const DST_1_TAG: u8 = 1;
const CHALLENGE_DST_TAG: u8 = 2;

const ABSORB_WINDOW: usize = 100;
const SQUEEZE_WINDOW: usize = 72;

/// Top byte of `FR_MASK = 2^253 - 1`; the remaining bytes are `0xff`.
pub const FR_MASK_TOP_BYTE: u8 = 0x1f;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptState {
    Idle,
    Absorbing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    state_0: Word,
    state_1: Word,
    absorbed: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn keccak(data: &[u8]) -> Word {
    let digest = Keccak256::digest(data);
    let mut out = ZERO_WORD;
    out.copy_from_slice(&digest);
    out
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            state_0: ZERO_WORD,
            state_1: ZERO_WORD,
            absorbed: 0,
        }
    }

    pub fn state(&self) -> TranscriptState {
        if self.absorbed == 0 {
            TranscriptState::Idle
        } else {
            TranscriptState::Absorbing
        }
    }

    /// Number of words absorbed so far.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    pub fn absorb(&mut self, value: &Word) {
        let mut window = [0u8; ABSORB_WINDOW];
        window[4..36].copy_from_slice(&self.state_0);
        window[36..68].copy_from_slice(&self.state_1);
        window[68..].copy_from_slice(value);

        window[3] = DST_0_TAG;
        let next_0 = keccak(&window);
        window[3] = DST_1_TAG;
        let next_1 = keccak(&window);

        self.state_0 = next_0;
        self.state_1 = next_1;
        self.absorbed += 1;
    }

    /// Base-field element: padded high part, then low part.
    pub fn absorb_fq(&mut self, value: &FqLimbs) {
        self.absorb(&value.hi_word());
        self.absorb(&value.lo);
    }

    pub fn absorb_g1(&mut self, point: &G1Point) {
        self.absorb_fq(&point.x);
        self.absorb_fq(&point.y);
    }

    pub fn absorb_scalar(&mut self, value: &Fr) {
        self.absorb(&fr_to_word(value));
    }

    /// Raw challenge digest for `index`, before masking.
    pub fn squeeze_word(&self, index: u32) -> Word {
        let mut window = [0u8; SQUEEZE_WINDOW];
        window[3] = CHALLENGE_DST_TAG;
        window[4..36].copy_from_slice(&self.state_0);
        window[36..68].copy_from_slice(&self.state_1);
        window[68..].copy_from_slice(&index.to_be_bytes());
        keccak(&window)
    }

    /// Challenge number `index` as a scalar.
    ///
    /// The masked digest is below `2^253 < R_MOD`, so it is already
    /// canonical; the reduction below never changes it.
    pub fn squeeze(&self, index: u32) -> Fr {
        let mut word = self.squeeze_word(index);
        word[0] &= FR_MASK_TOP_BYTE;
        Fr::from_be_bytes_mod_order(&word)
    }
}
