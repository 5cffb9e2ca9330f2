// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Affine curve points in wire form.
//!
//! The all-zero encoding is the point at infinity, as in the EIP-2537
//! precompile layout. No curve membership is implied by these types; the
//! pairing backend is the one that rejects invalid points.

use ark_bls12_381::{G1Affine, G2Affine};

use crate::limbs::{FqLimbs, Word};

/// G1 point with base-field coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Point {
    pub x: FqLimbs,
    pub y: FqLimbs,
}

impl G1Point {
    pub const IDENTITY: G1Point = G1Point { x: FqLimbs::ZERO, y: FqLimbs::ZERO };

    pub const fn new(x: FqLimbs, y: FqLimbs) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// `[x_hi, x_lo, y_hi, y_lo]`
    pub fn to_words(&self) -> [Word; 4] {
        [self.x.hi_word(), self.x.lo, self.y.hi_word(), self.y.lo]
    }

    pub fn from_words(words: &[Word; 4]) -> Option<Self> {
        Some(Self {
            x: FqLimbs::from_words(&words[0], &words[1])?,
            y: FqLimbs::from_words(&words[2], &words[3])?,
        })
    }
}

impl From<&G1Affine> for G1Point {
    fn from(p: &G1Affine) -> Self {
        if p.infinity {
            return Self::IDENTITY;
        }
        Self::new(FqLimbs::from_fq(&p.x), FqLimbs::from_fq(&p.y))
    }
}

/// G2 point over the quadratic extension: `x = x0 + x1·u`, `y = y0 + y1·u`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Point {
    pub x0: FqLimbs,
    pub x1: FqLimbs,
    pub y0: FqLimbs,
    pub y1: FqLimbs,
}

impl G2Point {
    pub const IDENTITY: G2Point = G2Point {
        x0: FqLimbs::ZERO,
        x1: FqLimbs::ZERO,
        y0: FqLimbs::ZERO,
        y1: FqLimbs::ZERO,
    };

    pub fn is_identity(&self) -> bool {
        self.x0.is_zero() && self.x1.is_zero() && self.y0.is_zero() && self.y1.is_zero()
    }

    /// `[x0_hi, x0_lo, x1_hi, x1_lo, y0_hi, y0_lo, y1_hi, y1_lo]`
    pub fn to_words(&self) -> [Word; 8] {
        [
            self.x0.hi_word(),
            self.x0.lo,
            self.x1.hi_word(),
            self.x1.lo,
            self.y0.hi_word(),
            self.y0.lo,
            self.y1.hi_word(),
            self.y1.lo,
        ]
    }

    pub fn from_words(words: &[Word; 8]) -> Option<Self> {
        Some(Self {
            x0: FqLimbs::from_words(&words[0], &words[1])?,
            x1: FqLimbs::from_words(&words[2], &words[3])?,
            y0: FqLimbs::from_words(&words[4], &words[5])?,
            y1: FqLimbs::from_words(&words[6], &words[7])?,
        })
    }
}

impl From<&G2Affine> for G2Point {
    fn from(p: &G2Affine) -> Self {
        if p.infinity {
            return Self::IDENTITY;
        }
        Self {
            x0: FqLimbs::from_fq(&p.x.c0),
            x1: FqLimbs::from_fq(&p.x.c1),
            y0: FqLimbs::from_fq(&p.y.c0),
            y1: FqLimbs::from_fq(&p.y.c1),
        }
    }
}
