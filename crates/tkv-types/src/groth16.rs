// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Type definitions for Groth16 verification over BLS12-381

use crate::point::{G1Point, G2Point};

/// Groth16 verification key.
///
/// `ic` is the input-commitment table: `ic[0]` is the constant term and
/// `ic[1..]` match the public signals. It is generic so that large tables
/// can live behind a paged lookup instead of an inline vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groth16VerifyingKey<I = Vec<G1Point>> {
    pub alpha_g1: G1Point,
    pub beta_g2: G2Point,
    pub gamma_g2: G2Point,
    pub delta_g2: G2Point,
    pub ic: I,
}

/// Groth16 proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Groth16Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}
