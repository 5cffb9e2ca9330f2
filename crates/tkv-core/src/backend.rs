// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve operations behind a precompile-style seam.
//!
//! The verifiers only prepare operands and interpret results; the actual
//! group law and pairing live in a [`CurveBackend`]. [`Bls12381`] is the
//! arkworks implementation. Every operand it receives is decoded from wire
//! form and checked (canonical coordinates, on curve, in the prime-order
//! subgroup); anything else is a [`VerifierError::BackendCallFailure`].

use ark_bls12_381::{Bls12_381, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;
use tkv_types::{FqLimbs, G1Point, G2Point};

use crate::error::{VerifierError, VerifyResult};
use crate::field::base_field_negate;

pub trait CurveBackend {
    fn g1_add(&self, p: &G1Point, q: &G1Point) -> VerifyResult<G1Point>;

    fn g1_scalar_mul(&self, p: &G1Point, s: &Fr) -> VerifyResult<G1Point>;

    /// True iff the product of pairings is the identity of the target group.
    fn pairing_check(&self, pairs: &[(G1Point, G2Point)]) -> VerifyResult<bool>;

    /// `acc += s·p`
    fn g1_mul_and_accumulate(&self, acc: &mut G1Point, p: &G1Point, s: &Fr) -> VerifyResult<()> {
        let term = self.g1_scalar_mul(p, s)?;
        *acc = self.g1_add(acc, &term)?;
        Ok(())
    }

    /// `p - q`, computed as `p + (-q)`.
    fn g1_sub(&self, p: &G1Point, q: &G1Point) -> VerifyResult<G1Point> {
        self.g1_add(p, &g1_negate(q))
    }

    /// `Σ s_i·p_i`, starting from the identity.
    fn g1_msm(&self, terms: &[(G1Point, Fr)]) -> VerifyResult<G1Point> {
        let mut acc = G1Point::IDENTITY;
        for (point, scalar) in terms {
            self.g1_mul_and_accumulate(&mut acc, point, scalar)?;
        }
        Ok(acc)
    }
}

/// Negate a G1 point by replacing `y` with `Q_MOD - y`.
pub fn g1_negate(p: &G1Point) -> G1Point {
    if p.is_identity() {
        return *p;
    }
    G1Point::new(p.x, base_field_negate(&p.y))
}

/// arkworks BLS12-381 backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bls12381;

fn backend_err(msg: &str) -> VerifierError {
    VerifierError::BackendCallFailure(msg.to_string())
}

fn coordinate(limbs: &FqLimbs) -> VerifyResult<Fq> {
    limbs
        .to_fq()
        .ok_or_else(|| backend_err("coordinate not reduced mod Q"))
}

impl Bls12381 {
    pub fn g1_affine(p: &G1Point) -> VerifyResult<G1Affine> {
        if p.is_identity() {
            return Ok(G1Affine::identity());
        }
        let point = G1Affine::new_unchecked(coordinate(&p.x)?, coordinate(&p.y)?);
        if !point.is_on_curve() {
            return Err(backend_err("G1 point not on curve"));
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(backend_err("G1 point not in subgroup"));
        }
        Ok(point)
    }

    pub fn g2_affine(p: &G2Point) -> VerifyResult<G2Affine> {
        if p.is_identity() {
            return Ok(G2Affine::identity());
        }
        let x = Fq2::new(coordinate(&p.x0)?, coordinate(&p.x1)?);
        let y = Fq2::new(coordinate(&p.y0)?, coordinate(&p.y1)?);
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(backend_err("G2 point not on curve"));
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(backend_err("G2 point not in subgroup"));
        }
        Ok(point)
    }

    pub fn g1_point(p: &G1Affine) -> G1Point {
        G1Point::from(p)
    }

    pub fn g2_point(p: &G2Affine) -> G2Point {
        G2Point::from(p)
    }
}

impl CurveBackend for Bls12381 {
    fn g1_add(&self, p: &G1Point, q: &G1Point) -> VerifyResult<G1Point> {
        let sum = Self::g1_affine(p)?.into_group() + Self::g1_affine(q)?.into_group();
        Ok(Self::g1_point(&sum.into_affine()))
    }

    fn g1_scalar_mul(&self, p: &G1Point, s: &Fr) -> VerifyResult<G1Point> {
        let product = Self::g1_affine(p)?.into_group() * *s;
        Ok(Self::g1_point(&product.into_affine()))
    }

    fn pairing_check(&self, pairs: &[(G1Point, G2Point)]) -> VerifyResult<bool> {
        let mut g1 = Vec::with_capacity(pairs.len());
        let mut g2 = Vec::with_capacity(pairs.len());
        for (p, q) in pairs {
            g1.push(Self::g1_affine(p)?);
            g2.push(Self::g2_affine(q)?);
        }
        let output = Bls12_381::multi_pairing(g1, g2);
        Ok(output.0.is_one())
    }
}
