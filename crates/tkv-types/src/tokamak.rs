// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Tokamak zk-SNARK proof, preprocessed commitments and verification key.

use ark_bls12_381::Fr;
use ark_ff::{FftField, Field, One};

use crate::point::{G1Point, G2Point};

pub const PROOF_POINT_COUNT: usize = 19;
pub const PROOF_SCALAR_COUNT: usize = 4;
/// High parts of every proof coordinate.
pub const PROOF_PART1_LEN: usize = PROOF_POINT_COUNT * 2;
/// Low parts of every proof coordinate followed by the four evaluations.
pub const PROOF_PART2_LEN: usize = PROOF_POINT_COUNT * 2 + PROOF_SCALAR_COUNT;
pub const PREPROCESSED_PART1_LEN: usize = 4;
pub const PREPROCESSED_PART2_LEN: usize = 4;

/// Accepted values of the `smax` tree-size parameter.
pub const SMAX_VALUES: [u64; 6] = [64, 128, 256, 512, 1024, 2048];

/// Decoded Tokamak proof.
///
/// Field order is the wire order of the serialized proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokamakProof {
    pub u: G1Point,
    pub v: G1Point,
    pub w: G1Point,
    pub o_mid: G1Point,
    pub o_prv: G1Point,
    pub q_ax: G1Point,
    pub q_ay: G1Point,
    pub q_cx: G1Point,
    pub q_cy: G1Point,
    pub pi_chi: G1Point,
    pub pi_zeta: G1Point,
    pub b: G1Point,
    pub r: G1Point,
    pub m_zeta: G1Point,
    pub m_chi: G1Point,
    pub n_zeta: G1Point,
    pub n_chi: G1Point,
    pub o_pub: G1Point,
    pub a: G1Point,
    /// R(χ, ζ)
    pub r1xy: Fr,
    /// R(ωχ, ζ)
    pub r2xy: Fr,
    /// R(ωχ, ω_smax·ζ)
    pub r3xy: Fr,
    /// V(χ, ζ)
    pub vxy: Fr,
}

impl TokamakProof {
    /// Commitments in wire order.
    pub fn points(&self) -> [G1Point; PROOF_POINT_COUNT] {
        [
            self.u,
            self.v,
            self.w,
            self.o_mid,
            self.o_prv,
            self.q_ax,
            self.q_ay,
            self.q_cx,
            self.q_cy,
            self.pi_chi,
            self.pi_zeta,
            self.b,
            self.r,
            self.m_zeta,
            self.m_chi,
            self.n_zeta,
            self.n_chi,
            self.o_pub,
            self.a,
        ]
    }

    /// Evaluations in wire order.
    pub fn scalars(&self) -> [Fr; PROOF_SCALAR_COUNT] {
        [self.r1xy, self.r2xy, self.r3xy, self.vxy]
    }

    pub fn from_parts(points: [G1Point; PROOF_POINT_COUNT], scalars: [Fr; PROOF_SCALAR_COUNT]) -> Self {
        let [u, v, w, o_mid, o_prv, q_ax, q_ay, q_cx, q_cy, pi_chi, pi_zeta, b, r, m_zeta, m_chi, n_zeta, n_chi, o_pub, a] =
            points;
        let [r1xy, r2xy, r3xy, vxy] = scalars;
        Self {
            u,
            v,
            w,
            o_mid,
            o_prv,
            q_ax,
            q_ay,
            q_cx,
            q_cy,
            pi_chi,
            pi_zeta,
            b,
            r,
            m_zeta,
            m_chi,
            n_zeta,
            n_chi,
            o_pub,
            a,
            r1xy,
            r2xy,
            r3xy,
            vxy,
        }
    }
}

/// Circuit-specific permutation commitments `[s^(0)]_1`, `[s^(1)]_1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preprocessed {
    pub s0: G1Point,
    pub s1: G1Point,
}

/// Evaluation-domain sizes of a Tokamak circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokamakParams {
    /// Constraint domain size.
    pub n: u64,
    /// Interface-wire domain size.
    pub m_i: u64,
    /// Public-input domain size; `A_pub` interpolates over its roots.
    pub l_pub: usize,
    pub omega_m_i: Fr,
    pub omega_l_pub: Fr,
}

impl TokamakParams {
    /// Derive the roots of unity from the two-adic root of `Fr`.
    /// `None` unless every size is a power of two within the field's two-adicity.
    pub fn new(n: u64, m_i: u64, l_pub: usize) -> Option<Self> {
        let omega_m_i = root_of_unity(m_i)?;
        let omega_l_pub = root_of_unity(l_pub as u64)?;
        if !n.is_power_of_two() {
            return None;
        }
        Some(Self { n, m_i, l_pub, omega_m_i, omega_l_pub })
    }

    /// Use roots supplied by a trusted setup whose NTT generator differs
    /// from arkworks'.
    /// No order check is done here; see [`TokamakParams::has_primitive_roots`].
    pub fn with_roots(n: u64, m_i: u64, l_pub: usize, omega_m_i: Fr, omega_l_pub: Fr) -> Self {
        Self { n, m_i, l_pub, omega_m_i, omega_l_pub }
    }

    /// Both roots have exactly the order of their domain.
    pub fn has_primitive_roots(&self) -> bool {
        is_primitive_root(self.omega_m_i, self.m_i)
            && is_primitive_root(self.omega_l_pub, self.l_pub as u64)
    }
}

/// `omega^size == 1` and `omega^(size/2) != 1`, for a power-of-two `size`.
pub fn is_primitive_root(omega: Fr, size: u64) -> bool {
    if !size.is_power_of_two() || !omega.pow([size]).is_one() {
        return false;
    }
    size == 1 || !omega.pow([size / 2]).is_one()
}

/// Primitive `size`-th root of unity.
pub fn root_of_unity(size: u64) -> Option<Fr> {
    if !size.is_power_of_two() {
        return None;
    }
    Fr::get_root_of_unity(size)
}

/// Tokamak verification key (σ_verify).
///
/// The G2 points that enter the pairing with a minus sign are stored
/// already negated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokamakVerifyingKey {
    pub params: TokamakParams,
    /// `[1]_1`
    pub one_g1: G1Point,
    /// `[x]_1`
    pub x_g1: G1Point,
    /// `[y]_1`
    pub y_g1: G1Point,
    /// `[K_0(x)·L_{-1}(y)]_1`
    pub lagrange_kl: G1Point,
    /// `[1]_2`
    pub one_g2: G2Point,
    pub alpha_g2: G2Point,
    pub alpha2_g2: G2Point,
    pub alpha3_g2: G2Point,
    pub alpha4_g2: G2Point,
    pub neg_gamma_g2: G2Point,
    pub neg_eta_g2: G2Point,
    pub neg_delta_g2: G2Point,
    pub neg_x_g2: G2Point,
    pub neg_y_g2: G2Point,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limbs::FqLimbs;
    use ark_ff::{Field, One};

    #[test]
    fn wire_lengths() {
        assert_eq!(PROOF_PART1_LEN, 38);
        assert_eq!(PROOF_PART2_LEN, 42);
    }

    #[test]
    fn roots_have_exact_order() {
        for size in [64u64, 1024, 2048] {
            let omega = root_of_unity(size).unwrap();
            assert!(omega.pow([size]).is_one());
            assert!(!omega.pow([size / 2]).is_one());
        }
        assert!(root_of_unity(48).is_none());
    }

    #[test]
    fn primitive_root_order() {
        let omega = root_of_unity(64).unwrap();
        assert!(is_primitive_root(omega, 64));
        // ω² has order 32
        assert!(!is_primitive_root(omega.square(), 64));
        assert!(!is_primitive_root(Fr::from(0u64), 64));
        assert!(!is_primitive_root(Fr::one(), 64));
        assert!(!is_primitive_root(omega, 48));

        assert!(TokamakParams::new(1024, 512, 64).unwrap().has_primitive_roots());
        let params = TokamakParams::with_roots(1024, 512, 64, Fr::from(0u64), Fr::one());
        assert!(!params.has_primitive_roots());
    }

    #[test]
    fn params_reject_non_power_of_two() {
        assert!(TokamakParams::new(4096, 1024, 64).is_some());
        assert!(TokamakParams::new(4095, 1024, 64).is_none());
        assert!(TokamakParams::new(4096, 1000, 64).is_none());
        assert!(TokamakParams::new(4096, 1024, 60).is_none());
    }

    #[test]
    fn points_follow_wire_order() {
        let mut points = [G1Point::IDENTITY; PROOF_POINT_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            p.x = FqLimbs::new(i as u128, [0u8; 32]);
        }
        let scalars = [Fr::from(1u64), Fr::from(2u64), Fr::from(3u64), Fr::from(4u64)];
        let proof = TokamakProof::from_parts(points, scalars);
        assert_eq!(proof.u.x.hi, 0);
        assert_eq!(proof.o_mid.x.hi, 3);
        assert_eq!(proof.b.x.hi, 11);
        assert_eq!(proof.a.x.hi, 18);
        assert_eq!(proof.vxy, Fr::from(4u64));
        assert_eq!(proof.points(), points);
        assert_eq!(proof.scalars(), scalars);
    }
}
