// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Commitment aggregation for the Tokamak verifier.
//!
//! Folds the proof and key commitments into the handful of G1 points that
//! enter the final pairing. Coefficients come from the transcript
//! challenges and a few derived evaluations; the formulas are fixed by the
//! protocol and reproduced term for term.

use ark_bls12_381::Fr;
use ark_ff::{One, Zero};
use tkv_types::tokamak::root_of_unity;
use tkv_types::{G1Point, Preprocessed, TokamakParams, TokamakProof, TokamakVerifyingKey};
use tracing::debug;

use crate::backend::CurveBackend;
use crate::error::{VerifierError, VerifyResult};
use crate::field::{inverse, pow_u64};

/// Fiat-Shamir challenges in derivation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenges {
    pub theta0: Fr,
    pub theta1: Fr,
    pub theta2: Fr,
    pub kappa0: Fr,
    pub chi: Fr,
    pub zeta: Fr,
    pub kappa1: Fr,
    pub kappa2: Fr,
}

/// Scalars derived from the challenges before any curve work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluations {
    /// `χ^n - 1`
    pub t_n: Fr,
    /// `χ^mI - 1`
    pub t_mi: Fr,
    /// `ζ^smax - 1`
    pub t_smax: Fr,
    /// `K_0(χ)`
    pub k0: Fr,
    pub a_pub: Fr,
    pub omega_m_i_inv: Fr,
    pub omega_smax_inv: Fr,
}

impl Evaluations {
    pub fn compute(
        params: &TokamakParams,
        challenges: &Challenges,
        public_inputs: &[Fr],
        smax: u64,
    ) -> VerifyResult<Self> {
        let omega_smax_inv = omega_smax_inverse(smax)?;
        let chi = challenges.chi;
        let evals = Self {
            t_n: vanishing(chi, params.n),
            t_mi: vanishing(chi, params.m_i),
            t_smax: vanishing(challenges.zeta, smax),
            k0: lagrange_k0(chi, params.m_i)?,
            a_pub: compute_a_pub(chi, public_inputs, params.l_pub, params.omega_l_pub)?,
            omega_m_i_inv: inverse(params.omega_m_i),
            omega_smax_inv,
        };
        debug!(t_n = %evals.t_n, t_smax = %evals.t_smax, k0 = %evals.k0, a_pub = %evals.a_pub, "evaluations");
        Ok(evals)
    }
}

/// `x^size - 1`, zero on the `size`-th roots of unity.
pub fn vanishing(x: Fr, size: u64) -> Fr {
    pow_u64(x, size) - Fr::one()
}

/// `K_0(χ) = (χ^mI - 1) / (mI·(χ - 1))`, the first Lagrange basis
/// polynomial of the interface domain.
pub fn lagrange_k0(chi: Fr, m_i: u64) -> VerifyResult<Fr> {
    if chi.is_one() {
        return Err(VerifierError::LagrangeSingularity);
    }
    let denominator = Fr::from(m_i) * (chi - Fr::one());
    Ok(vanishing(chi, m_i) * inverse(denominator))
}

/// `A_pub = Σ val_i·L_i(χ)` over the `l_pub` roots of `omega`, with
/// `L_i(χ) = ω^i·(χ^l - 1) / (l·(χ - ω^i))`.
///
/// When `χ` is itself a root `ω^i` the sum collapses to `val_i`.
/// Zero-valued inputs contribute nothing and are skipped.
pub fn compute_a_pub(chi: Fr, public_inputs: &[Fr], l_pub: usize, omega: Fr) -> VerifyResult<Fr> {
    if public_inputs.len() != l_pub {
        return Err(VerifierError::InvalidPublicInputLength {
            expected: l_pub,
            actual: public_inputs.len(),
        });
    }

    let mut sum = Fr::zero();
    let mut omega_i = Fr::one();
    for value in public_inputs {
        if chi == omega_i {
            return Ok(*value);
        }
        if !value.is_zero() {
            sum += *value * omega_i * inverse(chi - omega_i);
        }
        omega_i *= omega;
    }

    let l = l_pub as u64;
    Ok(sum * vanishing(chi, l) * inverse(Fr::from(l)))
}

/// `ω_smax^{-1}` for the accepted `smax` values.
pub fn omega_smax_inverse(smax: u64) -> VerifyResult<Fr> {
    match smax {
        64 | 128 | 256 | 512 | 1024 | 2048 => root_of_unity(smax)
            .map(inverse)
            .ok_or(VerifierError::InvalidSmax(smax)),
        _ => Err(VerifierError::InvalidSmax(smax)),
    }
}

/// Aggregated commitments, recomputed on every verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aggregates {
    pub f: G1Point,
    pub g: G1Point,
    /// `V_xy·[U] - [W] + κ1·[V] - t_n·[Q_AX] - t_smax·[Q_AY]`. The
    /// `-κ1·V_xy·[1]` term of `[LHS_A]` is carried by `lhs_c` instead.
    pub lhs_a: G1Point,
    /// `(1 + κ2·κ1^4)·[A]` without the `-κ2·κ1^4·A_pub·[1]` term, which is
    /// also carried by `lhs_c`.
    pub lhs_b: G1Point,
    /// `[LHS_C]` plus the `[1]` terms moved out of `lhs_a` and `lhs_b`, so
    /// only `lhs` matches the unsplit formula.
    pub lhs_c: G1Point,
    pub rhs_1: G1Point,
    pub rhs_2: G1Point,
    pub lhs: G1Point,
    pub aux: G1Point,
    /// `[LHS] + [AUX]`, the point paired with `[1]_2`.
    pub lhs_plus_aux: G1Point,
}

/// Coefficients of `[LHS_C]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LhsCoefficients {
    kl: Fr,
    a: Fr,
    b: Fr,
    q_cx: Fr,
    q_cy: Fr,
    /// `κ1^3 + κ2 + κ2^2`, the combined weight on `[R]`.
    c: Fr,
    /// Weight on `[1]`: the `-κ1^3·r1 - κ2·r2 - κ2^2·r3` terms of `[LHS_C]`,
    /// plus `-κ1·V_xy` from `[LHS_A]` and `-κ1^4·A_pub` from `[LHS_B]`.
    /// Both folded terms pick up the outer `κ2` in `[LHS]`.
    d: Fr,
}

impl LhsCoefficients {
    fn new(proof: &TokamakProof, ch: &Challenges, ev: &Evaluations) -> Self {
        let k1_2 = ch.kappa1 * ch.kappa1;
        let k1_3 = k1_2 * ch.kappa1;
        let k1_4 = k1_3 * ch.kappa1;
        let k2_2 = ch.kappa2 * ch.kappa2;
        let k0_2 = ch.kappa0 * ch.kappa0;
        let chi_minus_one = ch.chi - Fr::one();

        let permutation = k1_2 * ch.kappa0 * chi_minus_one;
        let boundary = k1_2 * k0_2 * ev.k0;

        Self {
            kl: k1_2 * (proof.r1xy - Fr::one()),
            a: permutation * proof.r1xy + boundary * proof.r1xy,
            b: permutation * proof.r2xy + boundary * proof.r3xy,
            q_cx: k1_2 * ev.t_mi,
            q_cy: k1_2 * ev.t_smax,
            c: k1_3 + ch.kappa2 + k2_2,
            d: -(k1_3 * proof.r1xy)
                - ch.kappa2 * proof.r2xy
                - k2_2 * proof.r3xy
                - ch.kappa1 * proof.vxy
                - k1_4 * ev.a_pub,
        }
    }
}

/// Fold proof and key commitments into the pairing operands.
pub fn aggregate<B: CurveBackend>(
    backend: &B,
    vk: &TokamakVerifyingKey,
    proof: &TokamakProof,
    preprocessed: &Preprocessed,
    ch: &Challenges,
    ev: &Evaluations,
) -> VerifyResult<Aggregates> {
    let one = vk.one_g1;

    // [F] = [B] + θ0·[s0] + θ1·[s1] + θ2·[1]
    let mut f = proof.b;
    backend.g1_mul_and_accumulate(&mut f, &preprocessed.s0, &ch.theta0)?;
    backend.g1_mul_and_accumulate(&mut f, &preprocessed.s1, &ch.theta1)?;
    backend.g1_mul_and_accumulate(&mut f, &one, &ch.theta2)?;

    // [G] = [B] + θ0·[x] + θ1·[y] + θ2·[1]
    let mut g = proof.b;
    backend.g1_mul_and_accumulate(&mut g, &vk.x_g1, &ch.theta0)?;
    backend.g1_mul_and_accumulate(&mut g, &vk.y_g1, &ch.theta1)?;
    backend.g1_mul_and_accumulate(&mut g, &one, &ch.theta2)?;
    debug!("aggregated [F], [G]");

    let lhs_a = {
        let mut acc = backend.g1_scalar_mul(&proof.u, &proof.vxy)?;
        acc = backend.g1_sub(&acc, &proof.w)?;
        backend.g1_mul_and_accumulate(&mut acc, &proof.v, &ch.kappa1)?;
        let q_ax = backend.g1_scalar_mul(&proof.q_ax, &ev.t_n)?;
        acc = backend.g1_sub(&acc, &q_ax)?;
        let q_ay = backend.g1_scalar_mul(&proof.q_ay, &ev.t_smax)?;
        backend.g1_sub(&acc, &q_ay)?
    };

    let kappa1_4 = pow_u64(ch.kappa1, 4);
    let lhs_b = backend.g1_scalar_mul(&proof.a, &(Fr::one() + ch.kappa2 * kappa1_4))?;

    let coeffs = LhsCoefficients::new(proof, ch, ev);
    let lhs_c = {
        let mut acc = backend.g1_scalar_mul(&vk.lagrange_kl, &coeffs.kl)?;
        backend.g1_mul_and_accumulate(&mut acc, &g, &coeffs.a)?;
        let f_term = backend.g1_scalar_mul(&f, &coeffs.b)?;
        acc = backend.g1_sub(&acc, &f_term)?;
        let q_cx = backend.g1_scalar_mul(&proof.q_cx, &coeffs.q_cx)?;
        acc = backend.g1_sub(&acc, &q_cx)?;
        let q_cy = backend.g1_scalar_mul(&proof.q_cy, &coeffs.q_cy)?;
        acc = backend.g1_sub(&acc, &q_cy)?;
        backend.g1_mul_and_accumulate(&mut acc, &proof.r, &coeffs.c)?;
        backend.g1_mul_and_accumulate(&mut acc, &one, &coeffs.d)?;
        acc
    };
    debug!("aggregated [LHS_A], [LHS_B], [LHS_C]");

    let k2 = ch.kappa2;
    let k2_2 = k2 * k2;
    let k2_3 = k2_2 * k2;
    let rhs_1 = backend.g1_msm(&[(proof.pi_chi, k2), (proof.m_chi, k2_2), (proof.n_chi, k2_3)])?;
    let rhs_2 = backend.g1_msm(&[(proof.pi_zeta, k2), (proof.m_zeta, k2_2), (proof.n_zeta, k2_3)])?;

    let lhs = {
        let inner = backend.g1_add(&lhs_a, &lhs_c)?;
        let mut acc = lhs_b;
        backend.g1_mul_and_accumulate(&mut acc, &inner, &k2)?;
        acc
    };

    let chi = ch.chi;
    let zeta = ch.zeta;
    let aux = backend.g1_msm(&[
        (proof.pi_chi, k2 * chi),
        (proof.pi_zeta, k2 * zeta),
        (proof.m_chi, k2_2 * ev.omega_m_i_inv * chi),
        (proof.m_zeta, k2_2 * zeta),
        (proof.n_chi, k2_3 * ev.omega_m_i_inv * chi),
        (proof.n_zeta, k2_3 * ev.omega_smax_inv * zeta),
    ])?;
    let lhs_plus_aux = backend.g1_add(&lhs, &aux)?;
    debug!("aggregated [LHS] + [AUX]");

    Ok(Aggregates { f, g, lhs_a, lhs_b, lhs_c, rhs_1, rhs_2, lhs, aux, lhs_plus_aux })
}
