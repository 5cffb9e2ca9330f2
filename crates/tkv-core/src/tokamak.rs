// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Tokamak zk-SNARK verifier
//!
//! Flow: decode calldata → replay the transcript → derive evaluations →
//! aggregate commitments → ten-pair pairing check.

use ark_bls12_381::Fr;
use tkv_types::{Preprocessed, TokamakProof, TokamakVerifyingKey, Word};
use tracing::{debug, warn};

use crate::aggregate::{aggregate, Challenges, Evaluations};
use crate::backend::CurveBackend;
use crate::decode::{check_smax, decode_preprocessed, decode_tokamak_inputs, decode_tokamak_proof};
use crate::error::VerifyResult;
use crate::pairing::{check_pairing, pairing_operands};
use crate::transcript::Transcript;

/// Squeeze indices of the challenges.
pub mod challenge_index {
    pub const THETA_0: u32 = 0;
    pub const THETA_1: u32 = 1;
    pub const THETA_2: u32 = 2;
    pub const KAPPA_0: u32 = 3;
    pub const CHI: u32 = 4;
    pub const ZETA: u32 = 5;
    pub const KAPPA_1: u32 = 6;
    pub const KAPPA_2: u32 = 7;
}

/// Raw Tokamak calldata in the two-part limb layout.
#[derive(Clone, Copy, Debug)]
pub struct TokamakCalldata<'a> {
    pub proof_part1: &'a [u128],
    pub proof_part2: &'a [Word],
    pub preprocessed_part1: &'a [u128],
    pub preprocessed_part2: &'a [Word],
    pub public_inputs: &'a [Word],
    pub smax: u64,
}

/// Replay the Fiat-Shamir transcript of `proof`.
pub fn derive_challenges(proof: &TokamakProof) -> Challenges {
    use challenge_index::*;

    let mut transcript = Transcript::new();
    for point in [&proof.u, &proof.v, &proof.w, &proof.q_ax, &proof.q_ay, &proof.b] {
        transcript.absorb_g1(point);
    }
    let theta0 = transcript.squeeze(THETA_0);
    let theta1 = transcript.squeeze(THETA_1);
    let theta2 = transcript.squeeze(THETA_2);

    transcript.absorb_g1(&proof.r);
    let kappa0 = transcript.squeeze(KAPPA_0);

    transcript.absorb_g1(&proof.q_cx);
    transcript.absorb_g1(&proof.q_cy);
    let chi = transcript.squeeze(CHI);
    let zeta = transcript.squeeze(ZETA);

    for scalar in [&proof.vxy, &proof.r1xy, &proof.r2xy, &proof.r3xy] {
        transcript.absorb_scalar(scalar);
    }
    let kappa1 = transcript.squeeze(KAPPA_1);
    let kappa2 = transcript.squeeze(KAPPA_2);

    let challenges = Challenges { theta0, theta1, theta2, kappa0, chi, zeta, kappa1, kappa2 };
    debug!(?challenges, "derived challenges");
    challenges
}

/// Verify an already decoded proof.
pub fn verify_decoded<B: CurveBackend>(
    backend: &B,
    vk: &TokamakVerifyingKey,
    proof: &TokamakProof,
    preprocessed: &Preprocessed,
    public_inputs: &[Fr],
    smax: u64,
) -> VerifyResult<()> {
    check_smax(smax)?;
    let challenges = derive_challenges(proof);
    let evaluations = Evaluations::compute(&vk.params, &challenges, public_inputs, smax)?;
    let aggregates = aggregate(backend, vk, proof, preprocessed, &challenges, &evaluations)?;
    check_pairing(backend, &pairing_operands(vk, proof, &aggregates))
}

/// Verify Tokamak calldata. Every malformed input and every failed check
/// is an error; `Ok(())` is the only acceptance.
pub fn verify_tokamak<B: CurveBackend>(
    backend: &B,
    vk: &TokamakVerifyingKey,
    calldata: &TokamakCalldata<'_>,
) -> VerifyResult<()> {
    let result = decode_tokamak_proof(calldata.proof_part1, calldata.proof_part2).and_then(|proof| {
        let preprocessed =
            decode_preprocessed(calldata.preprocessed_part1, calldata.preprocessed_part2)?;
        let public_inputs = decode_tokamak_inputs(calldata.public_inputs, calldata.smax)?;
        verify_decoded(backend, vk, &proof, &preprocessed, &public_inputs, calldata.smax)
    });
    if let Err(err) = &result {
        warn!(%err, "tokamak proof rejected");
    }
    result
}

/// Fail-closed boolean form of [`verify_tokamak`].
pub fn is_valid_tokamak<B: CurveBackend>(
    backend: &B,
    vk: &TokamakVerifyingKey,
    calldata: &TokamakCalldata<'_>,
) -> bool {
    verify_tokamak(backend, vk, calldata).is_ok()
}
