// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier
//!
//! Algorithm:
//! 1. Compute vk_x = IC[0] + Σ IC[i+1]·s_i
//! 2. Check: e(-A,B) * e(alpha,beta) * e(vk_x,gamma) * e(C,delta) == 1

use ark_bls12_381::Fr;
use tkv_types::{G1Point, Groth16Proof, Groth16VerifyingKey, Word};
use tracing::{debug, warn};

use crate::backend::{g1_negate, CurveBackend};
use crate::decode::{decode_groth16_proof, decode_public_inputs};
use crate::error::{VerifierError, VerifyResult};
use crate::ic_source::IcSource;

/// `IC[0] + Σ IC[i+1]·signals[i]`, reading points through `ic`.
pub fn compute_vk_x<B: CurveBackend, I: IcSource + ?Sized>(
    backend: &B,
    ic: &I,
    signals: &[Fr],
) -> VerifyResult<G1Point> {
    if ic.is_empty() {
        return Err(VerifierError::InvalidVerificationKey("empty IC table".into()));
    }
    if ic.len() != signals.len() + 1 {
        return Err(VerifierError::InvalidPublicInputLength {
            expected: ic.len() - 1,
            actual: signals.len(),
        });
    }
    let mut acc = ic.get(0)?;
    for (i, signal) in signals.iter().enumerate() {
        let point = ic.get(i + 1)?;
        backend.g1_mul_and_accumulate(&mut acc, &point, signal)?;
    }
    Ok(acc)
}

/// Verify a decoded Groth16 proof against canonical public signals.
pub fn verify_groth16<B: CurveBackend, I: IcSource>(
    backend: &B,
    vk: &Groth16VerifyingKey<I>,
    proof: &Groth16Proof,
    signals: &[Fr],
) -> VerifyResult<()> {
    let vk_x = compute_vk_x(backend, &vk.ic, signals)?;
    debug!(signals = signals.len(), "computed vk_x");

    let pairs = [
        (g1_negate(&proof.a), proof.b),
        (vk.alpha_g1, vk.beta_g2),
        (vk_x, vk.gamma_g2),
        (proof.c, vk.delta_g2),
    ];
    if backend.pairing_check(&pairs)? {
        Ok(())
    } else {
        Err(VerifierError::PairingFailure)
    }
}

/// Verify Groth16 calldata `(pA, pB, pC, publicSignals)`.
pub fn verify_groth16_calldata<B: CurveBackend, I: IcSource>(
    backend: &B,
    vk: &Groth16VerifyingKey<I>,
    p_a: &[Word],
    p_b: &[Word],
    p_c: &[Word],
    public_signals: &[Word],
) -> VerifyResult<()> {
    let result = decode_groth16_proof(p_a, p_b, p_c).and_then(|proof| {
        let signals = decode_public_inputs(public_signals)?;
        verify_groth16(backend, vk, &proof, &signals)
    });
    if let Err(err) = &result {
        warn!(%err, "groth16 proof rejected");
    }
    result
}

/// Fail-closed boolean form of [`verify_groth16_calldata`].
pub fn is_valid_groth16<B: CurveBackend, I: IcSource>(
    backend: &B,
    vk: &Groth16VerifyingKey<I>,
    p_a: &[Word],
    p_b: &[Word],
    p_c: &[Word],
    public_signals: &[Word],
) -> bool {
    verify_groth16_calldata(backend, vk, p_a, p_b, p_c, public_signals).is_ok()
}
