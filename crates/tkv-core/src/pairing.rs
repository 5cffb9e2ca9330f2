// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Final multi-pairing of the Tokamak verifier.

use tkv_types::{G1Point, G2Point, TokamakProof, TokamakVerifyingKey};

use crate::aggregate::Aggregates;
use crate::backend::CurveBackend;
use crate::error::{VerifierError, VerifyResult};

pub const PAIRING_ARITY: usize = 10;

/// The ten `(G1, G2)` operands, in evaluation order.
pub fn pairing_operands(
    vk: &TokamakVerifyingKey,
    proof: &TokamakProof,
    agg: &Aggregates,
) -> [(G1Point, G2Point); PAIRING_ARITY] {
    [
        (agg.lhs_plus_aux, vk.one_g2),
        (proof.b, vk.alpha4_g2),
        (proof.u, vk.alpha_g2),
        (proof.v, vk.alpha2_g2),
        (proof.w, vk.alpha3_g2),
        (proof.o_pub, vk.neg_gamma_g2),
        (proof.o_mid, vk.neg_eta_g2),
        (proof.o_prv, vk.neg_delta_g2),
        (agg.rhs_1, vk.neg_x_g2),
        (agg.rhs_2, vk.neg_y_g2),
    ]
}

/// Succeeds iff the product of the pairings is one.
pub fn check_pairing<B: CurveBackend>(backend: &B, pairs: &[(G1Point, G2Point)]) -> VerifyResult<()> {
    if backend.pairing_check(pairs)? {
        Ok(())
    } else {
        Err(VerifierError::PairingFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{g1_negate, Bls12381};
    use ark_bls12_381::{G1Affine, G2Affine};
    use ark_ec::AffineRepr;

    #[test]
    fn balanced_pairs_pass() {
        let p = Bls12381::g1_point(&G1Affine::generator());
        let q = Bls12381::g2_point(&G2Affine::generator());
        assert!(check_pairing(&Bls12381, &[(p, q), (g1_negate(&p), q)]).is_ok());
    }

    #[test]
    fn unbalanced_pairs_fail() {
        let p = Bls12381::g1_point(&G1Affine::generator());
        let q = Bls12381::g2_point(&G2Affine::generator());
        assert_eq!(check_pairing(&Bls12381, &[(p, q)]), Err(VerifierError::PairingFailure));
    }

    #[test]
    fn backend_errors_propagate() {
        let mut p = Bls12381::g1_point(&G1Affine::generator());
        p.y.lo[31] ^= 1;
        let q = Bls12381::g2_point(&G2Affine::generator());
        assert!(matches!(
            check_pairing(&Bls12381, &[(p, q)]),
            Err(VerifierError::BackendCallFailure(_))
        ));
    }
}
