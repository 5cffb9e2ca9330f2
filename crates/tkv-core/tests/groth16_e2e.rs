// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end Groth16 verification: arkworks prover → calldata → verifier

mod common;

use ark_bls12_381::Fr;
use common::{groth16_fixture, Groth16Fixture};
use tkv_core::{
    is_valid_groth16, verify_groth16_calldata, Bls12381, Groth16Family, PagedIcSource, TreeSize,
    VerifierError, VerifierRegistry,
};
use tkv_types::limbs::r_mod_word;
use tkv_types::{fr_to_word, Groth16VerifyingKey};

fn verify(f: &Groth16Fixture) -> Result<(), VerifierError> {
    let c = &f.calldata;
    verify_groth16_calldata(&Bls12381, &f.vk, &c.p_a, &c.p_b, &c.p_c, &c.public_signals)
}

#[test]
fn valid_proof_16() {
    let f = groth16_fixture(16, 1);
    assert_eq!(f.calldata.public_signals.len(), 33);
    assert_eq!(verify(&f), Ok(()));
    let c = &f.calldata;
    assert!(is_valid_groth16(&Bls12381, &f.vk, &c.p_a, &c.p_b, &c.p_c, &c.public_signals));
}

#[test]
fn verification_is_deterministic() {
    let f = groth16_fixture(16, 2);
    assert_eq!(verify(&f), verify(&f));
}

#[test]
fn wrong_signal_rejected() {
    let mut f = groth16_fixture(16, 3);
    f.calldata.public_signals[5] = fr_to_word(&(f.signals[5] + Fr::from(1u64)));
    assert_eq!(verify(&f), Err(VerifierError::PairingFailure));
}

#[test]
fn out_of_field_signal_rejected_before_pairing() {
    let mut f = groth16_fixture(16, 4);
    f.calldata.public_signals[0] = r_mod_word();
    assert_eq!(
        verify(&f),
        Err(VerifierError::InvalidFieldElement { context: "public input", index: 0 })
    );
}

#[test]
fn empty_signals_rejected() {
    let mut f = groth16_fixture(16, 5);
    f.calldata.public_signals.clear();
    assert_eq!(
        verify(&f),
        Err(VerifierError::InvalidPublicInputLength { expected: 33, actual: 0 })
    );
}

#[test]
fn tampered_a_rejected() {
    let mut f = groth16_fixture(16, 6);
    f.calldata.p_a[1][31] ^= 1;
    assert!(matches!(verify(&f), Err(VerifierError::BackendCallFailure(_))));

    let mut f = groth16_fixture(16, 6);
    f.calldata.p_a[0][0] = 1;
    assert!(matches!(
        verify(&f),
        Err(VerifierError::InvalidFieldElement { context: "pA", index: 0 })
    ));
}

#[test]
fn swapped_proof_rejected() {
    let a = groth16_fixture(16, 7);
    let mut b = groth16_fixture(16, 7);
    // Same key, proof points from an unrelated run.
    let other = groth16_fixture(16, 8);
    b.calldata.p_c = other.calldata.p_c;
    assert_eq!(verify(&a), Ok(()));
    assert_eq!(verify(&b), Err(VerifierError::PairingFailure));
}

#[test]
fn paged_ic_source_matches_inline_table() {
    let f = groth16_fixture(32, 9);
    assert_eq!(f.vk.ic.len(), 66);
    let paged = Groth16VerifyingKey {
        alpha_g1: f.vk.alpha_g1,
        beta_g2: f.vk.beta_g2,
        gamma_g2: f.vk.gamma_g2,
        delta_g2: f.vk.delta_g2,
        ic: PagedIcSource::paginate(&f.vk.ic, 40),
    };
    let c = &f.calldata;
    assert_eq!(
        verify_groth16_calldata(&Bls12381, &paged, &c.p_a, &c.p_b, &c.p_c, &c.public_signals),
        Ok(())
    );
}

#[test]
fn registry_roundtrip() {
    let f = groth16_fixture(16, 10);
    let mut registry = VerifierRegistry::new();
    let id = registry.register_groth16(f.vk.clone()).unwrap();
    let c = &f.calldata;
    assert_eq!(registry.verify_groth16(&id, &c.p_a, &c.p_b, &c.p_c, &c.public_signals), Ok(()));
    assert_eq!(
        registry.register_groth16(f.vk.clone()),
        Err(VerifierError::CircuitAlreadyRegistered(id))
    );
}

#[test]
fn family_dispatches_by_signal_count() {
    let small = groth16_fixture(16, 11);
    let large = groth16_fixture(32, 12);
    let mut family = Groth16Family::new();
    family.insert(TreeSize::Leaves16, small.vk.clone()).unwrap();
    family.insert(TreeSize::Leaves32, large.vk.clone()).unwrap();

    for f in [&small, &large] {
        let c = &f.calldata;
        assert_eq!(family.verify(&c.p_a, &c.p_b, &c.p_c, &c.public_signals), Ok(()));
    }

    // A 16-leaf key has the wrong IC table for the 32-leaf slot.
    assert!(family.insert(TreeSize::Leaves32, small.vk.clone()).is_err());
}
