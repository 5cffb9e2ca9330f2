// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → two-limb calldata encoding.
//!
//! The inverse of the core decoder: every base-field coordinate is split
//! into a 16-byte high part and a 32-byte low part, scalars are 32-byte
//! big-endian words and the identity is all zeros.
//!
//! # Example
//!
//! ```rust,no_run
//! use tkv_sdk::serialize::{groth16_calldata, groth16_vk};
//!
//! # fn example(
//! #     vk: &ark_groth16::VerifyingKey<ark_bls12_381::Bls12_381>,
//! #     proof: &ark_groth16::Proof<ark_bls12_381::Bls12_381>,
//! #     public_inputs: &[ark_bls12_381::Fr],
//! # ) {
//! let key = groth16_vk(vk);
//! let calldata = groth16_calldata(proof, public_inputs);
//! // calldata.p_a, calldata.p_b, calldata.p_c, calldata.public_signals
//! # }
//! ```

use ark_bls12_381::{Bls12_381, Fr};
use tkv_types::tokamak::{PROOF_PART1_LEN, PROOF_PART2_LEN};
use tkv_types::{
    fr_to_word, G1Point, G2Point, Groth16Proof, Groth16VerifyingKey, Preprocessed, TokamakProof,
    Word,
};

/// Convert an arkworks verifying key; `gamma_abc_g1` becomes the IC table.
pub fn groth16_vk(vk: &ark_groth16::VerifyingKey<Bls12_381>) -> Groth16VerifyingKey {
    Groth16VerifyingKey {
        alpha_g1: G1Point::from(&vk.alpha_g1),
        beta_g2: G2Point::from(&vk.beta_g2),
        gamma_g2: G2Point::from(&vk.gamma_g2),
        delta_g2: G2Point::from(&vk.delta_g2),
        ic: vk.gamma_abc_g1.iter().map(G1Point::from).collect(),
    }
}

pub fn groth16_proof(proof: &ark_groth16::Proof<Bls12_381>) -> Groth16Proof {
    Groth16Proof {
        a: G1Point::from(&proof.a),
        b: G2Point::from(&proof.b),
        c: G1Point::from(&proof.c),
    }
}

/// `verify(pA, pB, pC, publicSignals)` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groth16Calldata {
    pub p_a: [Word; 4],
    pub p_b: [Word; 8],
    pub p_c: [Word; 4],
    pub public_signals: Vec<Word>,
}

pub fn groth16_calldata(proof: &ark_groth16::Proof<Bls12_381>, public_inputs: &[Fr]) -> Groth16Calldata {
    let proof = groth16_proof(proof);
    Groth16Calldata {
        p_a: proof.a.to_words(),
        p_b: proof.b.to_words(),
        p_c: proof.c.to_words(),
        public_signals: encode_scalars(public_inputs),
    }
}

pub fn encode_scalars(values: &[Fr]) -> Vec<Word> {
    values.iter().map(fr_to_word).collect()
}

/// Split G1 points into `(part1, part2)`: high parts as `u128`, low parts
/// as words, x before y.
fn split_points(points: &[G1Point], part1: &mut Vec<u128>, part2: &mut Vec<Word>) {
    for p in points {
        part1.push(p.x.hi);
        part1.push(p.y.hi);
        part2.push(p.x.lo);
        part2.push(p.y.lo);
    }
}

/// `(proofPart1, proofPart2)` of a Tokamak proof.
pub fn encode_tokamak_proof(proof: &TokamakProof) -> (Vec<u128>, Vec<Word>) {
    let mut part1 = Vec::with_capacity(PROOF_PART1_LEN);
    let mut part2 = Vec::with_capacity(PROOF_PART2_LEN);
    split_points(&proof.points(), &mut part1, &mut part2);
    part2.extend(proof.scalars().iter().map(fr_to_word));
    (part1, part2)
}

/// `(preprocessedPart1, preprocessedPart2)`.
pub fn encode_preprocessed(pre: &Preprocessed) -> (Vec<u128>, Vec<Word>) {
    let mut part1 = Vec::with_capacity(4);
    let mut part2 = Vec::with_capacity(4);
    split_points(&[pre.s0, pre.s1], &mut part1, &mut part2);
    (part1, part2)
}
