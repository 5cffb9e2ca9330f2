// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared fixtures for the end-to-end tests.
//!
//! Groth16 proofs come from a real arkworks setup and prover. Tokamak
//! proofs come from a trapdoor: every G2 key point is a known multiple of
//! the generator, so `O_prv` can be solved for once everything else is
//! fixed.

#![allow(dead_code)]

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{Field, UniformRand};
use ark_groth16::Groth16;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use tkv_core::aggregate::{aggregate, Evaluations};
use tkv_core::{derive_challenges, Bls12381, TokamakCalldata};
use tkv_sdk::calldata::TokamakWords;
use tkv_sdk::serialize::{groth16_calldata, groth16_vk, Groth16Calldata};
use tkv_types::tokamak::{PROOF_POINT_COUNT, PROOF_SCALAR_COUNT};
use tkv_types::{G1Point, G2Point, Groth16VerifyingKey, Preprocessed, TokamakParams, TokamakProof, TokamakVerifyingKey};

pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── Groth16 ──

/// Tree commitment circuit with `2·leaves + 1` public signals:
/// `signals[0] = (Σ signals[1..])²`.
#[derive(Clone)]
pub struct TreeCircuit {
    pub signals: Vec<Fr>,
}

impl TreeCircuit {
    pub fn new(leaf_data: Vec<Fr>) -> Self {
        let sum: Fr = leaf_data.iter().sum();
        let mut signals = Vec::with_capacity(leaf_data.len() + 1);
        signals.push(sum * sum);
        signals.extend(leaf_data);
        Self { signals }
    }
}

impl ConstraintSynthesizer<Fr> for TreeCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let root = self.signals[0];
        let root_var = cs.new_input_variable(|| Ok(root))?;

        let mut sum_lc = lc!();
        for value in self.signals[1..].iter().copied() {
            let var = cs.new_input_variable(|| Ok(value))?;
            sum_lc = sum_lc + var;
        }
        let sum: Fr = self.signals[1..].iter().sum();
        let acc = cs.new_witness_variable(|| Ok(sum))?;

        cs.enforce_constraint(sum_lc, lc!() + Variable::One, lc!() + acc)?;
        cs.enforce_constraint(lc!() + acc, lc!() + acc, lc!() + root_var)?;
        Ok(())
    }
}

pub struct Groth16Fixture {
    pub vk: Groth16VerifyingKey,
    pub calldata: Groth16Calldata,
    pub signals: Vec<Fr>,
}

/// Setup and prove a tree circuit with `leaves` leaves.
pub fn groth16_fixture(leaves: usize, seed: u64) -> Groth16Fixture {
    let mut rng = test_rng(seed);
    let leaf_data: Vec<Fr> = (0..2 * leaves).map(|_| Fr::rand(&mut rng)).collect();
    let circuit = TreeCircuit::new(leaf_data);

    let (pk, vk) = Groth16::<Bls12_381>::circuit_specific_setup(circuit.clone(), &mut rng)
        .expect("setup failed");
    let proof = Groth16::<Bls12_381>::prove(&pk, circuit.clone(), &mut rng).expect("proving failed");
    assert!(Groth16::<Bls12_381>::verify(&vk, &circuit.signals, &proof).expect("verify failed"));

    Groth16Fixture {
        vk: groth16_vk(&vk),
        calldata: groth16_calldata(&proof, &circuit.signals),
        signals: circuit.signals,
    }
}

// ── Tokamak ──

pub const FIXTURE_N: u64 = 1024;
pub const FIXTURE_M_I: u64 = 512;
pub const FIXTURE_L_PUB: usize = 64;

/// Secret exponents of the G2 key points.
#[derive(Clone, Copy, Debug)]
pub struct Trapdoor {
    pub alpha: Fr,
    pub gamma: Fr,
    pub eta: Fr,
    pub delta: Fr,
    pub x: Fr,
    pub y: Fr,
}

impl Trapdoor {
    fn random(rng: &mut StdRng) -> Self {
        Self {
            alpha: Fr::rand(rng),
            gamma: Fr::rand(rng),
            eta: Fr::rand(rng),
            delta: Fr::rand(rng),
            x: Fr::rand(rng),
            y: Fr::rand(rng),
        }
    }
}

pub struct TokamakFixture {
    pub trapdoor: Trapdoor,
    pub vk: TokamakVerifyingKey,
    pub proof: TokamakProof,
    pub preprocessed: Preprocessed,
    pub public_inputs: Vec<Fr>,
    pub smax: u64,
}

pub fn g1(s: Fr) -> G1Point {
    G1Point::from(&(G1Projective::generator() * s).into_affine())
}

pub fn g2(s: Fr) -> G2Point {
    G2Point::from(&(G2Projective::generator() * s).into_affine())
}

fn projective(p: &G1Point) -> G1Projective {
    Bls12381::g1_affine(p).expect("fixture point").into_group()
}

pub fn random_g1(rng: &mut StdRng) -> G1Point {
    g1(Fr::rand(rng))
}

/// Build a key from `trapdoor`; the G1 side is `[1], [x], [y]` plus a
/// random `[K_0·L_{-1}]`.
pub fn tokamak_key(trapdoor: &Trapdoor, rng: &mut StdRng) -> TokamakVerifyingKey {
    let Trapdoor { alpha, gamma, eta, delta, x, y } = *trapdoor;
    TokamakVerifyingKey {
        params: TokamakParams::new(FIXTURE_N, FIXTURE_M_I, FIXTURE_L_PUB).expect("params"),
        one_g1: g1(Fr::ONE),
        x_g1: g1(x),
        y_g1: g1(y),
        lagrange_kl: random_g1(rng),
        one_g2: g2(Fr::ONE),
        alpha_g2: g2(alpha),
        alpha2_g2: g2(alpha.square()),
        alpha3_g2: g2(alpha.pow([3u64])),
        alpha4_g2: g2(alpha.pow([4u64])),
        neg_gamma_g2: g2(-gamma),
        neg_eta_g2: g2(-eta),
        neg_delta_g2: g2(-delta),
        neg_x_g2: g2(-x),
        neg_y_g2: g2(-y),
    }
}

/// The `O_prv` that balances the pairing equation for everything else in
/// `proof`.
pub fn solve_o_prv(
    trapdoor: &Trapdoor,
    vk: &TokamakVerifyingKey,
    proof: &TokamakProof,
    preprocessed: &Preprocessed,
    public_inputs: &[Fr],
    smax: u64,
) -> G1Point {
    let Trapdoor { alpha, gamma, eta, delta, x, y } = *trapdoor;
    let challenges = derive_challenges(proof);
    let evaluations =
        Evaluations::compute(&vk.params, &challenges, public_inputs, smax).expect("evaluations");
    let agg = aggregate(&Bls12381, vk, proof, preprocessed, &challenges, &evaluations)
        .expect("aggregate");

    let balance = projective(&agg.lhs_plus_aux)
        + projective(&proof.b) * alpha.pow([4u64])
        + projective(&proof.u) * alpha
        + projective(&proof.v) * alpha.square()
        + projective(&proof.w) * alpha.pow([3u64])
        - projective(&proof.o_pub) * gamma
        - projective(&proof.o_mid) * eta
        - projective(&agg.rhs_1) * x
        - projective(&agg.rhs_2) * y;
    let delta_inv = delta.inverse().expect("non-zero delta");
    G1Point::from(&(balance * delta_inv).into_affine())
}

/// A proof that satisfies the Tokamak pairing equation.
pub fn tokamak_fixture(seed: u64, smax: u64) -> TokamakFixture {
    let mut rng = test_rng(seed);
    let trapdoor = Trapdoor::random(&mut rng);
    let vk = tokamak_key(&trapdoor, &mut rng);

    let mut points = [G1Point::IDENTITY; PROOF_POINT_COUNT];
    for p in points.iter_mut() {
        *p = random_g1(&mut rng);
    }
    let mut scalars = [Fr::ONE; PROOF_SCALAR_COUNT];
    for s in scalars.iter_mut() {
        *s = Fr::rand(&mut rng);
    }
    let mut proof = TokamakProof::from_parts(points, scalars);
    let preprocessed = Preprocessed { s0: random_g1(&mut rng), s1: random_g1(&mut rng) };
    let public_inputs: Vec<Fr> = (0..FIXTURE_L_PUB).map(|_| Fr::rand(&mut rng)).collect();

    proof.o_prv = solve_o_prv(&trapdoor, &vk, &proof, &preprocessed, &public_inputs, smax);

    TokamakFixture { trapdoor, vk, proof, preprocessed, public_inputs, smax }
}

impl TokamakFixture {
    pub fn words(&self) -> TokamakWords {
        TokamakWords::encode(&self.proof, &self.preprocessed, &self.public_inputs, self.smax)
    }
}

pub fn calldata(words: &TokamakWords, smax: u64) -> TokamakCalldata<'_> {
    TokamakCalldata {
        proof_part1: &words.proof_part1,
        proof_part2: &words.proof_part2,
        preprocessed_part1: &words.preprocessed_part1,
        preprocessed_part2: &words.preprocessed_part2,
        public_inputs: &words.public_inputs,
        smax,
    }
}
