// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Content-addressed registry of verification keys.
//!
//! A key is registered once and identified by
//! `sha256(kind ++ canonical limb encoding of every key element)`.
//! Registered keys are never mutated.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tkv_types::limbs::{fr_to_word, word_from_u64};
use tkv_types::{G1Point, G2Point, Groth16VerifyingKey, TokamakVerifyingKey, Word};
use tracing::{debug, info};

use crate::backend::Bls12381;
use crate::error::{VerifierError, VerifyResult};
use crate::groth16::verify_groth16_calldata;
use crate::ic_source::IcSource;
use crate::tokamak::{verify_tokamak, TokamakCalldata};

const GROTH16_TAG: u8 = 0x01;
const TOKAMAK_TAG: u8 = 0x02;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircuitId(pub [u8; 32]);

impl CircuitId {
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s)).ok()?;
        Some(Self(bytes.try_into().ok()?))
    }

    /// Identifier of a Groth16 key.
    pub fn of_groth16<I: IcSource>(vk: &Groth16VerifyingKey<I>) -> VerifyResult<Self> {
        let mut hasher = Sha256::new();
        hasher.update([GROTH16_TAG]);
        hash_g1(&mut hasher, &vk.alpha_g1);
        hash_g2(&mut hasher, &vk.beta_g2);
        hash_g2(&mut hasher, &vk.gamma_g2);
        hash_g2(&mut hasher, &vk.delta_g2);
        for i in 0..vk.ic.len() {
            hash_g1(&mut hasher, &vk.ic.get(i)?);
        }
        Ok(Self(hasher.finalize().into()))
    }

    /// Identifier of a Tokamak key, covering its circuit parameters.
    pub fn of_tokamak(vk: &TokamakVerifyingKey) -> Self {
        let mut hasher = Sha256::new();
        hasher.update([TOKAMAK_TAG]);
        let params = &vk.params;
        hasher.update(word_from_u64(params.n));
        hasher.update(word_from_u64(params.m_i));
        hasher.update(word_from_u64(params.l_pub as u64));
        hasher.update(fr_to_word(&params.omega_m_i));
        hasher.update(fr_to_word(&params.omega_l_pub));
        for p in [&vk.one_g1, &vk.x_g1, &vk.y_g1, &vk.lagrange_kl] {
            hash_g1(&mut hasher, p);
        }
        for q in [
            &vk.one_g2,
            &vk.alpha_g2,
            &vk.alpha2_g2,
            &vk.alpha3_g2,
            &vk.alpha4_g2,
            &vk.neg_gamma_g2,
            &vk.neg_eta_g2,
            &vk.neg_delta_g2,
            &vk.neg_x_g2,
            &vk.neg_y_g2,
        ] {
            hash_g2(&mut hasher, q);
        }
        Self(hasher.finalize().into())
    }
}

fn hash_g1(hasher: &mut Sha256, p: &G1Point) {
    for word in p.to_words() {
        hasher.update(word);
    }
}

fn hash_g2(hasher: &mut Sha256, q: &G2Point) {
    for word in q.to_words() {
        hasher.update(word);
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CircuitId({self})")
    }
}

fn check_g1(label: &str, p: &G1Point) -> VerifyResult<()> {
    Bls12381::g1_affine(p)
        .map(|_| ())
        .map_err(|e| VerifierError::InvalidVerificationKey(format!("{label}: {e}")))
}

fn check_g2(label: &str, q: &G2Point) -> VerifyResult<()> {
    Bls12381::g2_affine(q)
        .map(|_| ())
        .map_err(|e| VerifierError::InvalidVerificationKey(format!("{label}: {e}")))
}

/// Reject keys with malformed points or an empty IC table.
pub fn validate_groth16_key<I: IcSource>(vk: &Groth16VerifyingKey<I>) -> VerifyResult<()> {
    check_g1("alpha_g1", &vk.alpha_g1)?;
    check_g2("beta_g2", &vk.beta_g2)?;
    check_g2("gamma_g2", &vk.gamma_g2)?;
    check_g2("delta_g2", &vk.delta_g2)?;
    if vk.ic.is_empty() {
        return Err(VerifierError::InvalidVerificationKey("empty IC table".into()));
    }
    for i in 0..vk.ic.len() {
        check_g1("ic", &vk.ic.get(i)?)?;
    }
    Ok(())
}

pub fn validate_tokamak_key(vk: &TokamakVerifyingKey) -> VerifyResult<()> {
    let params = &vk.params;
    if !params.n.is_power_of_two() || !params.m_i.is_power_of_two() || !params.l_pub.is_power_of_two() {
        return Err(VerifierError::InvalidVerificationKey(
            "domain sizes must be powers of two".into(),
        ));
    }
    if !params.has_primitive_roots() {
        return Err(VerifierError::InvalidVerificationKey(
            "omega_m_i or omega_l_pub is not a primitive root of its domain".into(),
        ));
    }
    check_g1("one_g1", &vk.one_g1)?;
    check_g1("x_g1", &vk.x_g1)?;
    check_g1("y_g1", &vk.y_g1)?;
    check_g1("lagrange_kl", &vk.lagrange_kl)?;
    for (label, q) in [
        ("one_g2", &vk.one_g2),
        ("alpha_g2", &vk.alpha_g2),
        ("alpha2_g2", &vk.alpha2_g2),
        ("alpha3_g2", &vk.alpha3_g2),
        ("alpha4_g2", &vk.alpha4_g2),
        ("neg_gamma_g2", &vk.neg_gamma_g2),
        ("neg_eta_g2", &vk.neg_eta_g2),
        ("neg_delta_g2", &vk.neg_delta_g2),
        ("neg_x_g2", &vk.neg_x_g2),
        ("neg_y_g2", &vk.neg_y_g2),
    ] {
        check_g2(label, q)?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
enum RegisteredKey {
    Groth16(Arc<Groth16VerifyingKey>),
    Tokamak(Arc<TokamakVerifyingKey>),
}

/// General-purpose verifier registry for both proof systems.
#[derive(Clone, Debug, Default)]
pub struct VerifierRegistry {
    circuits: HashMap<CircuitId, RegisteredKey>,
}

impl VerifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Groth16 key, returns its content-addressed id.
    pub fn register_groth16(&mut self, vk: Groth16VerifyingKey) -> VerifyResult<CircuitId> {
        validate_groth16_key(&vk)?;
        let id = CircuitId::of_groth16(&vk)?;
        self.insert(id, RegisteredKey::Groth16(Arc::new(vk)))?;
        info!(circuit_id = %id, "registered groth16 key");
        Ok(id)
    }

    /// Register a Tokamak key, returns its content-addressed id.
    pub fn register_tokamak(&mut self, vk: TokamakVerifyingKey) -> VerifyResult<CircuitId> {
        validate_tokamak_key(&vk)?;
        let id = CircuitId::of_tokamak(&vk);
        self.insert(id, RegisteredKey::Tokamak(Arc::new(vk)))?;
        info!(circuit_id = %id, "registered tokamak key");
        Ok(id)
    }

    fn insert(&mut self, id: CircuitId, key: RegisteredKey) -> VerifyResult<()> {
        if self.circuits.contains_key(&id) {
            return Err(VerifierError::CircuitAlreadyRegistered(id));
        }
        self.circuits.insert(id, key);
        Ok(())
    }

    pub fn is_registered(&self, id: &CircuitId) -> bool {
        self.circuits.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    pub fn groth16_key(&self, id: &CircuitId) -> VerifyResult<Arc<Groth16VerifyingKey>> {
        match self.circuits.get(id) {
            Some(RegisteredKey::Groth16(vk)) => Ok(Arc::clone(vk)),
            _ => Err(VerifierError::UnknownCircuit(*id)),
        }
    }

    pub fn tokamak_key(&self, id: &CircuitId) -> VerifyResult<Arc<TokamakVerifyingKey>> {
        match self.circuits.get(id) {
            Some(RegisteredKey::Tokamak(vk)) => Ok(Arc::clone(vk)),
            _ => Err(VerifierError::UnknownCircuit(*id)),
        }
    }

    /// Verify Groth16 calldata against a registered circuit.
    pub fn verify_groth16(
        &self,
        id: &CircuitId,
        p_a: &[Word],
        p_b: &[Word],
        p_c: &[Word],
        public_signals: &[Word],
    ) -> VerifyResult<()> {
        let vk = self.groth16_key(id)?;
        verify_groth16_calldata(&Bls12381, vk.as_ref(), p_a, p_b, p_c, public_signals)?;
        debug!(circuit_id = %id, "groth16 proof accepted");
        Ok(())
    }

    /// Verify Tokamak calldata against a registered circuit.
    pub fn verify_tokamak(&self, id: &CircuitId, calldata: &TokamakCalldata<'_>) -> VerifyResult<()> {
        let vk = self.tokamak_key(id)?;
        verify_tokamak(&Bls12381, vk.as_ref(), calldata)?;
        debug!(circuit_id = %id, "tokamak proof accepted");
        Ok(())
    }
}

/// Supported Merkle tree sizes of the Groth16 verifier family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeSize {
    Leaves16,
    Leaves32,
    Leaves64,
    Leaves128,
}

impl TreeSize {
    pub const ALL: [TreeSize; 4] = [
        TreeSize::Leaves16,
        TreeSize::Leaves32,
        TreeSize::Leaves64,
        TreeSize::Leaves128,
    ];

    pub fn leaves(self) -> usize {
        match self {
            TreeSize::Leaves16 => 16,
            TreeSize::Leaves32 => 32,
            TreeSize::Leaves64 => 64,
            TreeSize::Leaves128 => 128,
        }
    }

    /// Root plus two signals per leaf.
    pub fn public_signals(self) -> usize {
        2 * self.leaves() + 1
    }

    pub fn from_leaves(leaves: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.leaves() == leaves)
    }

    pub fn from_signal_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.public_signals() == count)
    }
}

impl fmt::Display for TreeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leaves", self.leaves())
    }
}

/// Groth16 keys for each tree size, selected by public-signal count.
#[derive(Clone, Debug)]
pub struct Groth16Family<I = Vec<G1Point>> {
    keys: BTreeMap<TreeSize, Arc<Groth16VerifyingKey<I>>>,
}

impl<I> Default for Groth16Family<I> {
    fn default() -> Self {
        Self { keys: BTreeMap::new() }
    }
}

impl<I: IcSource> Groth16Family<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, size: TreeSize, vk: Groth16VerifyingKey<I>) -> VerifyResult<()> {
        let expected = size.public_signals() + 1;
        if vk.ic.len() != expected {
            return Err(VerifierError::InvalidVerificationKey(format!(
                "{size} key needs {expected} IC points, got {}",
                vk.ic.len()
            )));
        }
        self.keys.insert(size, Arc::new(vk));
        Ok(())
    }

    pub fn sizes(&self) -> impl Iterator<Item = TreeSize> + '_ {
        self.keys.keys().copied()
    }

    pub fn key(&self, size: TreeSize) -> Option<&Groth16VerifyingKey<I>> {
        self.keys.get(&size).map(Arc::as_ref)
    }

    /// Dispatch on the number of public signals.
    pub fn verify(
        &self,
        p_a: &[Word],
        p_b: &[Word],
        p_c: &[Word],
        public_signals: &[Word],
    ) -> VerifyResult<()> {
        let actual = public_signals.len();
        let size = TreeSize::from_signal_count(actual).ok_or_else(|| {
            let expected = TreeSize::ALL
                .iter()
                .map(|s| s.public_signals())
                .min_by_key(|n| n.abs_diff(actual))
                .unwrap_or(0);
            VerifierError::InvalidPublicInputLength { expected, actual }
        })?;
        let vk = self.key(size).ok_or_else(|| {
            VerifierError::InvalidVerificationKey(format!("no key installed for {size}"))
        })?;
        verify_groth16_calldata(&Bls12381, vk, p_a, p_b, p_c, public_signals)
    }
}
