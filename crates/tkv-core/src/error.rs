// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Named verification failures.
//!
//! Malformed input is reported before any curve work. A pairing that does
//! not hold and a backend that refuses an operand are both rejections; the
//! distinction only exists for diagnostics.

use crate::registry::CircuitId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    #[error("invalid proof length: {part} has {actual} entries, expected {expected}")]
    InvalidProofLength {
        part: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid field element: {context}[{index}] is out of range")]
    InvalidFieldElement { context: &'static str, index: usize },

    #[error("invalid public input length: got {actual}, expected {expected}")]
    InvalidPublicInputLength { expected: usize, actual: usize },

    #[error("invalid smax: {0}")]
    InvalidSmax(u64),

    #[error("lagrange K0 undefined at chi = 1")]
    LagrangeSingularity,

    #[error("pairing check failed")]
    PairingFailure,

    #[error("backend call failed: {0}")]
    BackendCallFailure(String),

    #[error("IC index {index} out of range ({len} points)")]
    IcIndexOutOfRange { index: usize, len: usize },

    #[error("invalid verification key: {0}")]
    InvalidVerificationKey(String),

    #[error("circuit not registered: {0}")]
    UnknownCircuit(CircuitId),

    #[error("circuit already registered: {0}")]
    CircuitAlreadyRegistered(CircuitId),
}

impl VerifierError {
    /// Input was rejected before any cryptographic work.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidProofLength { .. }
                | Self::InvalidFieldElement { .. }
                | Self::InvalidPublicInputLength { .. }
                | Self::InvalidSmax(_)
        )
    }
}

pub type VerifyResult<T> = Result<T, VerifierError>;
