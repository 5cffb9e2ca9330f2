// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Boundary data model shared by the verifier core, the SDK and the CLI.
//!
//! Everything here is a plain value type. Curve points are kept in their
//! wire form (two-limb base-field coordinates) so that the core can hand
//! them to a pairing backend unchanged; scalars are arkworks `Fr` once they
//! have been range-checked.

pub mod groth16;
pub mod limbs;
pub mod point;
pub mod tokamak;

pub use groth16::{Groth16Proof, Groth16VerifyingKey};
pub use limbs::{fr_from_word, fr_to_word, reduce_check, FqLimbs, Word, ZERO_WORD};
pub use point::{G1Point, G2Point};
pub use tokamak::{Preprocessed, TokamakParams, TokamakProof, TokamakVerifyingKey};
