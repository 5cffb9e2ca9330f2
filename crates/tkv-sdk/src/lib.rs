// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # tkv-sdk
//!
//! Off-chain companion to `tkv-core`: produces the exact calldata the
//! verifiers decode, reads and writes key and calldata files, and holds
//! the CLI configuration.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports the boundary types from `tkv-types` |
//! | [`serialize`] | Arkworks → two-limb calldata encoding |
//! | [`encoding`] | Hex ↔ word, limb and `Fr` conversion |
//! | [`vk_file`] | JSON Groth16 and Tokamak verification keys |
//! | [`calldata`] | JSON calldata files |
//! | [`config`] | `~/.tkv/config.json` |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use tkv_sdk::serialize::{groth16_calldata, groth16_vk};
//! use tkv_sdk::{calldata, vk_file};
//!
//! # fn example(
//! #     vk: &ark_groth16::VerifyingKey<ark_bls12_381::Bls12_381>,
//! #     proof: &ark_groth16::Proof<ark_bls12_381::Bls12_381>,
//! #     public_inputs: &[ark_bls12_381::Fr],
//! # ) -> tkv_sdk::error::SdkResult<()> {
//! vk_file::save_groth16_vk("vk.json".as_ref(), &groth16_vk(vk))?;
//! calldata::save_groth16_calldata("proof.json".as_ref(), &groth16_calldata(proof, public_inputs))?;
//! // tkv verify-groth16 --vk vk.json --proof proof.json
//! # Ok(())
//! # }
//! ```

pub use tkv_types::{
    FqLimbs, G1Point, G2Point, Groth16Proof, Groth16VerifyingKey, Preprocessed, TokamakParams,
    TokamakProof, TokamakVerifyingKey, Word,
};

pub mod calldata;
pub mod config;
pub mod encoding;
pub mod error;
pub mod serialize;
pub mod vk_file;
