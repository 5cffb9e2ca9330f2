// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tkv_core::{verify_groth16_calldata, verify_tokamak, Bls12381, TokamakCalldata, TreeSize, VerifyResult};
use tkv_sdk::calldata::{load_groth16_calldata, load_tokamak_calldata};
use tkv_sdk::config::load_config;
use tkv_sdk::vk_file::{load_groth16_vk, load_tokamak_vk};
use tracing::debug;

use crate::output;

fn configured_groth16_vk(signals: usize) -> Result<PathBuf> {
    let size = TreeSize::from_signal_count(signals).ok_or_else(|| {
        output::fail_with_hint(
            &format!("{signals} public signals match no supported tree size"),
            "expected 33, 65, 129 or 257 signals, or pass --vk",
        )
    })?;
    let config = load_config()?;
    config.groth16_vk(size.leaves()).map(PathBuf::from).ok_or_else(|| {
        output::fail_with_hint(
            &format!("no verification key configured for {size}"),
            &format!("tkv config set groth16_vk_{} <path>", size.leaves()),
        )
    })
}

fn report(scheme: &str, result: VerifyResult<()>) -> Result<()> {
    match result {
        Ok(()) => {
            if output::is_json() {
                output::json_output(serde_json::json!({ "scheme": scheme, "valid": true }));
            } else {
                output::success(&format!("{scheme} proof valid"));
            }
            Ok(())
        }
        Err(err) => {
            if output::is_json() {
                output::json_output(serde_json::json!({
                    "scheme": scheme,
                    "valid": false,
                    "error": err.to_string(),
                    "malformed_input": err.is_malformed_input(),
                }));
            }
            Err(anyhow::anyhow!("{scheme} proof rejected: {err}"))
        }
    }
}

pub fn groth16(proof: &Path, vk: Option<&Path>) -> Result<()> {
    let words = load_groth16_calldata(proof)
        .with_context(|| format!("cannot load calldata from {}", proof.display()))?;
    let vk_path = match vk {
        Some(path) => path.to_path_buf(),
        None => configured_groth16_vk(words.public_signals.len())?,
    };
    let key = load_groth16_vk(&vk_path)
        .with_context(|| format!("cannot load verification key from {}", vk_path.display()))?;
    debug!(vk = %vk_path.display(), signals = words.public_signals.len(), "loaded groth16 key");

    let pb = output::spinner("verifying groth16 proof...");
    let result = verify_groth16_calldata(
        &Bls12381,
        &key,
        &words.p_a,
        &words.p_b,
        &words.p_c,
        &words.public_signals,
    );
    pb.finish_and_clear();
    report("groth16", result)
}

pub fn tokamak(proof: &Path, vk: Option<&Path>, smax: Option<u64>) -> Result<()> {
    let words = load_tokamak_calldata(proof)
        .with_context(|| format!("cannot load calldata from {}", proof.display()))?;
    let config = load_config()?;

    let smax = smax.or(words.smax).or(config.smax).ok_or_else(|| {
        output::fail_with_hint("smax not given", "pass --smax, add it to the calldata, or `tkv config set smax <n>`")
    })?;
    let vk_path = match vk {
        Some(path) => path.to_path_buf(),
        None => config.tokamak_vk.as_deref().map(PathBuf::from).ok_or_else(|| {
            output::fail_with_hint("no tokamak verification key", "pass --vk or `tkv config set tokamak_vk <path>`")
        })?,
    };
    let key = load_tokamak_vk(&vk_path)
        .with_context(|| format!("cannot load verification key from {}", vk_path.display()))?;
    debug!(vk = %vk_path.display(), smax, "loaded tokamak key");

    let calldata = TokamakCalldata {
        proof_part1: &words.proof_part1,
        proof_part2: &words.proof_part2,
        preprocessed_part1: &words.preprocessed_part1,
        preprocessed_part2: &words.preprocessed_part2,
        public_inputs: &words.public_inputs,
        smax,
    };
    let pb = output::spinner("verifying tokamak proof...");
    let result = verify_tokamak(&Bls12381, &key, &calldata);
    pb.finish_and_clear();
    report("tokamak", result)
}
