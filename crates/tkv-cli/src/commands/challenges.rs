// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use tkv_core::decode::decode_tokamak_proof;
use tkv_core::derive_challenges;
use tkv_sdk::calldata::load_tokamak_calldata;
use tkv_sdk::encoding::fr_to_hex;

use crate::output;

pub fn run(proof: &Path) -> Result<()> {
    let words = load_tokamak_calldata(proof)
        .with_context(|| format!("cannot load calldata from {}", proof.display()))?;
    let decoded = decode_tokamak_proof(&words.proof_part1, &words.proof_part2)?;
    let ch = derive_challenges(&decoded);

    let named = [
        ("theta0", ch.theta0),
        ("theta1", ch.theta1),
        ("theta2", ch.theta2),
        ("kappa0", ch.kappa0),
        ("chi", ch.chi),
        ("zeta", ch.zeta),
        ("kappa1", ch.kappa1),
        ("kappa2", ch.kappa2),
    ];

    if output::is_json() {
        let map: serde_json::Map<String, serde_json::Value> = named
            .iter()
            .map(|(name, value)| (name.to_string(), fr_to_hex(value).into()))
            .collect();
        output::json_output(serde_json::Value::Object(map));
    } else {
        for (name, value) in &named {
            output::label(name, &fr_to_hex(value));
        }
    }
    Ok(())
}
