// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use tkv_core::CircuitId;
use tkv_sdk::vk_file::{load_groth16_vk, load_tokamak_vk};

use crate::output;

pub fn run(vk: &Path, tokamak: bool) -> Result<()> {
    let context = || format!("cannot load verification key from {}", vk.display());
    let (scheme, id) = if tokamak {
        let key = load_tokamak_vk(vk).with_context(context)?;
        ("tokamak", CircuitId::of_tokamak(&key))
    } else {
        let key = load_groth16_vk(vk).with_context(context)?;
        ("groth16", CircuitId::of_groth16(&key)?)
    };

    if output::is_json() {
        output::json_output(serde_json::json!({ "scheme": scheme, "circuit_id": id.to_string() }));
    } else {
        output::label("scheme", scheme);
        output::label("circuit_id", &id.to_string());
    }
    Ok(())
}
