// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use tkv_sdk::config::{config_path, load_config, save_config, ALLOWED_KEYS};

use crate::output;

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut config = load_config()?;
    config.set(key, value)?;
    save_config(&config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let config = load_config()?;
    let entries = config.entries();

    if output::is_json() {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.map_or(serde_json::Value::Null, Into::into)))
            .collect();
        output::json_output(serde_json::Value::Object(map));
    } else {
        output::label("config", &config_path()?.display().to_string());
        for (key, value) in entries {
            output::label(key, value.as_deref().unwrap_or("(unset)"));
        }
    }
    Ok(())
}
