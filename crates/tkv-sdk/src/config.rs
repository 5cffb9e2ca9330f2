// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! CLI configuration persisted as JSON at `~/.tkv/config.json`.
//!
//! Holds default verification-key paths per circuit and the default
//! `smax`. A missing file reads as the empty configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

pub const ALLOWED_KEYS: &[&str] = &[
    "groth16_vk_16",
    "groth16_vk_32",
    "groth16_vk_64",
    "groth16_vk_128",
    "tokamak_vk",
    "smax",
];

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groth16_vk_16: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groth16_vk_32: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groth16_vk_64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groth16_vk_128: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokamak_vk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smax: Option<u64>,
}

impl CliConfig {
    /// Key-file path for a Groth16 tree of `leaves` leaves.
    pub fn groth16_vk(&self, leaves: usize) -> Option<&str> {
        match leaves {
            16 => self.groth16_vk_16.as_deref(),
            32 => self.groth16_vk_32.as_deref(),
            64 => self.groth16_vk_64.as_deref(),
            128 => self.groth16_vk_128.as_deref(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> SdkResult<()> {
        let path = Some(value.to_string());
        match key {
            "groth16_vk_16" => self.groth16_vk_16 = path,
            "groth16_vk_32" => self.groth16_vk_32 = path,
            "groth16_vk_64" => self.groth16_vk_64 = path,
            "groth16_vk_128" => self.groth16_vk_128 = path,
            "tokamak_vk" => self.tokamak_vk = path,
            "smax" => {
                let smax = value
                    .parse()
                    .map_err(|_| SdkError::Config(format!("smax must be an integer, got {value}")))?;
                self.smax = Some(smax);
            }
            _ => {
                return Err(SdkError::Config(format!(
                    "unknown config key: {key} (allowed: {})",
                    ALLOWED_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in [`ALLOWED_KEYS`] order, unset values as `None`.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("groth16_vk_16", self.groth16_vk_16.clone()),
            ("groth16_vk_32", self.groth16_vk_32.clone()),
            ("groth16_vk_64", self.groth16_vk_64.clone()),
            ("groth16_vk_128", self.groth16_vk_128.clone()),
            ("tokamak_vk", self.tokamak_vk.clone()),
            ("smax", self.smax.map(|s| s.to_string())),
        ]
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".tkv").join("config.json"))
}

pub fn load_config_from(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

pub fn save_config_to(path: &Path, config: &CliConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_config() -> Result<CliConfig> {
    load_config_from(&config_path()?)
}

pub fn save_config(config: &CliConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}
