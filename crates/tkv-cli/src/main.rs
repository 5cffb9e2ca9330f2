// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tkv", about = "Groth16 and Tokamak zk-SNARK verifier for BLS12-381")]
struct Cli {
    /// Machine-readable output
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify Groth16 calldata (pA, pB, pC, publicSignals)
    VerifyGroth16 {
        /// Calldata JSON file
        #[arg(long)]
        proof: PathBuf,
        /// Verification key JSON; defaults to the configured key for the tree size
        #[arg(long)]
        vk: Option<PathBuf>,
    },
    /// Verify Tokamak calldata
    VerifyTokamak {
        /// Calldata JSON file
        #[arg(long)]
        proof: PathBuf,
        /// Verification key JSON; defaults to `tokamak_vk` from config
        #[arg(long)]
        vk: Option<PathBuf>,
        /// Overrides the smax stored in the calldata file
        #[arg(long)]
        smax: Option<u64>,
    },
    /// Print the Fiat-Shamir challenges of a Tokamak proof
    Challenges {
        /// Calldata JSON file
        #[arg(long)]
        proof: PathBuf,
    },
    /// Print the content-addressed id of a verification key
    CircuitId {
        /// Verification key JSON
        vk: PathBuf,
        /// Treat the key as a Tokamak key
        #[arg(long)]
        tokamak: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a config value
    Set { key: String, value: String },
    /// Show current config
    Show,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_tracing(cli.verbose);

    match cli.command {
        Cmd::VerifyGroth16 { proof, vk } => commands::verify::groth16(&proof, vk.as_deref())?,
        Cmd::VerifyTokamak { proof, vk, smax } => {
            commands::verify::tokamak(&proof, vk.as_deref(), smax)?
        }
        Cmd::Challenges { proof } => commands::challenges::run(&proof)?,
        Cmd::CircuitId { vk, tokamak } => commands::circuit_id::run(&vk, tokamak)?,
        Cmd::Config { action } => match action {
            ConfigAction::Set { key, value } => commands::config::set(&key, &value)?,
            ConfigAction::Show => commands::config::show()?,
        },
    }
    Ok(())
}
