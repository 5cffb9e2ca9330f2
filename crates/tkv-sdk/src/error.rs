// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for SDK file and encoding operations.

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("invalid hex in {context}: {reason}")]
    Hex { context: String, reason: String },

    #[error("{context}: value is not a canonical field element")]
    NotInField { context: String },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
