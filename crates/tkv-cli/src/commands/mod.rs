// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod challenges;
pub mod circuit_id;
pub mod config;
pub mod verify;
