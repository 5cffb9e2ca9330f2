// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! tkv-core: Groth16 and Tokamak zk-SNARK verification over BLS12-381

pub mod aggregate;
pub mod backend;
pub mod decode;
pub mod error;
pub mod field;
pub mod groth16;
pub mod ic_source;
pub mod pairing;
pub mod registry;
pub mod tokamak;
pub mod transcript;

pub use aggregate::{Aggregates, Challenges, Evaluations};
pub use backend::{Bls12381, CurveBackend};
pub use error::{VerifierError, VerifyResult};
pub use groth16::{is_valid_groth16, verify_groth16, verify_groth16_calldata};
pub use ic_source::{IcSource, InMemoryIcSource, PagedIcSource};
pub use registry::{CircuitId, Groth16Family, TreeSize, VerifierRegistry};
pub use tokamak::{derive_challenges, is_valid_tokamak, verify_decoded, verify_tokamak, TokamakCalldata};
pub use transcript::Transcript;
