// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON calldata files consumed by the CLI.
//!
//! Every entry is a hex string in the exact wire layout, so a file can be
//! replayed against the verifier without re-encoding.

use std::fs;
use std::path::Path;

use ark_bls12_381::Fr;
use serde::{Deserialize, Serialize};
use tkv_types::{Preprocessed, TokamakProof, Word};

use crate::encoding::{hex_to_u128, hex_to_words, u128_to_hex, words_to_hex};
use crate::error::SdkResult;
use crate::serialize::{encode_preprocessed, encode_scalars, encode_tokamak_proof, Groth16Calldata};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Groth16CalldataFile {
    pub p_a: Vec<String>,
    pub p_b: Vec<String>,
    pub p_c: Vec<String>,
    pub public_signals: Vec<String>,
}

/// Decoded Groth16 calldata; lengths are left for the verifier to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groth16Words {
    pub p_a: Vec<Word>,
    pub p_b: Vec<Word>,
    pub p_c: Vec<Word>,
    pub public_signals: Vec<Word>,
}

impl From<&Groth16Calldata> for Groth16CalldataFile {
    fn from(c: &Groth16Calldata) -> Self {
        Self {
            p_a: words_to_hex(&c.p_a),
            p_b: words_to_hex(&c.p_b),
            p_c: words_to_hex(&c.p_c),
            public_signals: words_to_hex(&c.public_signals),
        }
    }
}

impl Groth16CalldataFile {
    pub fn to_words(&self) -> SdkResult<Groth16Words> {
        Ok(Groth16Words {
            p_a: hex_to_words(&self.p_a)?,
            p_b: hex_to_words(&self.p_b)?,
            p_c: hex_to_words(&self.p_c)?,
            public_signals: hex_to_words(&self.public_signals)?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokamakCalldataFile {
    pub proof_part1: Vec<String>,
    pub proof_part2: Vec<String>,
    pub preprocessed_part1: Vec<String>,
    pub preprocessed_part2: Vec<String>,
    pub public_inputs: Vec<String>,
    /// Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smax: Option<u64>,
}

/// Decoded Tokamak calldata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokamakWords {
    pub proof_part1: Vec<u128>,
    pub proof_part2: Vec<Word>,
    pub preprocessed_part1: Vec<u128>,
    pub preprocessed_part2: Vec<Word>,
    pub public_inputs: Vec<Word>,
    pub smax: Option<u64>,
}

impl TokamakWords {
    pub fn encode(
        proof: &TokamakProof,
        preprocessed: &Preprocessed,
        public_inputs: &[Fr],
        smax: u64,
    ) -> Self {
        let (proof_part1, proof_part2) = encode_tokamak_proof(proof);
        let (preprocessed_part1, preprocessed_part2) = encode_preprocessed(preprocessed);
        Self {
            proof_part1,
            proof_part2,
            preprocessed_part1,
            preprocessed_part2,
            public_inputs: encode_scalars(public_inputs),
            smax: Some(smax),
        }
    }
}

impl From<&TokamakWords> for TokamakCalldataFile {
    fn from(w: &TokamakWords) -> Self {
        Self {
            proof_part1: w.proof_part1.iter().copied().map(u128_to_hex).collect(),
            proof_part2: words_to_hex(&w.proof_part2),
            preprocessed_part1: w.preprocessed_part1.iter().copied().map(u128_to_hex).collect(),
            preprocessed_part2: words_to_hex(&w.preprocessed_part2),
            public_inputs: words_to_hex(&w.public_inputs),
            smax: w.smax,
        }
    }
}

fn limbs(values: &[String]) -> SdkResult<Vec<u128>> {
    values.iter().map(|s| hex_to_u128(s)).collect()
}

impl TokamakCalldataFile {
    pub fn to_words(&self) -> SdkResult<TokamakWords> {
        Ok(TokamakWords {
            proof_part1: limbs(&self.proof_part1)?,
            proof_part2: hex_to_words(&self.proof_part2)?,
            preprocessed_part1: limbs(&self.preprocessed_part1)?,
            preprocessed_part2: hex_to_words(&self.preprocessed_part2)?,
            public_inputs: hex_to_words(&self.public_inputs)?,
            smax: self.smax,
        })
    }
}

pub fn load_groth16_calldata(path: &Path) -> SdkResult<Groth16Words> {
    let file: Groth16CalldataFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    file.to_words()
}

pub fn save_groth16_calldata(path: &Path, calldata: &Groth16Calldata) -> SdkResult<()> {
    fs::write(path, serde_json::to_string_pretty(&Groth16CalldataFile::from(calldata))?)?;
    Ok(())
}

pub fn load_tokamak_calldata(path: &Path) -> SdkResult<TokamakWords> {
    let file: TokamakCalldataFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    file.to_words()
}

pub fn save_tokamak_calldata(path: &Path, calldata: &TokamakWords) -> SdkResult<()> {
    fs::write(path, serde_json::to_string_pretty(&TokamakCalldataFile::from(calldata))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkv_types::limbs::word_from_u64;

    #[test]
    fn groth16_file_roundtrip() {
        let calldata = Groth16Calldata {
            p_a: [word_from_u64(1); 4],
            p_b: [word_from_u64(2); 8],
            p_c: [word_from_u64(3); 4],
            public_signals: vec![word_from_u64(4); 33],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.json");
        save_groth16_calldata(&path, &calldata).unwrap();

        let words = load_groth16_calldata(&path).unwrap();
        assert_eq!(words.p_b, calldata.p_b.to_vec());
        assert_eq!(words.public_signals.len(), 33);
    }

    #[test]
    fn tokamak_file_keeps_lengths() {
        let words = TokamakWords {
            proof_part1: (0..39).collect(),
            proof_part2: vec![word_from_u64(9); 42],
            preprocessed_part1: vec![1, 2, 3, 4],
            preprocessed_part2: vec![word_from_u64(5); 4],
            public_inputs: Vec::new(),
            smax: None,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokamak.json");
        save_tokamak_calldata(&path, &words).unwrap();
        assert_eq!(load_tokamak_calldata(&path).unwrap(), words);
    }
}
