// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON verification-key files.
//!
//! Base-field coordinates are 48-byte hex strings, scalars 32-byte hex.
//! Tokamak G2 entries that enter the pairing negated are stored negated.
//!
//! ```json
//! {
//!   "alpha_g1": { "x": "0x…", "y": "0x…" },
//!   "beta_g2": { "x0": "0x…", "x1": "0x…", "y0": "0x…", "y1": "0x…" },
//!   "ic": [ … ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tkv_types::{G1Point, G2Point, Groth16VerifyingKey, TokamakParams, TokamakVerifyingKey};

use crate::encoding::{fq_to_hex, fr_to_hex, hex_to_fq, hex_to_fr};
use crate::error::{SdkError, SdkResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct G1Json {
    pub x: String,
    pub y: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct G2Json {
    pub x0: String,
    pub x1: String,
    pub y0: String,
    pub y1: String,
}

impl From<&G1Point> for G1Json {
    fn from(p: &G1Point) -> Self {
        Self { x: fq_to_hex(&p.x), y: fq_to_hex(&p.y) }
    }
}

impl From<&G2Point> for G2Json {
    fn from(p: &G2Point) -> Self {
        Self {
            x0: fq_to_hex(&p.x0),
            x1: fq_to_hex(&p.x1),
            y0: fq_to_hex(&p.y0),
            y1: fq_to_hex(&p.y1),
        }
    }
}

impl G1Json {
    pub fn to_point(&self) -> SdkResult<G1Point> {
        Ok(G1Point::new(hex_to_fq(&self.x)?, hex_to_fq(&self.y)?))
    }
}

impl G2Json {
    pub fn to_point(&self) -> SdkResult<G2Point> {
        Ok(G2Point {
            x0: hex_to_fq(&self.x0)?,
            x1: hex_to_fq(&self.x1)?,
            y0: hex_to_fq(&self.y0)?,
            y1: hex_to_fq(&self.y1)?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Groth16VkFile {
    pub alpha_g1: G1Json,
    pub beta_g2: G2Json,
    pub gamma_g2: G2Json,
    pub delta_g2: G2Json,
    /// ic\[0\] = constant term, ic\[1..\] = public signal coefficients
    pub ic: Vec<G1Json>,
}

impl From<&Groth16VerifyingKey> for Groth16VkFile {
    fn from(vk: &Groth16VerifyingKey) -> Self {
        Self {
            alpha_g1: (&vk.alpha_g1).into(),
            beta_g2: (&vk.beta_g2).into(),
            gamma_g2: (&vk.gamma_g2).into(),
            delta_g2: (&vk.delta_g2).into(),
            ic: vk.ic.iter().map(G1Json::from).collect(),
        }
    }
}

impl Groth16VkFile {
    pub fn to_key(&self) -> SdkResult<Groth16VerifyingKey> {
        Ok(Groth16VerifyingKey {
            alpha_g1: self.alpha_g1.to_point()?,
            beta_g2: self.beta_g2.to_point()?,
            gamma_g2: self.gamma_g2.to_point()?,
            delta_g2: self.delta_g2.to_point()?,
            ic: self.ic.iter().map(G1Json::to_point).collect::<SdkResult<_>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokamakVkFile {
    pub n: u64,
    pub m_i: u64,
    pub l_pub: usize,
    /// Overrides the arkworks root of unity when the setup used another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega_m_i: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega_l_pub: Option<String>,
    pub one_g1: G1Json,
    pub x_g1: G1Json,
    pub y_g1: G1Json,
    pub lagrange_kl: G1Json,
    pub one_g2: G2Json,
    pub alpha_g2: G2Json,
    pub alpha2_g2: G2Json,
    pub alpha3_g2: G2Json,
    pub alpha4_g2: G2Json,
    pub neg_gamma_g2: G2Json,
    pub neg_eta_g2: G2Json,
    pub neg_delta_g2: G2Json,
    pub neg_x_g2: G2Json,
    pub neg_y_g2: G2Json,
}

impl From<&TokamakVerifyingKey> for TokamakVkFile {
    fn from(vk: &TokamakVerifyingKey) -> Self {
        let p = &vk.params;
        Self {
            n: p.n,
            m_i: p.m_i,
            l_pub: p.l_pub,
            omega_m_i: Some(fr_to_hex(&p.omega_m_i)),
            omega_l_pub: Some(fr_to_hex(&p.omega_l_pub)),
            one_g1: (&vk.one_g1).into(),
            x_g1: (&vk.x_g1).into(),
            y_g1: (&vk.y_g1).into(),
            lagrange_kl: (&vk.lagrange_kl).into(),
            one_g2: (&vk.one_g2).into(),
            alpha_g2: (&vk.alpha_g2).into(),
            alpha2_g2: (&vk.alpha2_g2).into(),
            alpha3_g2: (&vk.alpha3_g2).into(),
            alpha4_g2: (&vk.alpha4_g2).into(),
            neg_gamma_g2: (&vk.neg_gamma_g2).into(),
            neg_eta_g2: (&vk.neg_eta_g2).into(),
            neg_delta_g2: (&vk.neg_delta_g2).into(),
            neg_x_g2: (&vk.neg_x_g2).into(),
            neg_y_g2: (&vk.neg_y_g2).into(),
        }
    }
}

impl TokamakVkFile {
    fn params(&self) -> SdkResult<TokamakParams> {
        let derived = TokamakParams::new(self.n, self.m_i, self.l_pub).ok_or_else(|| {
            SdkError::Config(format!(
                "domain sizes n={}, m_i={}, l_pub={} must be powers of two",
                self.n, self.m_i, self.l_pub
            ))
        })?;
        let omega_m_i = match &self.omega_m_i {
            Some(s) => hex_to_fr(s)?,
            None => derived.omega_m_i,
        };
        let omega_l_pub = match &self.omega_l_pub {
            Some(s) => hex_to_fr(s)?,
            None => derived.omega_l_pub,
        };
        let params = TokamakParams::with_roots(self.n, self.m_i, self.l_pub, omega_m_i, omega_l_pub);
        if !params.has_primitive_roots() {
            return Err(SdkError::Config(format!(
                "omega_m_i/omega_l_pub must be primitive {}th/{}th roots of unity",
                self.m_i, self.l_pub
            )));
        }
        Ok(params)
    }

    pub fn to_key(&self) -> SdkResult<TokamakVerifyingKey> {
        Ok(TokamakVerifyingKey {
            params: self.params()?,
            one_g1: self.one_g1.to_point()?,
            x_g1: self.x_g1.to_point()?,
            y_g1: self.y_g1.to_point()?,
            lagrange_kl: self.lagrange_kl.to_point()?,
            one_g2: self.one_g2.to_point()?,
            alpha_g2: self.alpha_g2.to_point()?,
            alpha2_g2: self.alpha2_g2.to_point()?,
            alpha3_g2: self.alpha3_g2.to_point()?,
            alpha4_g2: self.alpha4_g2.to_point()?,
            neg_gamma_g2: self.neg_gamma_g2.to_point()?,
            neg_eta_g2: self.neg_eta_g2.to_point()?,
            neg_delta_g2: self.neg_delta_g2.to_point()?,
            neg_x_g2: self.neg_x_g2.to_point()?,
            neg_y_g2: self.neg_y_g2.to_point()?,
        })
    }
}

pub fn load_groth16_vk(path: &Path) -> SdkResult<Groth16VerifyingKey> {
    let file: Groth16VkFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    file.to_key()
}

pub fn save_groth16_vk(path: &Path, vk: &Groth16VerifyingKey) -> SdkResult<()> {
    fs::write(path, serde_json::to_string_pretty(&Groth16VkFile::from(vk))?)?;
    Ok(())
}

pub fn load_tokamak_vk(path: &Path) -> SdkResult<TokamakVerifyingKey> {
    let file: TokamakVkFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    file.to_key()
}

pub fn save_tokamak_vk(path: &Path, vk: &TokamakVerifyingKey) -> SdkResult<()> {
    fs::write(path, serde_json::to_string_pretty(&TokamakVkFile::from(vk))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};

    fn g1(s: u64) -> G1Point {
        G1Point::from(&(G1Projective::generator() * Fr::from(s)).into_affine())
    }

    fn tokamak_key() -> TokamakVerifyingKey {
        let g2 = G2Point::from(&G2Affine::generator());
        TokamakVerifyingKey {
            params: TokamakParams::new(4096, 512, 64).unwrap(),
            one_g1: G1Point::from(&G1Affine::generator()),
            x_g1: g1(2),
            y_g1: g1(3),
            lagrange_kl: g1(4),
            one_g2: g2,
            alpha_g2: g2,
            alpha2_g2: g2,
            alpha3_g2: g2,
            alpha4_g2: g2,
            neg_gamma_g2: g2,
            neg_eta_g2: g2,
            neg_delta_g2: g2,
            neg_x_g2: g2,
            neg_y_g2: g2,
        }
    }

    #[test]
    fn groth16_file_roundtrip() {
        let g2 = G2Point::from(&G2Affine::generator());
        let vk = Groth16VerifyingKey {
            alpha_g1: g1(5),
            beta_g2: g2,
            gamma_g2: g2,
            delta_g2: g2,
            ic: vec![g1(1), g1(2), G1Point::IDENTITY],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vk.json");
        save_groth16_vk(&path, &vk).unwrap();
        assert_eq!(load_groth16_vk(&path).unwrap(), vk);
    }

    #[test]
    fn tokamak_file_roundtrip() {
        let vk = tokamak_key();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokamak.json");
        save_tokamak_vk(&path, &vk).unwrap();
        assert_eq!(load_tokamak_vk(&path).unwrap(), vk);
    }

    #[test]
    fn tokamak_roots_default_to_arkworks() {
        let vk = tokamak_key();
        let mut file = TokamakVkFile::from(&vk);
        file.omega_m_i = None;
        file.omega_l_pub = None;
        assert_eq!(file.to_key().unwrap().params, vk.params);

        file.l_pub = 60;
        assert!(matches!(file.to_key(), Err(SdkError::Config(_))));
    }

    #[test]
    fn tokamak_rejects_non_primitive_roots() {
        let vk = tokamak_key();
        let mut file = TokamakVkFile::from(&vk);
        file.omega_m_i = Some(fr_to_hex(&Fr::from(0u64)));
        assert!(matches!(file.to_key(), Err(SdkError::Config(_))));

        let mut file = TokamakVkFile::from(&vk);
        file.omega_l_pub = Some(fr_to_hex(&Fr::from(1u64)));
        assert!(matches!(file.to_key(), Err(SdkError::Config(_))));

        // a 512th root where a 64th root is expected
        let mut file = TokamakVkFile::from(&vk);
        file.omega_l_pub = Some(fr_to_hex(&vk.params.omega_m_i));
        assert!(matches!(file.to_key(), Err(SdkError::Config(_))));
    }

    #[test]
    fn rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"alpha_g1\": 1 }").unwrap();
        assert!(matches!(load_groth16_vk(&path), Err(SdkError::Json(_))));
        assert!(matches!(load_groth16_vk(&dir.path().join("missing.json")), Err(SdkError::Io(_))));
    }
}
