// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Calldata decoding.
//!
//! Lengths and scalar ranges are checked here, before any curve work.
//! Base-field coordinates are passed through untouched; the backend rejects
//! non-canonical or off-curve points.

use ark_bls12_381::Fr;
use tkv_types::tokamak::{
    PREPROCESSED_PART1_LEN, PREPROCESSED_PART2_LEN, PROOF_PART1_LEN, PROOF_PART2_LEN,
    PROOF_POINT_COUNT, PROOF_SCALAR_COUNT, SMAX_VALUES,
};
use tkv_types::{
    fr_from_word, FqLimbs, G1Point, G2Point, Groth16Proof, Preprocessed, TokamakProof, Word,
};

use crate::error::{VerifierError, VerifyResult};

fn expect_len(part: &'static str, actual: usize, expected: usize) -> VerifyResult<()> {
    if actual != expected {
        return Err(VerifierError::InvalidProofLength { part, expected, actual });
    }
    Ok(())
}

fn point_at(part1: &[u128], part2: &[Word], index: usize) -> G1Point {
    let i = index * 2;
    G1Point::new(
        FqLimbs::new(part1[i], part2[i]),
        FqLimbs::new(part1[i + 1], part2[i + 1]),
    )
}

fn scalar(context: &'static str, index: usize, word: &Word) -> VerifyResult<Fr> {
    fr_from_word(word).ok_or(VerifierError::InvalidFieldElement { context, index })
}

/// Recombine a Tokamak proof from its high (`part1`) and low (`part2`)
/// coordinate halves. The four evaluations trail `part2`.
pub fn decode_tokamak_proof(part1: &[u128], part2: &[Word]) -> VerifyResult<TokamakProof> {
    expect_len("proof part1", part1.len(), PROOF_PART1_LEN)?;
    expect_len("proof part2", part2.len(), PROOF_PART2_LEN)?;

    let mut points = [G1Point::IDENTITY; PROOF_POINT_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        *point = point_at(part1, part2, i);
    }

    let mut scalars = [Fr::from(0u64); PROOF_SCALAR_COUNT];
    for (i, value) in scalars.iter_mut().enumerate() {
        *value = scalar("proof evaluation", i, &part2[PROOF_PART1_LEN + i])?;
    }

    Ok(TokamakProof::from_parts(points, scalars))
}

pub fn decode_preprocessed(part1: &[u128], part2: &[Word]) -> VerifyResult<Preprocessed> {
    expect_len("preprocessed part1", part1.len(), PREPROCESSED_PART1_LEN)?;
    expect_len("preprocessed part2", part2.len(), PREPROCESSED_PART2_LEN)?;
    Ok(Preprocessed {
        s0: point_at(part1, part2, 0),
        s1: point_at(part1, part2, 1),
    })
}

/// Every element must be a canonical scalar.
pub fn decode_public_inputs(raw: &[Word]) -> VerifyResult<Vec<Fr>> {
    raw.iter()
        .enumerate()
        .map(|(i, word)| scalar("public input", i, word))
        .collect()
}

pub fn check_smax(smax: u64) -> VerifyResult<u64> {
    if SMAX_VALUES.contains(&smax) {
        Ok(smax)
    } else {
        Err(VerifierError::InvalidSmax(smax))
    }
}

/// Public inputs of the Tokamak verifier plus its `smax` parameter.
pub fn decode_tokamak_inputs(raw: &[Word], smax: u64) -> VerifyResult<Vec<Fr>> {
    check_smax(smax)?;
    decode_public_inputs(raw)
}

fn g1_from_words(context: &'static str, words: &[Word]) -> VerifyResult<G1Point> {
    let words: &[Word; 4] = words.try_into().map_err(|_| VerifierError::InvalidProofLength {
        part: context,
        expected: 4,
        actual: words.len(),
    })?;
    G1Point::from_words(words).ok_or_else(|| padding_error(context, words))
}

/// Index of the first high word with non-zero padding.
fn padding_error(context: &'static str, words: &[Word]) -> VerifierError {
    let index = words
        .iter()
        .step_by(2)
        .position(|hi| hi[..16].iter().any(|b| *b != 0))
        .map(|i| i * 2)
        .unwrap_or(0);
    VerifierError::InvalidFieldElement { context, index }
}

/// Groth16 calldata `pA[4]`, `pB[8]`, `pC[4]`.
pub fn decode_groth16_proof(p_a: &[Word], p_b: &[Word], p_c: &[Word]) -> VerifyResult<Groth16Proof> {
    let a = g1_from_words("pA", p_a)?;
    let b_words: &[Word; 8] = p_b.try_into().map_err(|_| VerifierError::InvalidProofLength {
        part: "pB",
        expected: 8,
        actual: p_b.len(),
    })?;
    let b = G2Point::from_words(b_words).ok_or_else(|| padding_error("pB", p_b))?;
    let c = g1_from_words("pC", p_c)?;
    Ok(Groth16Proof { a, b, c })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkv_types::limbs::{r_mod_word, word_from_u64};
    use tkv_types::ZERO_WORD;

    fn proof_arrays() -> (Vec<u128>, Vec<Word>) {
        let part1: Vec<u128> = (0..PROOF_PART1_LEN as u128).collect();
        let mut part2: Vec<Word> = (0..PROOF_PART1_LEN as u64).map(|i| word_from_u64(1000 + i)).collect();
        for i in 0..PROOF_SCALAR_COUNT as u64 {
            part2.push(word_from_u64(i + 1));
        }
        (part1, part2)
    }

    #[test]
    fn recombines_coordinates_at_fixed_offsets() {
        let (part1, part2) = proof_arrays();
        let proof = decode_tokamak_proof(&part1, &part2).unwrap();

        assert_eq!(proof.u.x, FqLimbs::new(0, word_from_u64(1000)));
        assert_eq!(proof.u.y, FqLimbs::new(1, word_from_u64(1001)));
        assert_eq!(proof.q_ax.x, FqLimbs::new(10, word_from_u64(1010)));
        assert_eq!(proof.a.y, FqLimbs::new(37, word_from_u64(1037)));
        assert_eq!(proof.r1xy, Fr::from(1u64));
        assert_eq!(proof.vxy, Fr::from(4u64));
    }

    #[test]
    fn rejects_extra_element() {
        let (part1, mut part2) = proof_arrays();
        part2.push(ZERO_WORD);
        let err = decode_tokamak_proof(&part1, &part2).unwrap_err();
        assert_eq!(
            err,
            VerifierError::InvalidProofLength { part: "proof part2", expected: 42, actual: 43 }
        );

        let (mut part1, part2) = proof_arrays();
        part1.push(0);
        assert!(matches!(
            decode_tokamak_proof(&part1, &part2),
            Err(VerifierError::InvalidProofLength { part: "proof part1", .. })
        ));
    }

    #[test]
    fn rejects_out_of_field_evaluation() {
        let (part1, mut part2) = proof_arrays();
        part2[PROOF_PART1_LEN + 2] = r_mod_word();
        assert_eq!(
            decode_tokamak_proof(&part1, &part2).unwrap_err(),
            VerifierError::InvalidFieldElement { context: "proof evaluation", index: 2 }
        );
    }

    #[test]
    fn public_input_range() {
        let ok = vec![word_from_u64(5), ZERO_WORD];
        assert_eq!(decode_public_inputs(&ok).unwrap(), vec![Fr::from(5u64), Fr::from(0u64)]);

        let bad = vec![word_from_u64(5), r_mod_word()];
        assert_eq!(
            decode_public_inputs(&bad).unwrap_err(),
            VerifierError::InvalidFieldElement { context: "public input", index: 1 }
        );
    }

    #[test]
    fn smax_allow_list() {
        for smax in SMAX_VALUES {
            assert_eq!(check_smax(smax), Ok(smax));
        }
        for smax in [0, 32, 96, 4096] {
            assert_eq!(check_smax(smax), Err(VerifierError::InvalidSmax(smax)));
        }
        assert_eq!(
            decode_tokamak_inputs(&[], 100).unwrap_err(),
            VerifierError::InvalidSmax(100)
        );
    }

    #[test]
    fn preprocessed_lengths() {
        let part1 = [1u128, 2, 3, 4];
        let part2 = [word_from_u64(5), word_from_u64(6), word_from_u64(7), word_from_u64(8)];
        let pre = decode_preprocessed(&part1, &part2).unwrap();
        assert_eq!(pre.s1.x, FqLimbs::new(3, word_from_u64(7)));
        assert!(decode_preprocessed(&part1[..3], &part2).is_err());
    }

    #[test]
    fn groth16_calldata_shape() {
        let g1 = [ZERO_WORD; 4];
        let g2 = [ZERO_WORD; 8];
        let proof = decode_groth16_proof(&g1, &g2, &g1).unwrap();
        assert!(proof.a.is_identity() && proof.b.is_identity());

        assert!(matches!(
            decode_groth16_proof(&g1[..3], &g2, &g1),
            Err(VerifierError::InvalidProofLength { part: "pA", expected: 4, actual: 3 })
        ));

        let mut dirty = g2;
        dirty[4][0] = 1;
        assert_eq!(
            decode_groth16_proof(&g1, &dirty, &g1).unwrap_err(),
            VerifierError::InvalidFieldElement { context: "pB", index: 4 }
        );
    }
}
