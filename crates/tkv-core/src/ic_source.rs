// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Indexed access to Groth16 input-commitment (IC) points.
//!
//! Large verification keys are split over several storage pages; the
//! verifier only ever asks for `ic[i]` by global index.

use tkv_types::G1Point;

use crate::error::{VerifierError, VerifyResult};

pub trait IcSource {
    /// Number of IC points, `signals + 1`.
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> VerifyResult<G1Point>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IcSource for [G1Point] {
    fn len(&self) -> usize {
        <[G1Point]>::len(self)
    }

    fn get(&self, index: usize) -> VerifyResult<G1Point> {
        <[G1Point]>::get(self, index)
            .copied()
            .ok_or(VerifierError::IcIndexOutOfRange { index, len: <[G1Point]>::len(self) })
    }
}

impl IcSource for Vec<G1Point> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> VerifyResult<G1Point> {
        IcSource::get(self.as_slice(), index)
    }
}

/// Contiguous table held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryIcSource {
    points: Vec<G1Point>,
}

impl InMemoryIcSource {
    pub fn new(points: Vec<G1Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[G1Point] {
        &self.points
    }
}

impl IcSource for InMemoryIcSource {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn get(&self, index: usize) -> VerifyResult<G1Point> {
        IcSource::get(self.points.as_slice(), index)
    }
}

/// Table split over consecutive pages. A global index is routed to the
/// page whose cumulative range contains it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedIcSource<S = Vec<G1Point>> {
    pages: Vec<S>,
}

impl<S: IcSource> PagedIcSource<S> {
    pub fn new(pages: Vec<S>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PagedIcSource {
    /// Split `points` into pages of at most `page_size` entries.
    pub fn paginate(points: &[G1Point], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            pages: points.chunks(page_size).map(<[G1Point]>::to_vec).collect(),
        }
    }
}

impl<S: IcSource> IcSource for PagedIcSource<S> {
    fn len(&self) -> usize {
        self.pages.iter().map(IcSource::len).sum()
    }

    fn get(&self, index: usize) -> VerifyResult<G1Point> {
        let mut offset = index;
        for page in &self.pages {
            let page_len = page.len();
            if offset < page_len {
                return page.get(offset);
            }
            offset -= page_len;
        }
        Err(VerifierError::IcIndexOutOfRange { index, len: self.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkv_types::FqLimbs;

    fn points(n: usize) -> Vec<G1Point> {
        (0..n)
            .map(|i| G1Point::new(FqLimbs::new(i as u128, [0u8; 32]), FqLimbs::ZERO))
            .collect()
    }

    #[test]
    fn in_memory_bounds() {
        let src = InMemoryIcSource::new(points(3));
        assert_eq!(src.len(), 3);
        assert_eq!(src.get(2).unwrap().x.hi, 2);
        assert_eq!(
            src.get(3).unwrap_err(),
            VerifierError::IcIndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn paged_routes_by_cumulative_range() {
        let all = points(257);
        let src = PagedIcSource::new(vec![
            InMemoryIcSource::new(all[..129].to_vec()),
            InMemoryIcSource::new(all[129..].to_vec()),
        ]);
        assert_eq!(src.len(), 257);
        assert_eq!(src.get(0).unwrap().x.hi, 0);
        assert_eq!(src.get(128).unwrap().x.hi, 128);
        assert_eq!(src.get(129).unwrap().x.hi, 129);
        assert_eq!(src.get(256).unwrap().x.hi, 256);
        assert!(matches!(src.get(257), Err(VerifierError::IcIndexOutOfRange { index: 257, len: 257 })));
    }

    #[test]
    fn paginate_matches_flat_table() {
        let all = points(10);
        let src = PagedIcSource::paginate(&all, 4);
        assert_eq!(src.page_count(), 3);
        for (i, p) in all.iter().enumerate() {
            assert_eq!(src.get(i).unwrap(), *p);
        }
    }

    #[test]
    fn vec_source() {
        let all = points(2);
        assert_eq!(IcSource::len(&all), 2);
        assert!(IcSource::get(&all, 5).is_err());
        assert!(!IcSource::is_empty(&all));
    }
}
