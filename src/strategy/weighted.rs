// src/strategy/weighted.rs
use super::{SelectionError, Strategy};
use rand::distributions::{Distribution, WeightedError, WeightedIndex};

/// Weighted random candidate; `weights[i]` belongs to candidate `i`.
#[derive(Debug, Clone)]
pub struct Weighted {
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl Weighted {
    pub fn new(weights: Vec<u32>) -> Result<Self, SelectionError> {
        // WeightedIndex sums in u32 and overflows past u32::MAX
        let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        if total > u64::from(u32::MAX) {
            return Err(SelectionError::WeightOverflow { total });
        }

        let index = WeightedIndex::new(&weights).map_err(|e| match e {
            WeightedError::NoItem => SelectionError::NoCandidates,
            _ => SelectionError::ZeroWeight,
        })?;

        Ok(Self { weights, index })
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

impl<T> Strategy<T> for Weighted {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        if candidates.len() != self.weights.len() {
            return Err(SelectionError::WeightMismatch {
                weights: self.weights.len(),
                len: candidates.len(),
            }
            .into());
        }

        Ok(&candidates[self.index.sample(&mut rand::thread_rng())])
    }

    fn name(&self) -> &'static str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_rejects_zero_total() {
        assert_eq!(
            Weighted::new(vec![0, 0]).unwrap_err(),
            SelectionError::ZeroWeight
        );
        assert_eq!(
            Weighted::new(vec![]).unwrap_err(),
            SelectionError::NoCandidates
        );
    }

    #[test]
    fn test_weighted_rejects_total_past_u32() {
        assert_eq!(
            Weighted::new(vec![u32::MAX, 1]).unwrap_err(),
            SelectionError::WeightOverflow {
                total: u64::from(u32::MAX) + 1
            }
        );
        assert_eq!(
            Weighted::new(vec![3_000_000_000, 3_000_000_000]).unwrap_err(),
            SelectionError::WeightOverflow {
                total: 6_000_000_000
            }
        );
    }

    #[test]
    fn test_weighted_accepts_total_of_exactly_u32_max() {
        let weighted = Weighted::new(vec![u32::MAX - 1, 1]).unwrap();
        assert_eq!(weighted.weights(), &[u32::MAX - 1, 1]);
    }

    #[test]
    fn test_weighted_single_nonzero_weight() {
        let weighted = Weighted::new(vec![0, 5, 0]).unwrap();
        let candidates: &[&str] = &["a", "b", "c"];
        for _ in 0..100 {
            assert_eq!(*weighted.select(candidates).unwrap(), "b");
        }
    }

    #[test]
    fn test_weighted_length_mismatch() {
        let weighted = Weighted::new(vec![1, 1]).unwrap();
        let err = weighted.select(&["a"][..]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectionError>(),
            Some(&SelectionError::WeightMismatch { weights: 2, len: 1 })
        );
    }
}
