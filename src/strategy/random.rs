// src/strategy/random.rs
use super::{SelectionError, Strategy};
use rand::seq::SliceRandom;

/// Uniformly random candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChoice;

impl RandomChoice {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Strategy<T> for RandomChoice {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        candidates
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| SelectionError::NoCandidates.into())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_within_candidates() {
        let candidates: &[u32] = &[1, 2, 3];
        for _ in 0..100 {
            let picked = RandomChoice.select(candidates).unwrap();
            assert!(candidates.contains(picked));
        }
    }

    #[test]
    fn test_random_empty() {
        assert!(Strategy::<u32>::select(&RandomChoice, &[]).is_err());
    }
}
