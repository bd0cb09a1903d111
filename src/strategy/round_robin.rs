// src/strategy/round_robin.rs
use super::{SelectionError, Strategy};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl<T> Strategy<T> for RoundRobin {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        if candidates.is_empty() {
            return Err(SelectionError::NoCandidates.into());
        }

        let index = self.counter.fetch_add(1, Ordering::Relaxed) % candidates.len();
        Ok(&candidates[index])
    }

    fn name(&self) -> &'static str {
        "round_robin"
    }
}
