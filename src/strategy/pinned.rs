// src/strategy/pinned.rs
use super::{SelectionError, Strategy};

/// Always the candidate at a fixed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pinned {
    index: usize,
}

impl Pinned {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn primary() -> Self {
        Self::new(0)
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Strategy<T> for Pinned {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        candidates.get(self.index).ok_or_else(|| {
            SelectionError::IndexOutOfRange {
                index: self.index,
                len: candidates.len(),
            }
            .into()
        })
    }

    fn name(&self) -> &'static str {
        "pinned"
    }
}
