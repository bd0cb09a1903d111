// src/strategy/algorithm.rs
use std::sync::Arc;

/// Picks the candidate a call is forwarded to.
///
/// The returned reference must point into `candidates`; the proxy rejects
/// anything else. Implementations may keep internal state (counters, RNG) but
/// are called through `&self` once per forwarded call.
pub trait Strategy<T>: Send + Sync {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T, S: Strategy<T> + ?Sized> Strategy<T> for Box<S> {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        (**self).select(candidates)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T, S: Strategy<T> + ?Sized> Strategy<T> for Arc<S> {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        (**self).select(candidates)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T, S: Strategy<T> + ?Sized> Strategy<T> for &S {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        (**self).select(candidates)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no candidates to select from")]
    NoCandidates,

    #[error("candidate index {index} out of range for {len} candidates")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{strategy} needs at least {needed} candidates, got {len}")]
    NotEnoughCandidates {
        strategy: &'static str,
        needed: usize,
        len: usize,
    },

    #[error("{weights} weights configured for {len} candidates")]
    WeightMismatch { weights: usize, len: usize },

    #[error("total candidate weight is zero")]
    ZeroWeight,

    #[error("total candidate weight {total} exceeds {}", u32::MAX)]
    WeightOverflow { total: u64 },
}
