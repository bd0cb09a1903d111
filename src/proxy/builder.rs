// ────────────────────────────────
// src/proxy/builder.rs
// ────────────────────────────────
use super::proxy::Proxy;
use crate::config::ConfigError;
use crate::strategy::Strategy;

/// Assembles a [`Proxy`] step by step.
pub struct ProxyBuilder<T, S> {
    candidates: Vec<T>,
    strategy: Option<S>,
}

impl<T, S> ProxyBuilder<T, S> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            strategy: None,
        }
    }

    pub fn candidate(mut self, candidate: T) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn candidates(mut self, candidates: impl IntoIterator<Item = T>) -> Self {
        self.candidates.extend(candidates);
        self
    }

    pub fn with_strategy(mut self, strategy: S) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

impl<T, S: Strategy<T>> ProxyBuilder<T, S> {
    /// Fails when no strategy was set or no candidate was added.
    pub fn build(self) -> Result<Proxy<T, S>, ConfigError> {
        let strategy = self.strategy.ok_or(ConfigError::MissingStrategy)?;
        Proxy::new(self.candidates, strategy)
    }
}

impl<T, S> Default for ProxyBuilder<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Strategy<T>> Proxy<T, S> {
    pub fn builder() -> ProxyBuilder<T, S> {
        ProxyBuilder::new()
    }
}
