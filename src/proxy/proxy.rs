// ────────────────────────────────
// src/proxy/proxy.rs
// Select-then-forward facade over a fixed set of candidates
// ────────────────────────────────

use crate::config::ConfigError;
use crate::strategy::Strategy;
use crate::target::{Block, Invocation, Target, UnsupportedOperation};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Forwards every call to one candidate chosen by `S`.
///
/// The proxy keeps nothing but the candidates and the strategy. Errors from
/// either collaborator come back to the caller exactly as they were raised.
pub struct Proxy<T, S> {
    candidates: Vec<T>,
    strategy: S,
}

impl<T, S: Strategy<T>> Proxy<T, S> {
    pub fn new(candidates: Vec<T>, strategy: S) -> Result<Self, ConfigError> {
        if candidates.is_empty() {
            return Err(ConfigError::NoCandidates);
        }

        debug!(
            candidates = candidates.len(),
            strategy = strategy.name(),
            "load balancer ready"
        );

        Ok(Self {
            candidates,
            strategy,
        })
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Ask the strategy for a candidate. Runs on every call, nothing is cached.
    pub fn select(&self) -> anyhow::Result<&T> {
        let chosen = self.strategy.select(&self.candidates)?;

        let index = self
            .candidates
            .iter()
            .position(|candidate| std::ptr::eq(candidate, chosen))
            .ok_or(ForeignCandidate {
                strategy: self.strategy.name(),
            })?;

        debug!(strategy = self.strategy.name(), index, "selected candidate");
        Ok(chosen)
    }
}

impl<T: Target, S: Strategy<T>> Proxy<T, S> {
    pub fn invoke(&self, operation: &str, args: Vec<Value>) -> anyhow::Result<Value> {
        self.forward(Invocation::new(operation, args))
    }

    pub fn invoke_with_block<'a>(
        &self,
        operation: &'a str,
        args: Vec<Value>,
        block: Block<'a>,
    ) -> anyhow::Result<Value> {
        self.forward(Invocation::new(operation, args).with_block(block))
    }

    /// Forward `invocation` to the selected candidate. The first pick is
    /// final: if it lacks the operation, no other candidate is tried.
    pub fn forward(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        let target = self.select()?;

        if !target.responds_to(invocation.operation) {
            return Err(UnsupportedOperation::new(invocation.operation, target.type_name()).into());
        }

        debug!(
            operation = invocation.operation,
            target = target.type_name(),
            "forwarding call"
        );
        target.call(invocation)
    }
}

/// Proxies are targets too, so they nest.
impl<T: Target, S: Strategy<T>> Target for Proxy<T, S> {
    fn responds_to(&self, operation: &str) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.responds_to(operation))
    }

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        self.forward(invocation)
    }
}

impl<T, S: Strategy<T>> fmt::Debug for Proxy<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("candidates", &self.candidates.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("strategy {strategy} returned a value that is not one of the candidates")]
pub struct ForeignCandidate {
    pub strategy: &'static str,
}
