// src/metrics/collector.rs
use crate::strategy::Strategy;
use anyhow::Result;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

pub struct MetricsRegistry {
    registry: Registry,
    collector: Arc<MetricsCollector>,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let collector = Arc::new(MetricsCollector::new(&registry)?);

        Ok(Self {
            registry,
            collector,
        })
    }

    pub fn collector(&self) -> Arc<MetricsCollector> {
        self.collector.clone()
    }

    /// Prometheus text exposition of everything registered.
    pub fn gather(&self) -> Vec<u8> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::warn!("Failed to encode metrics: {}", e);
        }
        buffer
    }
}

pub struct MetricsCollector {
    pub selections_total: IntCounterVec,
    pub selection_failures_total: IntCounterVec,
}

impl MetricsCollector {
    pub fn new(registry: &Registry) -> Result<Self> {
        let selections_total = IntCounterVec::new(
            Opts::new(
                "tiny_lb_selections_total",
                "Candidates picked by the selection strategy",
            ),
            &["strategy", "candidate"],
        )?;
        registry.register(Box::new(selections_total.clone()))?;

        let selection_failures_total = IntCounterVec::new(
            Opts::new(
                "tiny_lb_selection_failures_total",
                "Selections that returned an error",
            ),
            &["strategy"],
        )?;
        registry.register(Box::new(selection_failures_total.clone()))?;

        Ok(Self {
            selections_total,
            selection_failures_total,
        })
    }

    pub fn record_selection(&self, strategy: &str, candidate: &str) {
        self.selections_total
            .with_label_values(&[strategy, candidate])
            .inc();
    }

    pub fn record_failure(&self, strategy: &str) {
        self.selection_failures_total
            .with_label_values(&[strategy])
            .inc();
    }

    pub fn selections(&self, strategy: &str, candidate: &str) -> u64 {
        self.selections_total
            .with_label_values(&[strategy, candidate])
            .get()
    }

    pub fn failures(&self, strategy: &str) -> u64 {
        self.selection_failures_total
            .with_label_values(&[strategy])
            .get()
    }
}

/// Wraps a strategy and counts its decisions per candidate index.
pub struct Instrumented<S> {
    inner: S,
    metrics: Arc<MetricsCollector>,
}

impl<S> Instrumented<S> {
    pub fn new(inner: S, metrics: Arc<MetricsCollector>) -> Self {
        Self { inner, metrics }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<T, S: Strategy<T>> Strategy<T> for Instrumented<S> {
    fn select<'a>(&self, candidates: &'a [T]) -> Result<&'a T> {
        match self.inner.select(candidates) {
            Ok(chosen) => {
                let candidate = candidates
                    .iter()
                    .position(|c| std::ptr::eq(c, chosen))
                    .map(|index| index.to_string())
                    .unwrap_or_else(|| "foreign".to_string());
                self.metrics.record_selection(self.inner.name(), &candidate);
                Ok(chosen)
            }
            Err(e) => {
                self.metrics.record_failure(self.inner.name());
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
