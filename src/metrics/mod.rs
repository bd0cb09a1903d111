// src/metrics/mod.rs
mod collector;

pub use collector::{Instrumented, MetricsCollector, MetricsRegistry};
