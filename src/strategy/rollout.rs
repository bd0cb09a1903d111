// src/strategy/rollout.rs
use super::{SelectionError, Strategy};
use crate::config::ConfigError;
use rand::Rng;

/// Percentage-based two-way split.
///
/// Candidates are read positionally: index 0 is the primary service and
/// index 1 the one being rolled out. Each call draws a number in `1..=100`
/// and goes to the secondary when the draw is at most `percentage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollout {
    percentage: u8,
}

impl Rollout {
    pub fn new(percentage: u8) -> Result<Self, ConfigError> {
        if percentage > 100 {
            return Err(ConfigError::Invalid(format!(
                "rollout percentage must be within 0..=100, got {}",
                percentage
            )));
        }
        Ok(Self { percentage })
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    fn routes_to_secondary(&self, draw: u8) -> bool {
        draw <= self.percentage
    }
}

impl<T> Strategy<T> for Rollout {
    fn select<'a>(&self, candidates: &'a [T]) -> anyhow::Result<&'a T> {
        match candidates {
            [primary, secondary, ..] => {
                let draw = rand::thread_rng().gen_range(1..=100u8);
                if self.routes_to_secondary(draw) {
                    Ok(secondary)
                } else {
                    Ok(primary)
                }
            }
            _ => Err(SelectionError::NotEnoughCandidates {
                strategy: "rollout",
                needed: 2,
                len: candidates.len(),
            }
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "rollout"
    }
}
