// src/config/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("load balancer needs at least one candidate")]
    NoCandidates,

    #[error("load balancer needs a selection strategy")]
    MissingStrategy,

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Number of calls the demo forwards.
    #[serde(default = "default_calls")]
    pub calls: usize,

    #[serde(default = "default_payload")]
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum StrategyConfig {
    Rollout { percentage: u8 },
    Pinned { index: usize },
    RoundRobin,
    Random,
    Weighted { weights: Vec<u32> },
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Rollout { percentage: 10 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyConfig::default(),
            calls: default_calls(),
            payload: default_payload(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.strategy {
            StrategyConfig::Rollout { percentage } if *percentage > 100 => {
                Err(ConfigError::Invalid(format!(
                    "rollout percentage must be within 0..=100, got {}",
                    percentage
                )))
            }
            StrategyConfig::Weighted { weights } => {
                let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
                if total == 0 {
                    Err(ConfigError::Invalid(
                        "weighted strategy needs a non-zero weight".to_string(),
                    ))
                } else if total > u64::from(u32::MAX) {
                    Err(ConfigError::Invalid(format!(
                        "total weight {} exceeds {}",
                        total,
                        u32::MAX
                    )))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

impl StrategyConfig {
    /// Check the strategy against the number of candidates it will select
    /// from, so a mismatch surfaces before the first forwarded call.
    pub fn check_candidates(&self, len: usize) -> Result<(), ConfigError> {
        match self {
            StrategyConfig::Rollout { .. } if len < 2 => Err(ConfigError::Invalid(format!(
                "rollout needs 2 candidates, got {}",
                len
            ))),
            StrategyConfig::Pinned { index } if *index >= len => {
                Err(ConfigError::Invalid(format!(
                    "pinned index {} out of range for {} candidates",
                    index, len
                )))
            }
            StrategyConfig::Weighted { weights } if weights.len() != len => {
                Err(ConfigError::Invalid(format!(
                    "{} weights configured for {} candidates",
                    weights.len(),
                    len
                )))
            }
            _ => Ok(()),
        }
    }
}

fn default_calls() -> usize {
    10
}

fn default_payload() -> String {
    "my task".to_string()
}
