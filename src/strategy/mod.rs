// src/strategy/mod.rs
mod algorithm;
mod pinned;
mod random;
mod rollout;
mod round_robin;
mod weighted;

pub use algorithm::{SelectionError, Strategy};
pub use pinned::Pinned;
pub use random::RandomChoice;
pub use rollout::Rollout;
pub use round_robin::RoundRobin;
pub use weighted::Weighted;

use crate::config::{ConfigError, StrategyConfig};

/// Build the strategy described by `config`.
pub fn create_strategy<T>(config: &StrategyConfig) -> Result<Box<dyn Strategy<T>>, ConfigError> {
    let strategy: Box<dyn Strategy<T>> = match config {
        StrategyConfig::Rollout { percentage } => Box::new(Rollout::new(*percentage)?),
        StrategyConfig::Pinned { index } => Box::new(Pinned::new(*index)),
        StrategyConfig::RoundRobin => Box::new(RoundRobin::new()),
        StrategyConfig::Random => Box::new(RandomChoice::new()),
        StrategyConfig::Weighted { weights } => Box::new(
            Weighted::new(weights.clone()).map_err(|e| ConfigError::Invalid(e.to_string()))?,
        ),
    };

    tracing::debug!(strategy = strategy.name(), "created selection strategy");
    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_strategy_names() {
        let cases = [
            (StrategyConfig::Rollout { percentage: 10 }, "rollout"),
            (StrategyConfig::Pinned { index: 1 }, "pinned"),
            (StrategyConfig::RoundRobin, "round_robin"),
            (StrategyConfig::Random, "random"),
            (StrategyConfig::Weighted { weights: vec![1, 2] }, "weighted"),
        ];

        for (config, name) in cases {
            let strategy = create_strategy::<u8>(&config).unwrap();
            assert_eq!(strategy.name(), name);
        }
    }

    #[test]
    fn test_create_strategy_rejects_invalid() {
        assert!(create_strategy::<u8>(&StrategyConfig::Rollout { percentage: 150 }).is_err());
        assert!(create_strategy::<u8>(&StrategyConfig::Weighted { weights: vec![0] }).is_err());
        assert!(create_strategy::<u8>(&StrategyConfig::Weighted {
            weights: vec![3_000_000_000, 3_000_000_000]
        })
        .is_err());
    }
}
