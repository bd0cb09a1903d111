// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = parse_config(path, &contents)?;
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<Config> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(contents).context("Failed to parse YAML config")
        }
        _ => serde_json::from_str(contents).context("Failed to parse JSON config"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tiny-lb-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_yaml_config() {
        let path = scratch_file(
            "rollout.yaml",
            "strategy:\n  algorithm: rollout\n  percentage: 25\ncalls: 3\n",
        );

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.strategy, StrategyConfig::Rollout { percentage: 25 });
        assert_eq!(config.calls, 3);
        assert_eq!(config.payload, "my task");

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_load_json_config() {
        let path = scratch_file(
            "weighted.json",
            r#"{"strategy": {"algorithm": "weighted", "weights": [3, 1]}, "payload": "job"}"#,
        );

        let config = load_config(&path).await.unwrap();
        assert_eq!(
            config.strategy,
            StrategyConfig::Weighted {
                weights: vec![3, 1]
            }
        );
        assert_eq!(config.calls, 10);
        assert_eq!(config.payload, "job");

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_load_config_rejects_invalid_percentage() {
        let path = scratch_file("bad.yml", "strategy:\n  algorithm: rollout\n  percentage: 120\n");

        let err = load_config(&path).await.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_load_config_rejects_zero_weights() {
        let path = scratch_file(
            "zero.json",
            r#"{"strategy": {"algorithm": "weighted", "weights": [0, 0]}}"#,
        );

        let err = load_config(&path).await.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_load_config_rejects_weight_overflow() {
        let path = scratch_file(
            "overflow.yaml",
            "strategy:\n  algorithm: weighted\n  weights: [4294967295, 1]\n",
        );

        let err = load_config(&path).await.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/tiny-lb.yaml").await.is_err());
    }

    #[test]
    fn test_unit_variant_parses() {
        let config: Config = serde_yaml::from_str("strategy:\n  algorithm: round_robin\n").unwrap();
        assert_eq!(config.strategy, StrategyConfig::RoundRobin);
    }
}
