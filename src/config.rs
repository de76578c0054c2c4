use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub athletes_csv: PathBuf,
    pub regions_csv: PathBuf,
}

/// Aggregation policy knobs. The minimum-sample floors are data-quality
/// policy, configurable rather than baked into the pipelines.
#[derive(Debug, Deserialize, Clone)]
pub struct AggregationConfig {
    #[serde(default = "default_min_sample_sport")]
    pub min_sample_sport: usize,
    #[serde(default = "default_min_sample_year")]
    pub min_sample_year: usize,
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_sample_sport: default_min_sample_sport(),
            min_sample_year: default_min_sample_year(),
            suggest_limit: default_suggest_limit(),
        }
    }
}

fn default_min_sample_sport() -> usize {
    10
}
fn default_min_sample_year() -> usize {
    5
}
fn default_suggest_limit() -> usize {
    10
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.aggregation.min_sample_sport == 0 {
        anyhow::bail!("aggregation.min_sample_sport must be >= 1");
    }
    if config.aggregation.min_sample_year == 0 {
        anyhow::bail!("aggregation.min_sample_year must be >= 1");
    }
    if config.aggregation.suggest_limit == 0 {
        anyhow::bail!("aggregation.suggest_limit must be >= 1");
    }

    Ok(config)
}
