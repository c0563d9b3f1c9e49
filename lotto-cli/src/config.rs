use anyhow::{Context, Result};
use chrono::NaiveDate;
use lotto_core::{LottoError, LotteryConfig, SettlementPolicy};
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub date: Option<String>,
    pub policy: Option<String>,
}

pub fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lotto")
}

pub fn config_path(data_dir: Option<&Path>, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => data_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(default_data_dir)
            .join("config.json"),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| LottoError::invalid_date(format!("{} ({}), expected YYYY-MM-DD", raw, e)))
        .map_err(Into::into)
}

/// Loads the config at `path` (defaults when missing) and applies `overrides`.
pub fn resolve(path: &Path, overrides: &Overrides) -> Result<LotteryConfig> {
    let mut config = LotteryConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    if let Some(date) = &overrides.date {
        config.today = Some(parse_date(date)?);
    }
    if let Some(policy) = &overrides.policy {
        config.settlement_policy = policy.parse::<SettlementPolicy>()?;
    }

    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);
    Ok(config)
}
