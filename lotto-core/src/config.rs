use crate::error::{LottoError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    pub settlement_policy: SettlementPolicy,
    pub timezone: DrawTimezone,
    /// Seed for winning-number generation. Unset means OS-seeded randomness.
    pub seed: Option<u64>,
    /// Pins "today" instead of reading the clock.
    pub today: Option<NaiveDate>,
}

/// What a draw does with tickets already settled by an earlier draw on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementPolicy {
    /// Only pending tickets are settled; the first draw for a date is final.
    PendingOnly,
    /// Every ticket for the date is re-evaluated; the last draw wins.
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawTimezone {
    Utc,
    Local,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            settlement_policy: SettlementPolicy::PendingOnly,
            timezone: DrawTimezone::Utc,
            seed: None,
            today: None,
        }
    }
}

impl LotteryConfig {
    pub fn new(settlement_policy: SettlementPolicy) -> Self {
        Self {
            settlement_policy,
            ..Self::default()
        }
    }

    /// Deterministic setup: fixed seed and fixed date.
    pub fn deterministic(seed: u64, today: NaiveDate) -> Self {
        Self {
            seed: Some(seed),
            today: Some(today),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| LottoError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.today.is_some() && self.timezone == DrawTimezone::Local {
            return Err(LottoError::config(
                "A fixed 'today' cannot be combined with the local timezone clock",
            ));
        }

        Ok(())
    }
}

impl FromStr for SettlementPolicy {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending_only" | "pending" => Ok(SettlementPolicy::PendingOnly),
            "overwrite" => Ok(SettlementPolicy::Overwrite),
            _ => Err(LottoError::config(format!(
                "Invalid settlement policy: {}. Supported policies: pending-only, overwrite",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LotteryConfig::default();
        assert_eq!(config.settlement_policy, SettlementPolicy::PendingOnly);
        assert_eq!(config.timezone, DrawTimezone::Utc);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"settlement_policy": "overwrite", "seed": 42}"#).unwrap();

        let config = LotteryConfig::load(&path).unwrap();
        assert_eq!(config.settlement_policy, SettlementPolicy::Overwrite);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timezone, DrawTimezone::Utc);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

        LotteryConfig::deterministic(7, today).save(&path).unwrap();
        let loaded = LotteryConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.today, Some(today));
        assert_eq!(loaded.seed, Some(7));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = LotteryConfig::load_or_default(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config.settlement_policy, SettlementPolicy::PendingOnly);
    }

    #[test]
    fn test_invalid_files_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(LotteryConfig::load(&path), Err(LottoError::Config(_))));

        std::fs::write(&path, r#"{"timezone": "local", "today": "2024-01-01"}"#).unwrap();
        assert!(matches!(LotteryConfig::load(&path), Err(LottoError::Config(_))));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "pending-only".parse::<SettlementPolicy>().unwrap(),
            SettlementPolicy::PendingOnly
        );
        assert_eq!(
            "Overwrite".parse::<SettlementPolicy>().unwrap(),
            SettlementPolicy::Overwrite
        );
        assert!("sometimes".parse::<SettlementPolicy>().is_err());
    }
}
