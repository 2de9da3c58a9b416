use std::path::Path;

use thiserror::Error;

const MS_PER_HOUR: i64 = 3_600_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Ranking tunables. Every field has a default, so a partial JSON
/// override fills the rest from `v0`.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    pub hero: HeroConfig,
    pub viral: ViralConfig,
    pub relevance: RelevanceConfig,
    pub limits: Limits,
}

/// Attention-velocity weights for lead-story selection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Articles younger than this can only lead through the fallback path.
    pub lockout_ms: i64,
    pub like_exponent: f64,
    pub age_damping: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            lockout_ms: MS_PER_HOUR,
            like_exponent: 1.2,
            age_damping: 0.8,
        }
    }
}

/// Recency/engagement decay for trending, grid and vault notoriety.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViralConfig {
    pub min_age_hours: f64,
    pub age_offset_hours: f64,
    pub velocity_exponent: f64,
    pub breaking_window_ms: i64,
    pub breaking_boost: f64,
}

impl Default for ViralConfig {
    fn default() -> Self {
        Self {
            min_age_hours: 0.1,
            age_offset_hours: 2.0,
            velocity_exponent: 1.5,
            breaking_window_ms: 2 * MS_PER_HOUR,
            breaking_boost: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    pub interest_weight: f64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self { interest_weight: 2.0 }
    }
}

/// Size cut-offs. Items past a cap are passed through in input order
/// without being scored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_candidates: usize,
    pub trending_slots: usize,
    pub vault_sort_cap: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_candidates: 500,
            trending_slots: 3,
            vault_sort_cap: 1000,
        }
    }
}

impl CurationConfig {
    pub fn v0() -> Self {
        Self::default()
    }

    /// Parse a JSON override. Missing fields keep their `v0` values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: CurationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero.lockout_ms <= 0 {
            return Err(invalid("hero.lockout_ms", "must be positive"));
        }
        finite_non_negative("hero.like_exponent", self.hero.like_exponent)?;
        finite_non_negative("hero.age_damping", self.hero.age_damping)?;

        if !(self.viral.min_age_hours.is_finite() && self.viral.min_age_hours > 0.0) {
            return Err(invalid("viral.min_age_hours", "must be finite and positive"));
        }
        finite_non_negative("viral.age_offset_hours", self.viral.age_offset_hours)?;
        finite_non_negative("viral.velocity_exponent", self.viral.velocity_exponent)?;
        non_negative_ms("viral.breaking_window_ms", self.viral.breaking_window_ms)?;
        finite_non_negative("viral.breaking_boost", self.viral.breaking_boost)?;

        finite_non_negative("relevance.interest_weight", self.relevance.interest_weight)?;

        if self.limits.max_candidates == 0 {
            return Err(invalid("limits.max_candidates", "must be at least 1"));
        }
        if self.limits.vault_sort_cap == 0 {
            return Err(invalid("limits.vault_sort_cap", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn finite_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(
            field,
            &format!("expected a finite non-negative number, got {value}"),
        ))
    }
}

fn non_negative_ms(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("expected a non-negative duration, got {value}")))
    }
}
