use chrono::{DateTime, Utc};

use crate::article::Article;
use crate::config::HeroConfig;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Result of the lead-story score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroEligibility {
    /// Too fresh to have earned organic attention.
    Ineligible,
    /// Attention per time; always >= 0.
    Eligible(f64),
}

impl HeroEligibility {
    pub fn score(self) -> Option<f64> {
        match self {
            HeroEligibility::Ineligible => None,
            HeroEligibility::Eligible(score) => Some(score),
        }
    }

    pub fn is_eligible(self) -> bool {
        matches!(self, HeroEligibility::Eligible(_))
    }
}

/// Attention velocity: `likes^like_exponent / age_hours^age_damping`.
///
/// Likes are weighted super-linearly and age sub-linearly, so a month-old
/// article with enough engagement can still outrank yesterday's.
/// Articles younger than `lockout_ms`, or not older than `now` at all, are
/// ineligible; unliked articles score exactly 0.
pub fn attention_velocity(
    article: &Article,
    now: DateTime<Utc>,
    config: &HeroConfig,
) -> HeroEligibility {
    let age_ms = article.age_millis(now);
    // Age is a divisor below.
    if age_ms <= 0 || age_ms < config.lockout_ms {
        return HeroEligibility::Ineligible;
    }

    let likes = article.like_count();
    if likes == 0 {
        return HeroEligibility::Eligible(0.0);
    }

    let age_hours = age_ms as f64 / MS_PER_HOUR;
    let score = (likes as f64).powf(config.like_exponent) / age_hours.powf(config.age_damping);
    HeroEligibility::Eligible(score)
}
