use chrono::{DateTime, Utc};

use crate::article::Article;
use crate::config::ViralConfig;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Viral score: engagement decayed by age, boosted while breaking.
///
/// `(likes + 1) / (max(min_age, age_hours) + age_offset)^velocity_exponent`,
/// multiplied by `breaking_boost` inside the breaking window.
/// Deterministic: the same article at the same `now` always scores the same.
pub fn viral_score(article: &Article, now: DateTime<Utc>, config: &ViralConfig) -> f64 {
    let likes = article.like_count() as f64;
    let age_ms = article.age_millis(now);
    let age_hours = (age_ms as f64 / MS_PER_HOUR).max(config.min_age_hours);

    let decay = (age_hours + config.age_offset_hours).powf(config.velocity_exponent);
    let velocity = (likes + 1.0) / decay;

    if age_ms < config.breaking_window_ms {
        velocity * config.breaking_boost
    } else {
        velocity
    }
}
