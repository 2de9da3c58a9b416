use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::config::HeroConfig;
use crate::scoring::attention_velocity;

/// How the lead story was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroSource {
    /// Highest attention velocity among eligible candidates.
    AttentionVelocity,
    /// Every candidate was locked out; highest raw like count won.
    MostLiked,
}

/// Pick the lead story from `candidates`. `None` only for an empty slice.
///
/// Ties go to the earliest candidate in input order on both paths.
pub fn select_hero<'a>(
    candidates: &'a [Article],
    now: DateTime<Utc>,
    config: &HeroConfig,
) -> Option<(&'a Article, HeroSource)> {
    let best_eligible = candidates
        .iter()
        .filter_map(|article| {
            attention_velocity(article, now, config)
                .score()
                .map(|score| (article, score))
        })
        .reduce(|best, next| if next.1.total_cmp(&best.1).is_gt() { next } else { best });

    if let Some((article, _)) = best_eligible {
        return Some((article, HeroSource::AttentionVelocity));
    }

    candidates
        .iter()
        .reduce(|best, next| if next.like_count() > best.like_count() { next } else { best })
        .map(|article| (article, HeroSource::MostLiked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Category;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
    }

    fn article(id: &str, age: Duration, likes: usize) -> Article {
        Article::new(id, Category::Tech)
            .with_created_at(now() - age)
            .with_likes((0..likes).map(|i| format!("v{i}")))
    }

    #[test]
    fn empty_candidates_have_no_hero() {
        assert!(select_hero(&[], now(), &HeroConfig::default()).is_none());
    }

    #[test]
    fn unliked_eligible_article_beats_fresh_fallback() {
        let candidates = [
            article("fresh", Duration::minutes(5), 80),
            article("stale", Duration::days(3), 0),
        ];
        let (hero, source) = select_hero(&candidates, now(), &HeroConfig::default()).unwrap();
        assert_eq!(hero.id.as_str(), "stale");
        assert_eq!(source, HeroSource::AttentionVelocity);
    }

    #[test]
    fn fallback_prefers_earliest_on_tied_likes() {
        let candidates = [
            article("a", Duration::minutes(5), 2),
            article("b", Duration::minutes(6), 2),
        ];
        let (hero, source) = select_hero(&candidates, now(), &HeroConfig::default()).unwrap();
        assert_eq!(hero.id.as_str(), "a");
        assert_eq!(source, HeroSource::MostLiked);
    }
}
