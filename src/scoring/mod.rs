pub mod attention;
pub mod chronological;
pub mod relevance;
pub mod viral;

use chrono::{DateTime, Utc};

use crate::article::Article;
use crate::config::{RelevanceConfig, ViralConfig};
use crate::interest::InterestMap;
use crate::types::ScoredArticle;

pub use attention::{attention_velocity, HeroEligibility};
pub use chronological::{chronological_cmp, chronological_key};
pub use relevance::relevance_score;
pub use viral::viral_score;

/// A ranking score over articles at a fixed instant. Higher ranks first.
pub trait Scorer {
    fn score(&self, article: &Article, now: DateTime<Utc>) -> f64;
}

/// Plain viral score. Used for vault notoriety ordering.
#[derive(Debug, Clone, Copy)]
pub struct ViralScorer<'c> {
    pub viral: &'c ViralConfig,
}

impl Scorer for ViralScorer<'_> {
    fn score(&self, article: &Article, now: DateTime<Utc>) -> f64 {
        viral_score(article, now, self.viral)
    }
}

/// Viral score times the viewer's relevance multiplier. Used for the
/// trending and grid partitions.
#[derive(Debug, Clone, Copy)]
pub struct PersonalizedScorer<'c> {
    pub viral: &'c ViralConfig,
    pub relevance: &'c RelevanceConfig,
    pub interests: &'c InterestMap,
}

impl Scorer for PersonalizedScorer<'_> {
    fn score(&self, article: &Article, now: DateTime<Utc>) -> f64 {
        viral_score(article, now, self.viral)
            * relevance_score(article, self.interests, self.relevance)
    }
}

/// Score every article and sort, highest first. Ties keep input order.
pub fn rank<'a, S, I>(scorer: &S, articles: I, now: DateTime<Utc>) -> Vec<&'a Article>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = &'a Article>,
{
    let mut scored: Vec<ScoredArticle<'a>> = articles
        .into_iter()
        .map(|article| ScoredArticle {
            article,
            score: scorer.score(article, now),
        })
        .collect();

    ScoredArticle::sort_descending(&mut scored);

    debug_assert!(scored
        .windows(2)
        .all(|w| w[0].score.total_cmp(&w[1].score).is_ge()));

    scored.into_iter().map(|s| s.article).collect()
}
