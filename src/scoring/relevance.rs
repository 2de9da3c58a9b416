use crate::article::Article;
use crate::config::RelevanceConfig;
use crate::interest::InterestMap;

/// Personalization multiplier: `1 + log10(affinity + 1) * interest_weight`.
///
/// Never below 1, so it can only lift an article above its organic score.
pub fn relevance_score(
    article: &Article,
    interests: &InterestMap,
    config: &RelevanceConfig,
) -> f64 {
    let affinity = interests.affinity(article.category) as f64;
    1.0 + (affinity + 1.0).log10() * config.interest_weight
}
