pub mod hero;
pub mod layout_cache;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::Article;
use crate::config::CurationConfig;
use crate::interest::InterestMap;
use crate::scoring::{rank, PersonalizedScorer};
use crate::types::FrontPageLayout;

pub use hero::{select_hero, HeroSource};
pub use layout_cache::LayoutCache;

/// A layout plus how it was arrived at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizeReport {
    pub layout: FrontPageLayout,
    pub hero_source: Option<HeroSource>,
    /// Articles inside the candidate cap.
    pub candidates_considered: usize,
    /// Articles past the cap, appended to the grid unscored.
    pub passed_through: usize,
}

/// Partitions an article collection into hero, trending and grid.
///
/// Stateless: output depends only on the articles, the interest map and
/// `now`.
#[derive(Debug, Clone, Default)]
pub struct FrontPageOrganizer {
    config: CurationConfig,
}

impl FrontPageOrganizer {
    pub fn new(config: CurationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurationConfig {
        &self.config
    }

    pub fn organize(
        &self,
        articles: &[Article],
        interests: &InterestMap,
        now: DateTime<Utc>,
    ) -> FrontPageLayout {
        self.organize_with_report(articles, interests, now).layout
    }

    pub fn organize_with_report(
        &self,
        articles: &[Article],
        interests: &InterestMap,
        now: DateTime<Utc>,
    ) -> OrganizeReport {
        if articles.is_empty() {
            return OrganizeReport {
                layout: FrontPageLayout::empty(),
                hero_source: None,
                candidates_considered: 0,
                passed_through: 0,
            };
        }

        // 1. Cap. Input is assumed newest-first; the tail is never scored.
        let cap = self.config.limits.max_candidates.min(articles.len());
        let (candidates, tail) = articles.split_at(cap);

        // 2. Hero
        let hero = select_hero(candidates, now, &self.config.hero);

        // 3. Rank the remainder
        let remainder = candidates
            .iter()
            .filter(|a| hero.map_or(true, |(h, _)| a.id != h.id));
        let scorer = PersonalizedScorer {
            viral: &self.config.viral,
            relevance: &self.config.relevance,
            interests,
        };
        let ranked = rank(&scorer, remainder, now);

        // 4. Split into trending and grid, then append the tail
        let slots = self.config.limits.trending_slots.min(ranked.len());
        let (trending, grid) = ranked.split_at(slots);

        let layout = FrontPageLayout {
            hero: hero.iter().map(|(h, _)| h.id.clone()).collect(),
            trending: trending.iter().map(|a| a.id.clone()).collect(),
            grid: grid
                .iter()
                .copied()
                .chain(tail)
                .map(|a| a.id.clone())
                .collect(),
        };

        debug!(
            candidates = candidates.len(),
            passed_through = tail.len(),
            hero = ?layout.hero_id().map(|id| id.as_str()),
            hero_source = ?hero.map(|(_, source)| source),
            trending = layout.trending.len(),
            grid = layout.grid.len(),
            "front page organized"
        );

        OrganizeReport {
            hero_source: hero.map(|(_, source)| source),
            candidates_considered: candidates.len(),
            passed_through: tail.len(),
            layout,
        }
    }
}

/// Organize with the default configuration.
pub fn organize_front_page(
    articles: &[Article],
    interests: &InterestMap,
    now: DateTime<Utc>,
) -> FrontPageLayout {
    FrontPageOrganizer::default().organize(articles, interests, now)
}
