pub mod cache;
mod search;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::Article;
use crate::config::CurationConfig;
use crate::scoring::{chronological_key, rank, ViralScorer};
use crate::types::ArticleId;

pub use cache::VaultCache;
pub use search::search;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaultSortMode {
    /// Descending viral score.
    #[default]
    Notoriety,
    /// Newest `created_at` first.
    Chronological,
}

/// Orders the full archive.
#[derive(Debug, Clone, Default)]
pub struct VaultSorter {
    config: CurationConfig,
}

impl VaultSorter {
    pub fn new(config: CurationConfig) -> Self {
        Self { config }
    }

    pub fn sort<'a>(
        &self,
        articles: &'a [Article],
        mode: VaultSortMode,
        now: DateTime<Utc>,
    ) -> Vec<&'a Article> {
        match mode {
            VaultSortMode::Chronological => {
                let mut sorted: Vec<&Article> = articles.iter().collect();
                // Stable; cached so each timestamp is parsed once.
                sorted.sort_by_cached_key(|a| chronological_key(a));
                sorted
            }
            VaultSortMode::Notoriety => {
                // Only the head is scored; the rest keeps input order.
                let cap = self.config.limits.vault_sort_cap.min(articles.len());
                let (head, rest) = articles.split_at(cap);

                let scorer = ViralScorer {
                    viral: &self.config.viral,
                };
                let mut sorted = rank(&scorer, head, now);
                sorted.extend(rest);

                debug!(
                    scored = head.len(),
                    passed_through = rest.len(),
                    "vault sorted by notoriety"
                );
                sorted
            }
        }
    }

    pub fn sort_ids(
        &self,
        articles: &[Article],
        mode: VaultSortMode,
        now: DateTime<Utc>,
    ) -> Vec<ArticleId> {
        self.sort(articles, mode, now)
            .into_iter()
            .map(|a| a.id.clone())
            .collect()
    }
}

/// Sort the vault with the default configuration, returning ids.
pub fn sort_vault(articles: &[Article], mode: VaultSortMode, now: DateTime<Utc>) -> Vec<ArticleId> {
    VaultSorter::default().sort_ids(articles, mode, now)
}
