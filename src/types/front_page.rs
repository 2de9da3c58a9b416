use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::article::Article;
use crate::types::identifiers::ArticleId;

/// The partitioned front page, as ids only.
/// Presentation resolves ids back to articles with [`FrontPageLayout::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontPageLayout {
    /// Zero or one entry; empty only when the input was empty.
    pub hero: Vec<ArticleId>,
    pub trending: Vec<ArticleId>,
    pub grid: Vec<ArticleId>,
}

impl FrontPageLayout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hero_id(&self) -> Option<&ArticleId> {
        self.hero.first()
    }

    /// All ids in page order: hero, trending, grid.
    pub fn ids(&self) -> impl Iterator<Item = &ArticleId> {
        self.hero.iter().chain(&self.trending).chain(&self.grid)
    }

    pub fn len(&self) -> usize {
        self.hero.len() + self.trending.len() + self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content fingerprint of the ordered partitions.
    ///
    /// Each partition is hashed with its name so that moving an id from
    /// trending to grid changes the version even if page order does not.
    pub fn version(&self) -> LayoutVersion {
        let mut hasher = Sha256::new();
        for (name, ids) in [
            ("hero", &self.hero),
            ("trending", &self.trending),
            ("grid", &self.grid),
        ] {
            hasher.update(name.as_bytes());
            hasher.update(b"\n");
            for id in ids {
                hasher.update(id.as_str().as_bytes());
                hasher.update(b"\n");
            }
        }
        LayoutVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    /// Map ids back onto `articles`. Ids that no longer resolve are skipped.
    pub fn resolve<'a>(&self, articles: &'a [Article]) -> ResolvedFrontPage<'a> {
        let by_id = index_by_id(articles);
        ResolvedFrontPage {
            hero: resolve_ids(&self.hero, &by_id),
            trending: resolve_ids(&self.trending, &by_id),
            grid: resolve_ids(&self.grid, &by_id),
        }
    }
}

/// A [`FrontPageLayout`] with its ids replaced by article references.
#[derive(Debug, Clone)]
pub struct ResolvedFrontPage<'a> {
    pub hero: Vec<&'a Article>,
    pub trending: Vec<&'a Article>,
    pub grid: Vec<&'a Article>,
}

impl<'a> ResolvedFrontPage<'a> {
    pub fn hero(&self) -> Option<&'a Article> {
        self.hero.first().copied()
    }
}

/// `sha256:<hex>` fingerprint of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutVersion(String);

impl LayoutVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Map an ordered id list (e.g. a vault ordering) back onto `articles`.
pub fn resolve_order<'a>(ids: &[ArticleId], articles: &'a [Article]) -> Vec<&'a Article> {
    resolve_ids(ids, &index_by_id(articles))
}

fn index_by_id(articles: &[Article]) -> HashMap<&ArticleId, &Article> {
    let mut by_id = HashMap::with_capacity(articles.len());
    for article in articles {
        // First occurrence wins, matching a linear find.
        by_id.entry(&article.id).or_insert(article);
    }
    by_id
}

fn resolve_ids<'a>(
    ids: &[ArticleId],
    by_id: &HashMap<&ArticleId, &'a Article>,
) -> Vec<&'a Article> {
    ids.iter().filter_map(|id| by_id.get(id).copied()).collect()
}

/// Internal: an article paired with its score for the duration of one
/// organize or sort call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredArticle<'a> {
    pub article: &'a Article,
    pub score: f64,
}

impl<'a> ScoredArticle<'a> {
    /// Stable sort, highest score first. Equal scores keep input order.
    pub(crate) fn sort_descending(scored: &mut [ScoredArticle<'a>]) {
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
}
