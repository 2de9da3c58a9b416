use chrono::{DateTime, Utc};

use super::{VaultSortMode, VaultSorter};
use crate::article::Article;
use crate::types::ArticleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VaultKey {
    article_count: usize,
    mode: VaultSortMode,
}

/// Keeps the vault ordering fixed until the article count or sort mode changes.
#[derive(Debug, Clone, Default)]
pub struct VaultCache {
    sorter: VaultSorter,
    current: Option<(VaultKey, Vec<ArticleId>)>,
}

impl VaultCache {
    pub fn new(sorter: VaultSorter) -> Self {
        Self {
            sorter,
            current: None,
        }
    }

    pub fn refresh(
        &mut self,
        articles: &[Article],
        mode: VaultSortMode,
        now: DateTime<Utc>,
    ) -> &[ArticleId] {
        let key = VaultKey {
            article_count: articles.len(),
            mode,
        };

        if self.current.as_ref().map_or(true, |(cached, _)| *cached != key) {
            self.current = None;
        }

        let sorter = &self.sorter;
        let (_, ids) = self
            .current
            .get_or_insert_with(|| (key, sorter.sort_ids(articles, mode, now)));
        ids
    }

    pub fn current(&self) -> Option<&[ArticleId]> {
        self.current.as_ref().map(|(_, ids)| ids.as_slice())
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
