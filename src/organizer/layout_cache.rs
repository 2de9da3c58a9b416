use chrono::{DateTime, Utc};
use tracing::debug;

use super::FrontPageOrganizer;
use crate::article::Article;
use crate::edition::Edition;
use crate::interest::InterestMap;
use crate::types::{FrontPageLayout, LayoutVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayoutKey {
    article_count: usize,
    edition: Edition,
}

/// Holds the rendered front page steady between refreshes.
///
/// The page is re-organized only when the number of articles or the
/// edition changes. A like toggles `liked_by` without changing the count,
/// so liking never reshuffles a page the viewer is looking at.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    organizer: FrontPageOrganizer,
    current: Option<(LayoutKey, FrontPageLayout)>,
}

impl LayoutCache {
    pub fn new(organizer: FrontPageOrganizer) -> Self {
        Self {
            organizer,
            current: None,
        }
    }

    /// Return the cached layout, re-organizing first if it is stale.
    pub fn refresh(
        &mut self,
        articles: &[Article],
        edition: Edition,
        interests: &InterestMap,
        now: DateTime<Utc>,
    ) -> &FrontPageLayout {
        let key = LayoutKey {
            article_count: articles.len(),
            edition,
        };

        let stale = self.current.as_ref().map_or(true, |(cached, _)| *cached != key);
        if stale {
            self.current = None;
        }

        let organizer = &self.organizer;
        let (_, layout) = self.current.get_or_insert_with(|| {
            debug!(
                article_count = key.article_count,
                edition = ?key.edition,
                "re-organizing front page"
            );
            (key, organizer.organize(articles, interests, now))
        });
        layout
    }

    pub fn current(&self) -> Option<&FrontPageLayout> {
        self.current.as_ref().map(|(_, layout)| layout)
    }

    pub fn version(&self) -> Option<LayoutVersion> {
        self.current().map(FrontPageLayout::version)
    }

    /// Force the next `refresh` to re-organize.
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
