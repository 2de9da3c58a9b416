use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use super::timestamp;
use crate::types::identifiers::{ArticleId, ViewerId};

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Malformed article batch: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An article row as served by the content store.
///
/// The ranking core reads only `id`, `created_at`, `date`, `category`
/// and `liked_by`; everything else is carried through as payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Human-readable publication date, used when `created_at` is absent.
    #[serde(default)]
    pub date: String,
    pub category: Category,
    #[serde(default)]
    pub liked_by: Option<Vec<ViewerId>>,

    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subhead: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
}

impl Article {
    /// Minimal article with only the fields ranking looks at.
    pub fn new(id: impl Into<ArticleId>, category: Category) -> Self {
        Article {
            id: id.into(),
            created_at: None,
            date: String::new(),
            category,
            liked_by: None,
            headline: String::new(),
            subhead: String::new(),
            author: String::new(),
            content: String::new(),
            image: None,
            tags: Vec::new(),
            link: None,
            user_id: String::new(),
            album_id: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at.to_rfc3339());
        self
    }

    pub fn with_likes<I, V>(mut self, viewers: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ViewerId>,
    {
        self.liked_by = Some(viewers.into_iter().map(Into::into).collect());
        self
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.as_ref().map_or(0, Vec::len)
    }

    pub fn is_liked_by(&self, viewer: &ViewerId) -> bool {
        self.liked_by
            .as_ref()
            .is_some_and(|likes| likes.contains(viewer))
    }

    /// Add or remove `viewer` from the likes. Returns whether the viewer
    /// likes the article afterwards.
    pub fn toggle_like(&mut self, viewer: &ViewerId) -> bool {
        let likes = self.liked_by.get_or_insert_with(Vec::new);
        if let Some(pos) = likes.iter().position(|v| v == viewer) {
            likes.remove(pos);
            false
        } else {
            likes.push(viewer.clone());
            true
        }
    }

    /// Effective publication instant: `created_at`, else `date`, else `now`.
    ///
    /// A present-but-unparseable `created_at` also degrades to `now`
    /// rather than falling through to `date`.
    pub fn published_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match &self.created_at {
            Some(raw) => timestamp::parse_iso(raw).unwrap_or(now),
            None => timestamp::parse_loose(&self.date).unwrap_or(now),
        }
    }

    /// Age relative to `now`, in milliseconds. Negative for future-dated rows.
    pub fn age_millis(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.published_at(now))
            .num_milliseconds()
    }

    /// `created_at` as epoch milliseconds; `None` when missing or malformed.
    pub fn created_at_millis(&self) -> Option<i64> {
        self.created_at
            .as_deref()
            .and_then(timestamp::parse_iso)
            .map(|dt| dt.timestamp_millis())
    }
}

/// Decode a batch of article rows.
pub fn articles_from_json(raw: &str) -> Result<Vec<Article>, ArticleError> {
    Ok(serde_json::from_str(raw)?)
}
