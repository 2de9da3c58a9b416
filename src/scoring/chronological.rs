use std::cmp::{Ordering, Reverse};

use crate::article::Article;

/// Sort key for newest-first ordering by `created_at`. Missing or
/// malformed timestamps count as the epoch, so they sort last.
pub fn chronological_key(article: &Article) -> Reverse<i64> {
    Reverse(article.created_at_millis().unwrap_or(0))
}

pub fn chronological_cmp(a: &Article, b: &Article) -> Ordering {
    chronological_key(a).cmp(&chronological_key(b))
}
