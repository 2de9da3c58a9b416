use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

const ANONYMOUS_PREFIX: &str = "anon_";
const ANONYMOUS_SUFFIX_LEN: usize = 13;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Content-store identifier of an article. Stable across requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        ArticleId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        ArticleId(s.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        ArticleId(s)
    }
}

/// Identifier of whoever liked an article: an account id, or an
/// anonymous per-device id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerId(String);

impl ViewerId {
    pub fn new(id: impl Into<String>) -> Self {
        ViewerId(id.into())
    }

    /// Mint an id for a viewer without an account: `anon_` followed by
    /// 13 lowercase base-36 characters.
    pub fn anonymous<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..ANONYMOUS_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        ViewerId(format!("{ANONYMOUS_PREFIX}{suffix}"))
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.starts_with(ANONYMOUS_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewerId {
    fn from(s: &str) -> Self {
        ViewerId(s.to_string())
    }
}

impl From<String> for ViewerId {
    fn from(s: String) -> Self {
        ViewerId(s)
    }
}
