use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topical tag. Serialized with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Tech,
    Celebrity,
    Gossip,
    Finance,
    #[serde(rename = "Creative Art")]
    CreativeArt,
    World,
    Lifestyle,
    Science,
    Sports,
    Satire,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Politics,
        Category::Tech,
        Category::Celebrity,
        Category::Gossip,
        Category::Finance,
        Category::CreativeArt,
        Category::World,
        Category::Lifestyle,
        Category::Science,
        Category::Sports,
        Category::Satire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Tech => "Tech",
            Category::Celebrity => "Celebrity",
            Category::Gossip => "Gossip",
            Category::Finance => "Finance",
            Category::CreativeArt => "Creative Art",
            Category::World => "World",
            Category::Lifestyle => "Lifestyle",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Satire => "Satire",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
