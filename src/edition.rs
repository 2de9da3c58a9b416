//! Cosmetic edition framing for a browsing session.
//!
//! Nothing here feeds into ranking; swapping or removing editions never
//! changes a layout.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const FALLBACK_LABEL: &str = "Recommended";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Edition {
    TopOfHour,
    TopOfDay,
    TopOfWeek,
    /// Has a label but is never drawn at random.
    TopOfMonth,
    AllTimeClassics,
    #[default]
    StandardGravity,
}

impl Edition {
    pub const ALL: [Edition; 6] = [
        Edition::TopOfHour,
        Edition::TopOfDay,
        Edition::TopOfWeek,
        Edition::TopOfMonth,
        Edition::AllTimeClassics,
        Edition::StandardGravity,
    ];

    /// Editions eligible for [`random_edition`].
    pub const ROTATION: [Edition; 5] = [
        Edition::TopOfHour,
        Edition::TopOfDay,
        Edition::TopOfWeek,
        Edition::AllTimeClassics,
        Edition::StandardGravity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Edition::TopOfHour => "Rising Now",
            Edition::TopOfDay => "Recommended For You",
            Edition::TopOfWeek => "The Weekly Algorithm",
            Edition::TopOfMonth => "Monthly Deep Dives",
            Edition::AllTimeClassics => "Legendary Gujabs",
            Edition::StandardGravity => "The Discovery Feed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Edition::TopOfHour => "TOP_OF_HOUR",
            Edition::TopOfDay => "TOP_OF_DAY",
            Edition::TopOfWeek => "TOP_OF_WEEK",
            Edition::TopOfMonth => "TOP_OF_MONTH",
            Edition::AllTimeClassics => "ALL_TIME_CLASSICS",
            Edition::StandardGravity => "STANDARD_GRAVITY",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown edition: {0}")]
pub struct UnknownEdition(pub String);

impl FromStr for Edition {
    type Err = UnknownEdition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Edition::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownEdition(s.to_string()))
    }
}

/// Uniform pick from [`Edition::ROTATION`].
pub fn random_edition<R: Rng + ?Sized>(rng: &mut R) -> Edition {
    Edition::ROTATION
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// Edition for a new browsing session, drawn from the thread-local RNG.
pub fn session_edition() -> Edition {
    random_edition(&mut rand::thread_rng())
}

/// Label for a serialized edition name; `"Recommended"` if unrecognized.
pub fn edition_label(name: &str) -> &'static str {
    name.parse::<Edition>()
        .map(Edition::label)
        .unwrap_or(FALLBACK_LABEL)
}
