//! Deterministic front-page curation for article feeds.
//!
//! `frontpage-core` picks a lead story by attention velocity, ranks the
//! rest by a decayed viral score scaled by the viewer's category
//! interests, and orders the archive by notoriety or recency. Every
//! ranking function takes "now" and the interest map as inputs, so the
//! same inputs always produce the same ordering.

pub mod article;
pub mod config;
pub mod edition;
pub mod interest;
pub mod organizer;
pub mod scoring;
pub mod types;
pub mod vault;

pub use article::{Article, Category};
pub use config::CurationConfig;
pub use edition::{edition_label, random_edition, Edition};
pub use interest::{InterestMap, InterestTracker};
pub use organizer::{organize_front_page, FrontPageOrganizer, LayoutCache};
pub use types::{ArticleId, FrontPageLayout, ViewerId};
pub use vault::{sort_vault, VaultSortMode, VaultSorter};
