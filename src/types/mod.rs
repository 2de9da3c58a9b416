pub mod front_page;
pub mod identifiers;

pub use front_page::{resolve_order, FrontPageLayout, LayoutVersion, ResolvedFrontPage};
pub(crate) use front_page::ScoredArticle;
pub use identifiers::{ArticleId, ViewerId};
