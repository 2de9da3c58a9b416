pub mod article;
pub mod category;
pub mod timestamp;

pub use crate::types::identifiers::{ArticleId, ViewerId};
pub use article::{articles_from_json, Article, ArticleError};
pub use category::{Category, UnknownCategory};
