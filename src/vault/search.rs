use crate::article::Article;

/// Case-insensitive substring search over headline, body and category
/// name. Matches keep input order; a blank query matches nothing.
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    articles
        .iter()
        .filter(|article| is_match(article, &needle))
        .collect()
}

fn is_match(article: &Article, needle: &str) -> bool {
    [
        article.headline.as_str(),
        article.content.as_str(),
        article.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
