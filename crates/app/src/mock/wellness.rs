use super::{matches_query, parse_fixture, ALL_FILTER};
use shared_types::{AppError, Article, ArticleCategory};

const ARTICLES: &str = include_str!("../../data/articles.json");

pub fn articles() -> Result<Vec<Article>, AppError> {
    parse_fixture("articles", ARTICLES)
}

/// Category tabs: `All` then every category label.
pub fn article_categories() -> Vec<String> {
    std::iter::once(ALL_FILTER)
        .chain(ArticleCategory::ALL.iter().map(|c| c.label()))
        .map(str::to_string)
        .collect()
}

fn is_browsing_all(query: &str, category: &str) -> bool {
    category == ALL_FILTER && query.trim().is_empty()
}

/// The highlighted article, shown only on the unfiltered `All` view.
pub fn featured_article(articles: &[Article], query: &str, category: &str) -> Option<Article> {
    if !is_browsing_all(query, category) {
        return None;
    }
    articles.iter().find(|a| a.featured).cloned()
}

/// Grid contents for a category label (or `All`) and a search over title,
/// excerpt and content. The featured article is left out whenever it is
/// shown separately.
pub fn filter_articles(articles: &[Article], query: &str, category: &str) -> Vec<Article> {
    let wanted = ArticleCategory::from_label(category);
    let featured_id = featured_article(articles, query, category).map(|a| a.id);
    articles
        .iter()
        .filter(|a| category == ALL_FILTER || wanted == Some(a.category))
        .filter(|a| matches_query(query, &[&a.title, &a.excerpt, &a.content]))
        .filter(|a| featured_id.as_deref() != Some(a.id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn featured_only_on_unfiltered_all() {
        let articles = articles().unwrap();
        assert_eq!(featured_article(&articles, "", ALL_FILTER).map(|a| a.id), Some("1".into()));
        assert_eq!(featured_article(&articles, "sleep", ALL_FILTER), None);
        assert_eq!(featured_article(&articles, "", "Mental Health"), None);
    }

    #[test]
    fn featured_is_removed_from_grid_when_shown() {
        let articles = articles().unwrap();
        assert_eq!(ids(&filter_articles(&articles, "", ALL_FILTER)), ["2", "3", "4", "5"]);
        assert_eq!(ids(&filter_articles(&articles, "", "Mental Health")), ["1", "5"]);
    }

    #[test]
    fn search_covers_title_excerpt_and_content() {
        let articles = articles().unwrap();
        assert_eq!(ids(&filter_articles(&articles, "jogging", ALL_FILTER)), ["3"]);
        assert_eq!(ids(&filter_articles(&articles, "GPA", ALL_FILTER)), ["4"]);
        assert_eq!(ids(&filter_articles(&articles, "memory consolidation", ALL_FILTER)), ["5"]);
        assert_eq!(ids(&filter_articles(&articles, "exam", ALL_FILTER)), ["1"]);
    }

    #[test]
    fn category_and_search_combine() {
        let articles = articles().unwrap();
        assert_eq!(ids(&filter_articles(&articles, "sleep", "Mental Health")), ["1", "5"]);
        assert!(filter_articles(&articles, "sleep", "Fitness").is_empty());
    }

    #[test]
    fn categories_start_with_all() {
        assert_eq!(
            article_categories(),
            ["All", "Mental Health", "Nutrition", "Fitness", "Campus Life"]
        );
    }
}
