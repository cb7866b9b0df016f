use indexmap::IndexMap;
use serde::Serialize;

use crate::metadata::{Article, ArticleSummary};

pub(crate) const UNCATEGORIZED: &str = "uncategorized";

/// Article summaries grouped by category. Categories keep the order in
/// which they were first seen, and so does each category's list.
#[derive(Serialize, Debug, Default)]
#[serde(transparent)]
pub(crate) struct Catalog {
    groups: IndexMap<String, Vec<ArticleSummary>>,
}

impl Catalog {
    pub fn group(articles: &[Article]) -> Self {
        let mut groups: IndexMap<String, Vec<ArticleSummary>> = IndexMap::new();
        for article in articles {
            let key = if article.category.is_empty() {
                UNCATEGORIZED
            } else {
                article.category.as_str()
            };
            groups
                .entry(key.to_string())
                .or_default()
                .push(article.summary());
        }
        Catalog { groups }
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[ArticleSummary]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.groups.iter().map(|(c, s)| (c.as_str(), s.len()))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
