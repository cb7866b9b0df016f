use std::collections::HashMap;

use serde::Serialize;

/// A single frontmatter value: either a plain string or a bracketed list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Flattened text form; list items are joined with `,`.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(s.to_string())
    }
}

pub(crate) type Metadata = HashMap<String, FieldValue>;

#[derive(Debug, Clone)]
pub(crate) struct Article {
    pub metadata: Metadata,
    /// `/`-separated, relative to the scan root.
    pub path: String,
    /// Empty only for root-level files without a `category` field.
    pub category: String,
}

impl Article {
    pub fn new(metadata: Metadata, path: String) -> Self {
        let category = match metadata.get("category").map(FieldValue::to_text) {
            Some(c) if !c.is_empty() => c,
            _ => parent_dir(&path).to_string(),
        };

        Self {
            metadata,
            path,
            category,
        }
    }

    pub fn summary(&self) -> ArticleSummary {
        let field = |key: &str| self.metadata.get(key).cloned();
        ArticleSummary {
            title: field("title"),
            date: field("date"),
            category: field("category"),
            path: self.path.clone(),
            tags: field("tags"),
            description: field("description"),
        }
    }
}

/// The projection written to the catalog. Fields missing from the source
/// frontmatter are left out of the JSON object.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct ArticleSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue>,
}

fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> Metadata {
        pairs.iter().map(|(k, v)| (k.to_string(), (*v).into())).collect()
    }

    #[test]
    fn test_category_defaults_to_directory() {
        let article = Article::new(metadata(&[("title", "x")]), "posts/x.md".to_string());
        assert_eq!(article.category, "posts");
    }

    #[test]
    fn test_category_uses_nested_directory() {
        let article = Article::new(Metadata::new(), "a/b/c.md".to_string());
        assert_eq!(article.category, "a/b");
    }

    #[test]
    fn test_explicit_category_wins() {
        let article = Article::new(
            metadata(&[("category", "Special")]),
            "notes/note1.md".to_string(),
        );
        assert_eq!(article.category, "Special");
    }

    #[test]
    fn test_empty_category_falls_back() {
        let article = Article::new(metadata(&[("category", "")]), "notes/n.md".to_string());
        assert_eq!(article.category, "notes");
    }

    #[test]
    fn test_list_category_is_joined() {
        let meta =
            crate::frontmatter::parse("---\ncategory: [a, b]\ntitle: t\n---\n").unwrap();
        let article = Article::new(meta, "notes/n.md".to_string());
        assert_eq!(article.category, "a,b");
    }

    #[test]
    fn test_empty_list_category_falls_back() {
        let mut meta = Metadata::new();
        meta.insert("category".to_string(), FieldValue::List(vec![String::new()]));
        let article = Article::new(meta, "notes/n.md".to_string());
        assert_eq!(article.category, "notes");
    }

    #[test]
    fn test_root_file_has_empty_category() {
        let article = Article::new(Metadata::new(), "index.md".to_string());
        assert_eq!(article.category, "");
    }

    #[test]
    fn test_summary_keeps_absent_fields_absent() {
        let article = Article::new(metadata(&[("title", "N")]), "notes/n.md".to_string());
        let summary = article.summary();
        assert_eq!(summary.title, Some("N".into()));
        assert_eq!(summary.category, None);
        assert_eq!(summary.date, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "N", "path": "notes/n.md" }));
    }
}
