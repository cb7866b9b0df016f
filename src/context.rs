use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_OUTPUT_NAME: &str = "articles-meta.json";

#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub article_dir: PathBuf,
    pub output_path: PathBuf,
    pub pretty: bool,
}

impl Context {
    pub fn new(article_dir: PathBuf, output_path: Option<PathBuf>, pretty: bool) -> Self {
        let output_path = output_path.unwrap_or_else(|| default_output_path(&article_dir));
        Self {
            article_dir,
            output_path,
            pretty,
        }
    }
}

/// `articles-meta.json` next to the article directory. The directory is
/// resolved first so that roots like `.` or `..` still get a real sibling.
fn default_output_path(article_dir: &Path) -> PathBuf {
    let resolved = article_dir
        .canonicalize()
        .unwrap_or_else(|_| article_dir.to_path_buf());
    match resolved.parent() {
        Some(parent) => parent.join(DEFAULT_OUTPUT_NAME),
        None => PathBuf::from(DEFAULT_OUTPUT_NAME),
    }
}
