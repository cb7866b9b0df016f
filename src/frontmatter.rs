use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::metadata::{FieldValue, Metadata};

// `---` line, optional body, `---` line. The body group is lazily optional so
// that an empty block closes at the first delimiter.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\A---\r?\n(?:(.*?)\r?\n)??---\r?(?:\n|\z)")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

/// Extracts the flat key/value block at the top of a markdown document.
///
/// Returns `None` when the document does not open with a delimited block.
/// An empty block is still `Some` with no entries.
pub(crate) fn parse(content: &str) -> Option<Metadata> {
    let caps = HEADER_PATTERN.captures(content)?;
    let header = caps.get(1).map_or("", |m| m.as_str());

    let mut metadata = Metadata::new();
    for line in header.split('\n') {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        metadata.insert(name.trim().to_string(), parse_value(value.trim()));
    }

    Some(metadata)
}

fn parse_value(raw: &str) -> FieldValue {
    let value = unquote(raw);

    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => FieldValue::List(
            inner
                .split(',')
                .map(|item| item.trim().replace('"', ""))
                .collect(),
        ),
        None => value.into(),
    }
}

// A lone `"` both opens and closes, leaving nothing.
fn unquote(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') {
        value.get(1..value.len() - 1).unwrap_or("")
    } else {
        value
    }
}
