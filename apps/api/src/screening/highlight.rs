//! Highlighter — wraps literal keyword occurrences in an emphasis span.
//!
//! Replacement is a case-sensitive literal replace, one keyword at a time in set
//! order. A keyword contained in another (e.g. "sql" in "mysql") can therefore be
//! wrapped inside an existing span. Escaping the text is left to the presentation
//! layer.

use crate::screening::skills::SkillSet;

const MARK_OPEN: &str = "<span style='background-color:#E0F7FA;color:#00796B;font-weight:bold'>";
const MARK_CLOSE: &str = "</span>";

/// Wraps a single keyword in the emphasis marker.
pub fn mark(keyword: &str) -> String {
    format!("{MARK_OPEN}{keyword}{MARK_CLOSE}")
}

/// Returns `text` with every occurrence of every keyword wrapped by [`mark`].
pub fn highlight(text: &str, keywords: &SkillSet) -> String {
    keywords
        .iter()
        .filter(|kw| !kw.is_empty())
        .fold(text.to_string(), |acc, kw| acc.replace(kw.as_str(), &mark(kw)))
}
