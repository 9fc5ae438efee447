// src/utils.rs
use std::collections::BTreeSet;

/// Split tool output into lines after trimming surrounding whitespace.
///
/// Blank output yields an empty list. Interior lines are kept verbatim.
pub fn split_output_lines(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(str::to_string).collect()
}

/// Deduplicate by exact (case-sensitive) equality, drop empty lines, sort ascending.
pub fn dedup_sorted<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns `"s"` unless `count` is exactly one.
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
