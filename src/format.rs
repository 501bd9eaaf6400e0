use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Collapse every run of two or more whitespace characters into one space and
/// strip leading and trailing whitespace.
///
/// ```
/// assert_eq!(twclsx::format("  px-2   py-2\n\n"), "px-2 py-2");
/// ```
pub fn format(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
