//! Parser for the fixed-width tables printed by `docker ps` / `docker stats`.
//!
//! Pure string-in, records-out. Never fails: a malformed row just yields
//! empty or misaligned cells.

pub mod offsets;

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub use offsets::Offsets;

/// One table row: lower-cased header title -> trimmed cell.
pub type Record = BTreeMap<String, String>;

static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static regex"));

/// Finds where each column starts in the header line.
pub trait ColumnLocator {
    /// Character offset of every title in `header`, in title order.
    fn offsets(&self, header: &str, titles: &[&str]) -> Vec<usize>;
}

/// Header on the first line, fixed-width rows below it.
pub fn parse_table(raw: &str, locator: &dyn ColumnLocator) -> Vec<Record> {
    let mut lines = raw.trim().lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };

    let titles = split_titles(header);
    let offsets = locator.offsets(header, &titles);

    lines
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            titles
                .iter()
                .enumerate()
                .map(|(i, title)| {
                    let cell = slice_cell(&chars, offsets[i], offsets.get(i + 1).copied());
                    (title.to_lowercase(), cell)
                })
                .collect()
        })
        .collect()
}

/// Header titles are separated by two or more whitespace characters.
fn split_titles(header: &str) -> Vec<&str> {
    TITLE_SEPARATOR
        .split(header)
        .filter(|title| !title.is_empty())
        .collect()
}

/// `chars[start..end]`, trimmed; empty when the range is inverted or past the end.
fn slice_cell(chars: &[char], start: usize, end: Option<usize>) -> String {
    let end = end.unwrap_or(chars.len()).min(chars.len());
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect::<String>().trim().to_string()
}
