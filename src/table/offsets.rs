use serde::Deserialize;

use super::ColumnLocator;

/// Configurable choice of [`ColumnLocator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Offsets {
    #[default]
    Substring,
    Sequential,
}

impl Offsets {
    pub fn locator(self) -> &'static dyn ColumnLocator {
        match self {
            Self::Substring => &SubstringOffsets,
            Self::Sequential => &SequentialOffsets,
        }
    }
}

/// Offset of each title = first occurrence of its text in the header.
///
/// A title that also appears earlier in the header (e.g. `PORT` after
/// `PORTS`) is located at the earlier spot.
pub struct SubstringOffsets;

impl ColumnLocator for SubstringOffsets {
    fn offsets(&self, header: &str, titles: &[&str]) -> Vec<usize> {
        titles
            .iter()
            .map(|title| header.find(title).map_or(0, |byte| char_offset(header, byte)))
            .collect()
    }
}

/// Searches for each title only after the end of the previous one.
pub struct SequentialOffsets;

impl ColumnLocator for SequentialOffsets {
    fn offsets(&self, header: &str, titles: &[&str]) -> Vec<usize> {
        let mut from = 0;
        titles
            .iter()
            .map(|title| {
                let byte = header[from..].find(title).map_or(from, |pos| from + pos);
                from = byte + title.len();
                char_offset(header, byte)
            })
            .collect()
    }
}

fn char_offset(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}
