// Word "save as web page" output → one line of inline markup per paragraph.

pub mod font;
pub mod normalizer;
pub mod style;
pub mod tree;

use tracing::debug;

use crate::{
    error::{ConvertError, Result},
    markup::{font::FontTable, normalizer::normalize_paragraph},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Title page and preface paragraphs before the first entry.
    pub skip_paragraphs: usize,
    /// Lines this short or shorter are section headings ("А", "Б", ...).
    pub min_length: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            skip_paragraphs: 8,
            min_length: 8,
        }
    }
}

/// Normalizes every dictionary paragraph of a whole HTML document.
pub fn clean_document(html: &str, fonts: &FontTable, options: &CleanOptions) -> Result<Vec<String>> {
    let dom = tree::parse_html(html);
    let paragraphs = tree::paragraphs(&dom);
    debug!(count = paragraphs.len(), "paragraphs found");

    let mut lines = Vec::new();
    for paragraph in paragraphs.iter().skip(options.skip_paragraphs) {
        let line = normalize_paragraph(paragraph, fonts)?;
        if line.chars().count() > options.min_length {
            lines.push(line);
        }
    }

    Ok(lines)
}

/// Normalizes the first element of an HTML fragment.
pub fn normalize_html(fragment: &str, fonts: &FontTable) -> Result<String> {
    let dom = tree::parse_html(fragment);
    let root = tree::body(&dom)
        .and_then(|body| {
            let first = body
                .children
                .borrow()
                .iter()
                .find(|c| tree::tag_name(c).is_some())
                .cloned();
            first
        })
        .ok_or_else(|| ConvertError::structural("no element in fragment", fragment))?;

    normalize_paragraph(&root, fonts)
}
