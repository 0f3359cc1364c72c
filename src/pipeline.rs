// File level glue: reading the Word export, caching the cleaned lines, and
// turning line lists into entries.

use std::{
    fs::{self, File},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    entry::Entry,
    entry_parser::EntryParser,
    fixups::{self, Substitution},
    markup::{self, font::FontTable, CleanOptions},
    utility::zip::ZipReader,
};

/// Line prefixes that are known not to be entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    prefixes: Vec<String>,
}

impl Exclusions {
    /// One prefix per line; blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Self {
        let prefixes = text
            .lines()
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
            .map(|l| l.to_owned())
            .collect();
        Exclusions { prefixes }
    }

    pub fn excludes(&self, line: &str) -> bool {
        self.prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }
}

/// Reads an HTML file, or the only HTML file inside a zip archive.
pub fn read_html(path: &Path, encoding: &'static encoding_rs::Encoding) -> Result<String> {
    let is_zip = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("zip"));

    let bytes = if is_zip {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        ZipReader::new(file)?.read_single(&[".htm", ".html"])?
    } else {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let (html, _, malformed) = encoding.decode(&bytes);
    if malformed {
        debug!(encoding = encoding.name(), "malformed input replaced");
    }
    Ok(html.into_owned())
}

/// Cleaned lines of the HTML document, reusing `cache` while it is newer than
/// the document.
pub fn clean_html_cached(
    html_path: &Path,
    cache: Option<&Path>,
    encoding: &'static encoding_rs::Encoding,
    fonts: &FontTable,
    options: &CleanOptions,
) -> Result<Vec<String>> {
    if let Some(cache) = cache {
        if is_fresh(cache, html_path)? {
            info!(cache = %cache.display(), "using cached clean lines");
            let text = fs::read_to_string(cache)
                .with_context(|| format!("Failed to read {}", cache.display()))?;
            return Ok(text.lines().map(|l| l.to_owned()).collect());
        }
    }

    let html = read_html(html_path, encoding)?;
    let lines = markup::clean_document(&html, fonts, options)
        .with_context(|| format!("Failed to clean {}", html_path.display()))?;

    if let Some(cache) = cache {
        info!(cache = %cache.display(), "writing clean lines so subsequent runs are faster");
        fs::write(cache, lines.join("\n"))
            .with_context(|| format!("Failed to write {}", cache.display()))?;
    }

    Ok(lines)
}

fn is_fresh(cache: &Path, source: &Path) -> Result<bool> {
    let Ok(cache_meta) = fs::metadata(cache) else {
        return Ok(false);
    };
    let source_meta =
        fs::metadata(source).with_context(|| format!("Failed to read {}", source.display()))?;

    Ok(cache_meta.modified()? >= source_meta.modified()?)
}

/// Lines that go to the entry parser, with their 1-based line numbers.
pub fn entry_lines<'a>(text: &'a str, exclusions: &Exclusions) -> Vec<(usize, &'a str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| {
            !line.trim().is_empty() && !fixups::needs_review(line) && !exclusions.excludes(line)
        })
        .collect()
}

/// Fixes up the cleaned lines of the main part. Returns the corrected text.
pub fn correct_lines(lines: &[String], substitutions: &[Substitution]) -> String {
    fixups::correct_text(&lines.join("\n"), substitutions)
}

pub fn parse_common(
    text: &str,
    exclusions: &Exclusions,
    parser: &EntryParser<'_>,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (number, line) in entry_lines(text, exclusions) {
        entries.push(parser.parse(line, number)?);
    }
    Ok(entries)
}

pub fn parse_names(
    text: &str,
    exclusions: &Exclusions,
    parser: &EntryParser<'_>,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (number, line) in entry_lines(text, exclusions) {
        let line = fixups::prepare_name_line(line);
        entries.push(parser.parse_name(&line, number)?);
    }
    Ok(entries)
}
