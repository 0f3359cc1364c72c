use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::{
    config::{Layout, OutputConfig, OutputFormat},
    entry::Entry,
    stress::convert_stress_marks_to_numbers,
    utility::str::last_letter,
};

/// Upper bound of characters in one file of the batched layout.
pub const BATCH_LEN: usize = 565_000;

pub fn format_entry(entry: &Entry, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Pipe => to_pipe_format(&entry.lemma, entry),
        OutputFormat::Readable => to_readable_format(entry),
        OutputFormat::StressCoded => {
            to_pipe_format(&convert_stress_marks_to_numbers(&entry.lemma), entry)
        }
        OutputFormat::Json => serde_json::to_string(entry)?,
    })
}

// лемма|м|1a<br/>ж|1a
fn to_pipe_format(lemma: &str, entry: &Entry) -> String {
    let definitions: Vec<String> = entry
        .definitions
        .iter()
        .map(|d| {
            if d.grammar.is_empty() {
                d.symbol.clone()
            } else {
                format!("{}|{}", d.symbol, d.grammar)
            }
        })
        .collect();

    format!("{}|{}", lemma, definitions.join("<br/>"))
}

// 2/лемма (_без удар._) м 1a
fn to_readable_format(entry: &Entry) -> String {
    // lazy, so every superscript of a line becomes its own "X/"
    static REGEX_SUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<sup>(.+?)</sup>").unwrap());

    let numbers = entry
        .numbers
        .as_ref()
        .map_or_else(String::new, |n| format!("{}/", n));
    let parens = entry
        .parens
        .as_ref()
        .map_or_else(String::new, |p| format!("({}) ", p));
    let definitions: Vec<String> = entry
        .definitions
        .iter()
        .map(|d| {
            if d.grammar.is_empty() {
                d.symbol.clone()
            } else {
                format!("{} {}", d.symbol, d.grammar)
            }
        })
        .collect();

    let rest = format!("{}{}", parens, definitions.join(" "))
        .replace("<i>", "_")
        .replace("</i>", "_")
        .replace("<b>", "__")
        .replace("</b>", "__")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    let rest = REGEX_SUP.replace_all(&rest, "$1/");

    format!("{}{} {}", numbers, entry.lemma, rest)
}

/// Splits `lines` into consecutive groups of at most `max_len` characters.
/// A line longer than `max_len` gets a group of its own.
pub fn batch_by_len(lines: Vec<String>, max_len: usize) -> Vec<Vec<String>> {
    let mut batches = Vec::new();
    let mut batch = Vec::new();
    let mut len = 0;

    for line in lines {
        let line_len = line.chars().count();
        if len + line_len > max_len && !batch.is_empty() {
            batches.push(std::mem::take(&mut batch));
            len = 0;
        }

        len += line_len;
        batch.push(line);
    }

    if !batch.is_empty() {
        batches.push(batch);
    }

    batches
}

/// "Глаголы/Ь", "Нарицательные/А", ...
pub fn group_name(entry: &Entry) -> Result<String> {
    let letter = last_letter(&entry.lemma)
        .with_context(|| format!("No letter in lemma {:?}", entry.lemma))?;
    let part_of_speech = if entry.is_verb() {
        "Глаголы"
    } else {
        "Нарицательные"
    };

    Ok(format!("{}/{}", part_of_speech, letter.to_uppercase()))
}

/// Groups in order of first appearance.
pub fn group_by_letter(entries: &[Entry]) -> Result<Vec<(String, Vec<&Entry>)>> {
    let mut groups: Vec<(String, Vec<&Entry>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let name = group_name(entry)?;
        match index.get(&name) {
            Some(&i) => groups[i].1.push(entry),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push((name, vec![entry]));
            }
        }
    }

    Ok(groups)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut data = String::new();
    for line in lines {
        data.push_str(line);
        data.push('\n');
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn save(entries: &[Entry], config: &OutputConfig) -> Result<()> {
    let format_all = |entries: &[&Entry]| -> Result<Vec<String>> {
        entries
            .iter()
            .map(|e| format_entry(e, config.format))
            .collect()
    };

    match config.layout {
        Layout::OneFile => {
            let all: Vec<&Entry> = entries.iter().collect();
            write_lines(Path::new(&config.path), &format_all(&all)?)?;
        }

        Layout::Batches => {
            ensure!(
                config.path.contains("{0}"),
                "Batched output path needs a {{0}} placeholder: {}",
                config.path
            );

            let all: Vec<&Entry> = entries.iter().collect();
            for (i, batch) in batch_by_len(format_all(&all)?, BATCH_LEN)
                .iter()
                .enumerate()
            {
                let path = config.path.replace("{0}", &(i + 1).to_string());
                write_lines(Path::new(&path), batch)?;
            }
        }

        Layout::ByLetter => {
            let root = PathBuf::from(&config.path);
            for (name, group) in group_by_letter(entries)? {
                let path = root.join(format!("{}.txt", name));
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                write_lines(&path, &format_all(&group)?)?;
            }
        }
    }

    info!(path = %config.path, entries = entries.len(), "saved");
    Ok(())
}
