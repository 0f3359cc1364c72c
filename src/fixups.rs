// Corrections of the normalized text before it is split into entries.
//
// The generic rules below repair what Word does to every document: stray
// spaces inside tags, italics split by punctuation, entries continued on the
// next paragraph after ";". Corrections of single entries are data, read from
// a CSV file of literal `from,to` pairs and applied between the two passes.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::{
    markup::font::{COMBINING_ACUTE, COMBINING_GRAVE, REVIEW_MARKER},
    utility::str::is_vowel,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

pub fn read_substitutions(csv_data: &str) -> Result<Vec<Substitution>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv_data.as_bytes());

    let mut substitutions = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let substitution: Substitution =
            record.with_context(|| format!("Failed to read substitution at {}", i + 1))?;
        substitutions.push(substitution);
    }
    Ok(substitutions)
}

/// Applies the generic rules and `substitutions` to `\n`-separated lines.
pub fn correct_text(text: &str, substitutions: &[Substitution]) -> String {
    let mut text = fix_structure(text);

    for substitution in substitutions {
        text = text.replace(&substitution.from, &substitution.to);
    }

    finish(&text)
}

fn fix_structure(text: &str) -> String {
    static REGEX_NBSP: Lazy<Regex> = Lazy::new(|| Regex::new("\u{a0}+").unwrap());
    static REGEX_PUNCTUATION_BETWEEN_ITALICS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"</i>([,. ()«»;-]*)<i>").unwrap());
    static REGEX_EMPTY_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"<i>\s*</i>").unwrap());
    static REGEX_EMPTY_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"<b>\s*</b>").unwrap());
    static REGEX_TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\n").unwrap());
    static REGEX_SEMICOLON_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(&gt)?;\n").unwrap());
    static REGEX_DEGREE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)<sup>\*</sup>").unwrap());

    // soft hyphen
    let text = text.replace('\u{ad}', "");
    let text = REGEX_NBSP.replace_all(&text, " ");

    let text = text
        .replace("</b><b>", "")
        .replace("</b>-<b>", "-")
        .replace("</sup><sup>", "")
        .replace("<sup> </sup>", "")
        .replace("<b>♠", "♠<b>")
        .replace("<b> ", " <b>")
        .replace("<b>♠", "♠<b>")
        .replace(" </b>", "</b> ")
        .replace("\n <b>", "\n<b>")
        .replace("<i> ", " <i>")
        .replace(" </i>", "</i> ");

    let text = REGEX_PUNCTUATION_BETWEEN_ITALICS.replace_all(&text, "$1");
    let text = REGEX_EMPTY_ITALIC.replace_all(&text, "");
    let text = REGEX_EMPTY_BOLD.replace_all(&text, "");
    let text = REGEX_TRAILING_SPACE.replace_all(&text, "\n");

    let text = text.replace("§ ", "§").replace("// ", "//");

    // definitions continued in the next paragraph; "&gt;" is an escaped ">"
    let text = REGEX_SEMICOLON_END.replace_all(&text, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            caps[0].to_owned()
        } else {
            ";<br/>".to_owned()
        }
    });

    let text = text
        .replace("<i>(", "(<i>")
        .replace(")</i>", "</i>)")
        .replace("</b>:", ":</b>");

    let text = REGEX_DEGREE.replace_all(&text, "${1}°");

    text.replace(";<br/><b>", "\n<b>")
}

fn finish(text: &str) -> String {
    static REGEX_NEXT_HEADWORD: Lazy<Regex> =
        Lazy::new(|| Regex::new(r";<br/>\s*♠?\s*<b>").unwrap());
    static REGEX_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",([^ <\n])").unwrap());

    let text = REGEX_NEXT_HEADWORD.replace_all(text, "\n♠ <b>");
    let text = remove_stress_marks_over_non_vowels(&text);

    let text = text
        .replace("<sup></sup>", "")
        .replace("<b></b>", "")
        .replace("</i><i>", "")
        .replace("</b><b>", "");

    let text = REGEX_COMMA.replace_all(&text, ", $1");

    text.replace(" //", "//")
}

/// Drops stress marks that do not follow a vowel: "✧ ́зу́б" → "✧ зу́б".
pub fn remove_stress_marks_over_non_vowels(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;

    for c in text.chars() {
        if c == COMBINING_ACUTE || c == COMBINING_GRAVE {
            if !previous.map_or(false, is_vowel) {
                continue;
            }
        }
        out.push(c);
        previous = Some(c);
    }

    out
}

/// Proper-name lines keep labels unmarked; italicize them like the main part.
pub fn prepare_name_line(line: &str) -> String {
    line.replace(" см. ", " <i>см.</i> ")
        .replace("мн. от ", "мн. <i>от</i> ")
}

/// Hidden text was kept for manual review; such lines are not entries.
pub fn needs_review(line: &str) -> bool {
    line.contains(REVIEW_MARKER)
}
