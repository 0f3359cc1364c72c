// Regular grammar of the grammatical symbols ("м", "св-нсв", "мн. _от_",
// "нсв//св", "_повел. от_ св", ...).
//
// symbol run  := SYMBOL ("/" | "//") SYMBOL? twice at most
// symbol      := GENITIVE_PLURAL_PHRASE | (FORM \s+)? symbol run
//
// Alternatives are sorted longest first, so "мн. одуш." is never read as "мн."
// followed by text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::Result, vocabulary::Vocabulary};

#[derive(Debug, Clone)]
pub struct SymbolGrammar {
    vocabulary: Vocabulary,
    pattern: String,
    prefix: Regex,
    whole: Regex,
    definition: Regex,
    name: Regex,
}

impl SymbolGrammar {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let pattern = build_pattern(&vocabulary);

        let prefix = Regex::new(&format!(r"^(?:{})", pattern))?;
        let whole = Regex::new(&format!(r"^(?:{})$", pattern))?;
        let definition = Regex::new(&format!(
            r"^♠?\s*(?P<symbol>(?:{})[,:;]?)(?:\s+(?P<grammar>.*))?$",
            pattern
        ))?;
        let name = Regex::new(&format!(
            r"^(?P<lemma>[\-’ а-яА-ЯёЁ\x{{300}}\x{{301}}()]+:?)\s+(?P<symbol>(?:{})[,:;]?)(?:\s+(?P<grammar>.+))?$",
            pattern
        ))?;

        Ok(SymbolGrammar {
            vocabulary,
            pattern,
            prefix,
            whole,
            definition,
            name,
        })
    }

    /// Grammar of the standard vocabulary, built on first use.
    pub fn standard() -> &'static SymbolGrammar {
        static STANDARD: Lazy<SymbolGrammar> =
            Lazy::new(|| SymbolGrammar::new(Vocabulary::standard()).unwrap());
        &STANDARD
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_symbol(&self, text: &str) -> bool {
        self.whole.is_match(text)
    }

    /// The symbol `text` starts with, preferring the longest alternative.
    pub fn match_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.prefix.find(text).map(|m| m.as_str())
    }

    pub(crate) fn definition_regex(&self) -> &Regex {
        &self.definition
    }

    pub(crate) fn name_regex(&self) -> &Regex {
        &self.name
    }
}

fn build_pattern(vocabulary: &Vocabulary) -> String {
    let forms = alternation(vocabulary.inflected_forms.iter().map(String::as_str));
    let symbols = alternation(longest_first(&vocabulary.symbols).into_iter());
    let genitive_plural = alternation(vocabulary.genitive_plural_phrases.iter().map(String::as_str));

    let alternate = format!("(?://?{})?", symbols);
    let symbol_run = format!("{}{}{}", symbols, alternate, alternate);

    format!(
        r"{}|(?:{}\s+)?{}",
        genitive_plural, forms, symbol_run
    )
}

/// Stable sort by length in characters, longest first.
fn longest_first(items: &[String]) -> Vec<&str> {
    let mut items: Vec<&str> = items.iter().map(String::as_str).collect();
    items.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    items
}

fn alternation<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = items.map(|s| italicize(&regex::escape(s))).collect();
    format!("(?:{})", items.join("|"))
}

/// "мн. _от_" → "мн. <i>от</i>"
pub fn italicize(item: &str) -> String {
    let mut out = String::with_capacity(item.len());
    let mut open = false;
    for c in item.chars() {
        if c == '_' {
            out.push_str(if open { "</i>" } else { "<i>" });
            open = !open;
        } else {
            out.push(c);
        }
    }
    out
}
