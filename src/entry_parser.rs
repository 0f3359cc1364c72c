use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    entry::{Definition, Entry},
    error::{ConvertError, Result},
    symbol_grammar::SymbolGrammar,
};

pub const DEFINITION_SEPARATOR: &str = "<br/>";

/// Splits normalized dictionary lines into entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryParser<'g> {
    grammar: &'g SymbolGrammar,
}

impl<'g> EntryParser<'g> {
    pub fn new(grammar: &'g SymbolGrammar) -> Self {
        EntryParser { grammar }
    }

    // ♠ <b><sup> 2</sup>лемма́</b> (<i>без удар.</i>) м 1a<br/>ж 1a
    pub fn parse(&self, line: &str, line_number: usize) -> Result<Entry> {
        static REGEX_ENTRY: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^\s*♠*\s*<b>(?:<sup>(?P<num>[\x20-\x39]+)</sup>)?(?P<lemma>[\- а-яА-ЯёЁ\x{300}\x{301}]+:?)</b>\s*(?P<rest>.+)$",
            )
            .unwrap()
        });

        let caps = REGEX_ENTRY
            .captures(line)
            .ok_or_else(|| ConvertError::parse("entry", line_number, line))?;

        let lemma = caps["lemma"].to_owned();
        let numbers = caps
            .name("num")
            .map(|m| m.as_str().trim().to_owned())
            .filter(|n| !n.is_empty());

        let (parens, symbol_grammar) = match split_parens(&caps["rest"]) {
            Some(split) => split,
            None => return Err(ConvertError::parse("parenthetical", line_number, line)),
        };

        if !self.grammar.vocabulary().is_recognized_parenthetical(parens) {
            return Err(ConvertError::UnrecognizedParenthetical {
                parens: parens.to_owned(),
                line_number,
                line: line.to_owned(),
            });
        }

        let definitions = if lemma.ends_with(':') {
            // cross-reference: "<b>лемма:</b> см. …"
            vec![Definition {
                symbol: String::new(),
                grammar: symbol_grammar.to_owned(),
            }]
        } else {
            symbol_grammar
                .split(DEFINITION_SEPARATOR)
                .map(|segment| self.parse_definition(segment, line, line_number))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Entry {
            numbers,
            lemma,
            parens: Some(parens.to_owned()).filter(|p| !p.is_empty()),
            definitions,
        })
    }

    pub fn parse_definition(&self, segment: &str, line: &str, line_number: usize) -> Result<Definition> {
        let caps = self
            .grammar
            .definition_regex()
            .captures(segment)
            .ok_or_else(|| ConvertError::parse("definition", line_number, line))?;

        Ok(Definition {
            symbol: caps["symbol"].trim_end().to_owned(),
            grammar: caps
                .name("grammar")
                .map_or_else(String::new, |m| m.as_str().to_owned()),
        })
    }

    /// Proper names: "Но́вгород м 1a", no headword markup, one definition.
    pub fn parse_name(&self, line: &str, line_number: usize) -> Result<Entry> {
        let caps = self
            .grammar
            .name_regex()
            .captures(line)
            .ok_or_else(|| ConvertError::parse("name", line_number, line))?;

        Ok(Entry {
            numbers: None,
            lemma: caps["lemma"].to_owned(),
            parens: None,
            definitions: vec![Definition {
                symbol: caps["symbol"].to_owned(),
                grammar: caps
                    .name("grammar")
                    .map_or_else(String::new, |m| m.as_str().to_owned()),
            }],
        })
    }
}

/// Splits "(note) rest" into `("note", " rest")`. Without a leading "(" the
/// note is empty. `None` when the parenthesis is never closed.
pub fn split_parens(rest: &str) -> Option<(&str, &str)> {
    match rest.strip_prefix('(') {
        Some(inner) => {
            let close = inner.find(')')?;
            Some((&inner[..close], &inner[close + 1..]))
        }
        None => Some(("", rest)),
    }
}
