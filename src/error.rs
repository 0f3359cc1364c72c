use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// A tag, attribute or style value nobody has handled yet.
    #[error("unexpected markup: {message} in {paragraph:?}")]
    Structural { message: String, paragraph: String },

    /// A glyph in a font-mapped run has no target symbol.
    #[error("unexpected glyph {glyph:?} ({font}) in {paragraph:?}")]
    GlyphMapping {
        font: String,
        glyph: char,
        paragraph: String,
    },

    /// A line does not match the entry, definition or name grammar.
    #[error("no match for {what} at line {line_number}: {line}")]
    Parse {
        what: &'static str,
        line_number: usize,
        line: String,
    },

    /// A leading parenthetical outside the recognised set.
    #[error("unrecognized parenthetical {parens:?} at line {line_number}: {line}")]
    UnrecognizedParenthetical {
        parens: String,
        line_number: usize,
        line: String,
    },

    /// The vocabulary produced an invalid pattern.
    #[error("invalid symbol grammar: {0}")]
    Grammar(#[from] regex::Error),
}

impl ConvertError {
    pub(crate) fn structural(message: impl Into<String>, paragraph: impl Into<String>) -> Self {
        ConvertError::Structural {
            message: message.into(),
            paragraph: paragraph.into(),
        }
    }

    pub(crate) fn parse(what: &'static str, line_number: usize, line: &str) -> Self {
        ConvertError::Parse {
            what,
            line_number,
            line: line.to_owned(),
        }
    }
}
