use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::glyph::{self, GlyphTable};

/// Wrapper put around hidden text so the line can be reviewed by hand.
pub const REVIEW_MARKER: &str = "REVIEW:";

pub const COMBINING_ACUTE: char = '\u{301}';
pub const COMBINING_GRAVE: char = '\u{300}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontHandler {
    /// Replace the first text child glyph by glyph. With `required` the text
    /// child must exist.
    Glyphs { table: GlyphTable, required: bool },

    /// Insert a combining accent after the first character (stress marks).
    Accent(char),

    /// The single text child must be blank.
    Blank,

    /// Hidden text, kept inside a review marker.
    Review,
}

/// Style value (what is left after cleaning) → handler.
#[derive(Debug, Clone, Default)]
pub struct FontTable {
    handlers: HashMap<String, FontHandler>,
}

impl FontTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, style: &str, handler: FontHandler) {
        self.handlers.insert(style.to_owned(), handler);
    }

    pub fn get(&self, style: &str) -> Option<&FontHandler> {
        self.handlers.get(style)
    }

    /// Fonts of the Word source of the dictionary.
    pub fn standard() -> &'static FontTable {
        static STANDARD: Lazy<FontTable> = Lazy::new(|| {
            let glyphs = |table: GlyphTable, required: bool| FontHandler::Glyphs { table, required };

            let mut fonts = FontTable::new();
            fonts.insert(
                "font-family:\"ZapfDingbats BT\"",
                glyphs(glyph::zapf_dingbats_bt(), false),
            );
            fonts.insert(
                "font-family:\"ZapfDingbat Dop\"",
                glyphs(glyph::zapf_dingbat_dop(), false),
            );
            fonts.insert("font-family:ZapfDingbats", FontHandler::Blank);
            fonts.insert(
                "font-family:\"Lucida Icons\"",
                glyphs(glyph::lucida_icons(), false),
            );
            fonts.insert("font-family:Antiqua", glyphs(glyph::antiqua(), false));
            fonts.insert(
                "font-family:\"Lucida Bright Math Symbol\"",
                glyphs(glyph::lucida_bright_math_symbol(), true),
            );
            fonts.insert("font-family:Tim_acc", FontHandler::Accent(COMBINING_ACUTE));
            fonts.insert("font-family:Tim_pob", FontHandler::Accent(COMBINING_GRAVE));
            fonts.insert("display:none;mso-hide:all", FontHandler::Review);
            fonts
        });

        &STANDARD
    }
}

pub fn insert_after_first_char(text: &str, mark: char) -> Option<String> {
    let mut chars = text.chars();
    let first = chars.next()?;

    let mut out = String::with_capacity(text.len() + mark.len_utf8());
    out.push(first);
    out.push(mark);
    out.push_str(chars.as_str());
    Some(out)
}

pub fn review(text: &str) -> String {
    format!("({} {})", REVIEW_MARKER, text)
}
