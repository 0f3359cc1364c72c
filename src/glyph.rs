// Symbol fonts used by the source document, and what each glyph stands for.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    pairs: Vec<(char, char)>,
}

impl GlyphTable {
    /// `from` and `to` are matched char by char.
    pub fn new(from: &str, to: &str) -> Self {
        assert_eq!(
            from.chars().count(),
            to.chars().count(),
            "glyph table sides differ in length: {:?} / {:?}",
            from,
            to
        );
        GlyphTable {
            pairs: from.chars().zip(to.chars()).collect(),
        }
    }

    pub fn get(&self, glyph: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|(from, _)| *from == glyph)
            .map(|(_, to)| *to)
    }

    /// Maps every glyph of `text`. On failure returns the first unmapped glyph.
    pub fn map(&self, text: &str) -> Result<String, char> {
        text.chars().map(|c| self.get(c).ok_or(c)).collect()
    }
}

// ZapfDingbats BT: ♠ starts a headword, circled numbers mark remarks
pub fn zapf_dingbats_bt() -> GlyphTable {
    GlyphTable::new("tÀÁGÈÂÆÃÇÄÅ", "♠①②✧⑨③⑦④⑧⑤⑥")
}

// ZapfDingbat Dop (Cyrillic "р")
pub fn zapf_dingbat_dop() -> GlyphTable {
    GlyphTable::new("р", "◑")
}

pub fn lucida_icons() -> GlyphTable {
    GlyphTable::new("\u{8d}", "⌧")
}

pub fn antiqua() -> GlyphTable {
    GlyphTable::new("f", "f")
}

pub fn lucida_bright_math_symbol() -> GlyphTable {
    GlyphTable::new(" W%1", " △✕*")
}
