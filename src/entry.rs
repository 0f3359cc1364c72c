use serde::Serialize;

/// One headword of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub numbers: Option<String>, // homonym numbers from <sup>
    pub lemma: String,           // may keep U+0300/U+0301 and a trailing ':'
    pub parens: Option<String>,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub symbol: String,
    pub grammar: String,
}

impl Entry {
    /// Cross-reference entries ("<b>лемма:</b> …") carry no symbol.
    pub fn is_reference(&self) -> bool {
        self.lemma.ends_with(':')
    }

    pub fn is_verb(&self) -> bool {
        self.definitions.iter().any(|d| d.symbol.ends_with("св"))
    }
}
