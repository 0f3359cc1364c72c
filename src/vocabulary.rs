use serde::{Deserialize, Serialize};

/// Closed word lists of the dictionary notation.
///
/// `_` stands for italic markup: the first `_` of an item opens `<i>`, the
/// next one closes it, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    /// "imperative of", "3rd singular present of", ... put before a symbol.
    pub inflected_forms: Vec<String>,
    pub symbols: Vec<String>,
    /// Complete genitive plural remarks, matched as a whole.
    pub genitive_plural_phrases: Vec<String>,
    /// Allowed contents of the parenthetical right after the headword.
    pub parentheticals: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Vocabulary {
    pub fn standard() -> Self {
        Vocabulary {
            inflected_forms: to_strings(&[
                "_повел. от_",      // imperative of
                "_наст. 3 ед. от_", // 3rd singular present of
            ]),
            symbols: to_strings(&[
                "ф.",
                "мо⁺",
                "жо⁺",
                "м",
                "мо",
                "ж",
                "жо",
                "с",
                "со",
                "мо-жо",
                "мн.",
                "мн. одуш.",
                "мн. неод.",
                "мн. _от_",
                "п",
                "мс",
                "мс-п",
                "числ.",
                "числ.-п",
                "св",
                "нсв",
                "св-нсв",
                "св/нсв",
                "н",
                "част.",
                "част.(_усилительная_)",
                "союз",
                "предл.",
                "предик.",
                "вводн.",
                "межд.",
                "сравн.",
                "§1",
                "§2",
                "предикативное мс",
                "_см._",
            ]),
            genitive_plural_phrases: to_strings(&[
                "_форма Р. мн.; других форм нет_",
                "_форма Р. мн. от сущ. (не числ.) со знач._ «сотня»",
            ]),
            parentheticals: to_strings(&[
                "",
                "<i>в знач. «иди»</i>",
                "<i>без удар.</i>",
                "<i>часто без удар.</i>",
                "<i>часто без удар.</i>: еще",
                "<i>нормально без удар.</i>",
            ]),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_recognized_parenthetical(&self, parens: &str) -> bool {
        self.parentheticals.iter().any(|p| p == parens)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
