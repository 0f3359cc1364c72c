// Stress marks as numbers: "рыба́к" → "рыбак 2".
//
// Per word the code is made of
// - primary (acute) stresses counted from the end of the word, 1-based, the
//   rightmost first and joined with "//" ("0" when there is none),
// - ",N" for every ё, also counted from the end,
// - ".N" for every secondary (grave) stress, counted from the start, 0-based.
// Words of a lemma are joined with "+".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::font::{COMBINING_ACUTE, COMBINING_GRAVE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressEncoding {
    pub stripped: String,
    pub code: String,
}

impl std::fmt::Display for StressEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stripped, self.code)
    }
}

pub fn is_yo(c: char) -> bool {
    c == 'ё' || c == 'Ё'
}

/// Removes stress marks and folds ё into е.
pub fn strip_stress_marks(text: &str) -> String {
    text.chars()
        .filter(|&c| c != COMBINING_ACUTE && c != COMBINING_GRAVE)
        .map(|c| match c {
            'ё' => 'е',
            'Ё' => 'Е',
            c => c,
        })
        .collect()
}

/// Stress code of a single word.
pub fn word_stress_code(word: &str) -> String {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();
    let mut yo = Vec::new();

    let mut len = 0;
    for (i, c) in word.chars().enumerate() {
        len += 1;

        // index among the letters, marks seen so far excluded
        let position = i - primary.len() - secondary.len();
        if is_yo(c) {
            yo.push(position + 1);
        }
        if c == COMBINING_ACUTE {
            primary.push(position);
        }
        if c == COMBINING_GRAVE {
            secondary.push(position);
        }
    }

    let stripped_len = len - primary.len() - secondary.len();

    let mut code = if primary.is_empty() {
        "0".to_owned()
    } else {
        primary
            .iter()
            .rev()
            .map(|p| (stripped_len + 1 - p).to_string())
            .collect::<Vec<_>>()
            .join("//")
    };

    for p in &yo {
        code.push_str(&format!(",{}", stripped_len + 1 - p));
    }
    for p in &secondary {
        code.push_str(&format!(".{}", p));
    }

    code
}

pub fn encode_stress(lemma: &str) -> StressEncoding {
    static REGEX_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w’]+\b").unwrap());

    let code = REGEX_WORD
        .find_iter(lemma)
        .map(|m| word_stress_code(m.as_str()))
        .collect::<Vec<_>>()
        .join("+");

    StressEncoding {
        stripped: strip_stress_marks(lemma),
        code,
    }
}

/// "рыба́к" → "рыбак 2"
pub fn convert_stress_marks_to_numbers(lemma: &str) -> String {
    encode_stress(lemma).to_string()
}
