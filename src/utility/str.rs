// Letter classes of the dictionary text
#[derive(Debug, PartialEq, Eq)]
pub enum CharType {
    CyrillicVowel,
    CyrillicConsonant,
    Other,
}

impl CharType {
    pub fn from(c: char) -> Self {
        match c {
            'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я' | 'А' | 'Е' | 'Ё' | 'И'
            | 'О' | 'У' | 'Ы' | 'Э' | 'Ю' | 'Я' => Self::CyrillicVowel,
            'а'..='я' | 'А'..='Я' => Self::CyrillicConsonant,
            _ => Self::Other,
        }
    }
}

pub fn is_vowel(c: char) -> bool {
    CharType::from(c) == CharType::CyrillicVowel
}

/// Last letter of a headword, ignoring a parenthesized optional part, stress
/// marks and trailing punctuation: "(Вели́кий) Но́вгород" → 'д'.
pub fn last_letter(lemma: &str) -> Option<char> {
    let lemma = match (lemma.find('('), lemma.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}", &lemma[..open], &lemma[close + ')'.len_utf8()..])
        }
        _ => lemma.to_owned(),
    };

    lemma
        .trim()
        .trim_end_matches(':')
        .trim_end_matches(',')
        .trim_end_matches('\u{301}')
        .trim_end_matches('\u{300}')
        .chars()
        .last()
}
