use anyhow::Result;

use zaliznyak_dict::{
    symbol_grammar::{italicize, SymbolGrammar},
    vocabulary::Vocabulary,
};

#[test]
fn test_symbols() {
    let grammar = SymbolGrammar::standard();

    for symbol in [
        "м",
        "мо-жо",
        "мн. одуш.",
        "мн. <i>от</i>",
        "св-нсв",
        "нсв//св",
        "м//ж//с",
        "част.(<i>усилительная</i>)",
        "<i>повел. от</i> св",
        "<i>форма Р. мн.; других форм нет</i>",
        "§1",
    ] {
        assert!(grammar.is_symbol(symbol), "{}", symbol);
    }

    for text in ["кот", "м/ж/с/мо", "мн. от", "1a", ""] {
        assert!(!grammar.is_symbol(text), "{}", text);
    }
}

#[test]
fn test_longest_symbol_wins() {
    let grammar = SymbolGrammar::standard();

    assert_eq!(grammar.match_prefix("мн. одуш. 1a"), Some("мн. одуш."));
    assert_eq!(grammar.match_prefix("мо 1a"), Some("мо"));
    assert_eq!(grammar.match_prefix("мо-жо 1a"), Some("мо-жо"));
    assert_eq!(grammar.match_prefix("св-нсв 2a"), Some("св-нсв"));
    assert_eq!(grammar.match_prefix("кот"), None);
}

#[test]
fn test_custom_vocabulary() -> Result<()> {
    let vocabulary = Vocabulary {
        inflected_forms: vec!["_от_".to_owned()],
        symbols: vec!["x".to_owned(), "xy".to_owned()],
        genitive_plural_phrases: vec!["_нет_".to_owned()],
        parentheticals: vec![String::new()],
    };
    let grammar = SymbolGrammar::new(vocabulary)?;

    assert_eq!(grammar.match_prefix("xy 1"), Some("xy"));
    assert!(grammar.is_symbol("<i>от</i> x/xy"));
    assert!(grammar.is_symbol("<i>нет</i>"));
    assert!(!grammar.is_symbol("м"));
    Ok(())
}

#[test]
fn test_vocabulary_from_json() -> Result<()> {
    let vocabulary = Vocabulary::from_json(
        r#"{
            "inflectedForms": [],
            "symbols": ["м", "ж"],
            "genitivePluralPhrases": [],
            "parentheticals": [""]
        }"#,
    )?;

    assert_eq!(vocabulary.symbols, ["м", "ж"]);
    assert!(vocabulary.is_recognized_parenthetical(""));
    assert!(!vocabulary.is_recognized_parenthetical("<i>без удар.</i>"));
    Ok(())
}

#[test]
fn test_italicize() {
    assert_eq!(italicize("мн. _от_"), "мн. <i>от</i>");
    assert_eq!(italicize("_повел. от_"), "<i>повел. от</i>");
    assert_eq!(italicize("м"), "м");
}

#[test]
fn test_pattern_is_escaped() {
    let pattern = SymbolGrammar::standard().pattern();

    assert!(pattern.contains(r"мн\. одуш\."));
    assert!(pattern.contains(r"част\.\(<i>усилительная</i>\)"));
}
