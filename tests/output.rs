use std::fs;

use anyhow::Result;

use zaliznyak_dict::{
    config::{EntrySet, Layout, OutputConfig, OutputFormat},
    entry::{Definition, Entry},
    output::{batch_by_len, format_entry, group_by_letter, group_name, save},
};

fn entry(lemma: &str, definitions: &[(&str, &str)]) -> Entry {
    Entry {
        numbers: None,
        lemma: lemma.to_owned(),
        parens: None,
        definitions: definitions
            .iter()
            .map(|(symbol, grammar)| Definition {
                symbol: symbol.to_string(),
                grammar: grammar.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_pipe_format() -> Result<()> {
    let kot = entry("кот", &[("м", "1a")]);
    assert_eq!(format_entry(&kot, OutputFormat::Pipe)?, "кот|м|1a");

    let verb = entry("забы́ть", &[("св", "14b"), ("нсв", "")]);
    assert_eq!(
        format_entry(&verb, OutputFormat::Pipe)?,
        "забы́ть|св|14b<br/>нсв"
    );
    Ok(())
}

#[test]
fn test_stress_coded_format() -> Result<()> {
    let rybak = entry("рыба́к", &[("м", "3b")]);
    assert_eq!(
        format_entry(&rybak, OutputFormat::StressCoded)?,
        "рыбак 2|м|3b"
    );
    Ok(())
}

#[test]
fn test_readable_format() -> Result<()> {
    let mut lava = entry("ла́ва", &[("ж", "1a, <b>x</b> &lt;y&gt;")]);
    lava.numbers = Some("2".to_owned());
    lava.parens = Some("<i>без удар.</i>".to_owned());
    assert_eq!(
        format_entry(&lava, OutputFormat::Readable)?,
        "2/ла́ва (_без удар._) ж 1a, __x__ <y>"
    );

    let kot = entry("кот", &[("м", "1a <sup>1</sup>"), ("ж", "")]);
    assert_eq!(format_entry(&kot, OutputFormat::Readable)?, "кот м 1a 1/ ж");
    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let kot = entry("кот", &[("м", "1a")]);
    let json: serde_json::Value = serde_json::from_str(&format_entry(&kot, OutputFormat::Json)?)?;

    assert_eq!(json["lemma"], "кот");
    assert!(json["numbers"].is_null());
    assert_eq!(json["definitions"][0]["symbol"], "м");
    assert_eq!(json["definitions"][0]["grammar"], "1a");
    Ok(())
}

#[test]
fn test_batch_by_len() {
    let lines = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    assert_eq!(
        batch_by_len(lines(&["aaa", "bb", "c"]), 5),
        [lines(&["aaa", "bb"]), lines(&["c"])]
    );
    assert_eq!(
        batch_by_len(lines(&["aaaaaa", "b"]), 3),
        [lines(&["aaaaaa"]), lines(&["b"])]
    );
    assert_eq!(
        batch_by_len(lines(&["ж", "ж", "ж"]), 2),
        [lines(&["ж", "ж"]), lines(&["ж"])]
    );
    assert!(batch_by_len(Vec::new(), 5).is_empty());
}

#[test]
fn test_group_name() -> Result<()> {
    assert_eq!(
        group_name(&entry("бе́гать", &[("нсв", "1a")]))?,
        "Глаголы/Ь"
    );
    assert_eq!(
        group_name(&entry("(Вели́кий) Но́вгород", &[("м", "1a")]))?,
        "Нарицательные/Д"
    );
    assert_eq!(group_name(&entry("кино́", &[("с", "0")]))?, "Нарицательные/О");
    assert_eq!(
        group_name(&entry("ко́шка:", &[("", "<i>см.</i> кот")]))?,
        "Нарицательные/А"
    );
    Ok(())
}

#[test]
fn test_group_by_letter_keeps_order() -> Result<()> {
    let entries = [
        entry("кот", &[("м", "1a")]),
        entry("ла́ва", &[("ж", "1a")]),
        entry("рот", &[("м", "1b")]),
    ];

    let groups = group_by_letter(&entries)?;
    let summary: Vec<(&str, usize)> = groups
        .iter()
        .map(|(name, group)| (name.as_str(), group.len()))
        .collect();
    assert_eq!(summary, [("Нарицательные/Т", 2), ("Нарицательные/А", 1)]);
    Ok(())
}

fn config(format: OutputFormat, layout: Layout, path: String) -> OutputConfig {
    OutputConfig {
        set: EntrySet::Common,
        format,
        layout,
        path,
    }
}

#[test]
fn test_save_layouts() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let entries = [
        entry("кот", &[("м", "1a")]),
        entry("бе́гать", &[("нсв", "1a")]),
    ];

    let one_file = dir.path().join("all.txt");
    save(
        &entries,
        &config(
            OutputFormat::Pipe,
            Layout::OneFile,
            one_file.display().to_string(),
        ),
    )?;
    assert_eq!(
        fs::read_to_string(&one_file)?,
        "кот|м|1a\nбе́гать|нсв|1a\n"
    );

    let batches = dir.path().join("batch-{0}.txt");
    save(
        &entries,
        &config(
            OutputFormat::Readable,
            Layout::Batches,
            batches.display().to_string(),
        ),
    )?;
    assert_eq!(
        fs::read_to_string(dir.path().join("batch-1.txt"))?,
        "кот м 1a\nбе́гать нсв 1a\n"
    );
    assert!(!dir.path().join("batch-2.txt").exists());

    let by_letter = dir.path().join("AZ");
    save(
        &entries,
        &config(
            OutputFormat::Pipe,
            Layout::ByLetter,
            by_letter.display().to_string(),
        ),
    )?;
    assert_eq!(
        fs::read_to_string(by_letter.join("Нарицательные").join("Т.txt"))?,
        "кот|м|1a\n"
    );
    assert_eq!(
        fs::read_to_string(by_letter.join("Глаголы").join("Ь.txt"))?,
        "бе́гать|нсв|1a\n"
    );
    Ok(())
}

#[test]
fn test_batches_need_placeholder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let entries = [entry("кот", &[("м", "1a")])];

    let result = save(
        &entries,
        &config(
            OutputFormat::Pipe,
            Layout::Batches,
            dir.path().join("batch.txt").display().to_string(),
        ),
    );
    assert!(result.is_err());
    Ok(())
}
