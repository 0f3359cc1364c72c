use std::fs;

use anyhow::Result;

use zaliznyak_dict::{
    error::ConvertError,
    markup::{
        clean_document,
        font::{FontHandler, FontTable},
        normalize_html,
        style::clean_style,
        CleanOptions,
    },
};

fn normalize(html: &str) -> Result<String, ConvertError> {
    normalize_html(html, FontTable::standard())
}

#[test]
fn test_word_paragraph() -> Result<()> {
    let html = r#"<p class=MsoNormal><u><span lang=RU style='font-size:6.0pt;mso-bidi-font-size:
10.0pt;font-family:"ZapfDingbats BT"'>t</span></u><u><span lang=RU
style='font-family:TimesET'><span style='mso-tab-count:1'>                     </span><b
style='mso-bidi-font-weight:normal'>пацанв</b></span></u><b style='mso-bidi-font-weight:
normal'><u><span lang=RU style='font-family:Tim_acc'>а</span></u></b><u><span
lang=RU style='font-family:TimesET'><span style='mso-tab-count:1'>      </span>ж<span
style='mso-tab-count:1'>             </span>1b— (<i style='mso-bidi-font-style:
normal'>собир.</i>)<o:p></o:p></span></u></p>
"#;

    assert_eq!(normalize(html)?, "♠ <b>пацанва́</b> ж 1b— (<i>собир.</i>)");
    Ok(())
}

#[test]
fn test_headword_mark_in_sup() -> Result<()> {
    let html = r#"<b><sup style='font-family:"ZapfDingbats BT"'>t</sup><sup> 1-4</sup>ла́ва</b> ж 1a"#;

    assert_eq!(normalize(html)?, "♠<sup> 1-4</sup>ла́ва");
    Ok(())
}

#[test]
fn test_glyph_font() -> Result<()> {
    let html = r#"<p><span style='font-family:"ZapfDingbats BT"'>t</span></p>"#;
    assert_eq!(normalize(html)?, "♠");

    let html = r#"<p><span style='font-family:"ZapfDingbats BT"'>ÀG</span> x</p>"#;
    assert_eq!(normalize(html)?, "①✧ x");
    Ok(())
}

#[test]
fn test_other_glyph_fonts() -> Result<()> {
    let html = r#"<p><span style='font-family:"ZapfDingbat Dop"'>р</span> x</p>"#;
    assert_eq!(normalize(html)?, "◑ x");

    let html = "<p><span style='font-family:\"Lucida Icons\"'>\u{8d}</span> x</p>";
    assert_eq!(normalize(html)?, "⌧ x");

    let html = "<p><span style='font-family:Antiqua'>f</span> x</p>";
    assert_eq!(normalize(html)?, "f x");

    let html = r#"<p>x<span style='font-family:"Lucida Bright Math Symbol"'>W%1</span></p>"#;
    assert_eq!(normalize(html)?, "x△✕*");

    let html = r#"<p><span style='font-family:"ZapfDingbat Dop"'>t</span></p>"#;
    assert!(matches!(
        normalize(html),
        Err(ConvertError::GlyphMapping { glyph: 't', .. })
    ));
    Ok(())
}

#[test]
fn test_metric_converter_keeps_its_attributes() -> Result<()> {
    let html = "<p><st1:metricconverter productid='5 м' w:st='on'>5 м</st1:metricconverter> x</p>";

    assert_eq!(normalize(html)?, "5 м x");
    Ok(())
}

#[test]
fn test_accent_font_without_text() -> Result<()> {
    let html = "<p>к<span style='font-family:Tim_acc'><b>о</b></span>т</p>";

    assert_eq!(normalize(html)?, "к<b>о</b>т");
    Ok(())
}

#[test]
fn test_normalized_markup_is_unchanged() -> Result<()> {
    let line = "♠ <b>пацанва́</b> ж 1b— (<i>собир.</i>)";
    assert_eq!(normalize(&format!("<p>{}</p>", line))?, line);

    let line = "♠ <b><sup>2</sup>ла́ва</b> ж 1a<br/>м 1a";
    assert_eq!(normalize(&format!("<p>{}</p>", line))?, line);
    Ok(())
}

#[test]
fn test_accent_fonts() -> Result<()> {
    let html = "<p><b>фл<span style='font-family:Tim_pob'>ё</span>рдор<span style='font-family:Tim_acc'>а</span>нж</b></p>";

    assert_eq!(normalize(html)?, "<b>флё̀рдора́нж</b>");
    Ok(())
}

#[test]
fn test_hidden_text_is_marked_for_review() -> Result<()> {
    let html = "<p>кот<span style='display:none;mso-hide:all'>скрыто</span></p>";

    assert_eq!(normalize(html)?, "кот(REVIEW: скрыто)");
    Ok(())
}

#[test]
fn test_raised_text_becomes_sup() -> Result<()> {
    let html = "<p><span style='position:relative;top:-2.0pt'>2</span>кот</p>";

    assert_eq!(normalize(html)?, "<sup>2</sup>кот");
    Ok(())
}

#[test]
fn test_plain_sup_and_nbsp() -> Result<()> {
    assert_eq!(normalize("<p>кот<sup>2</sup></p>")?, "кот<sup>2</sup>");
    assert_eq!(normalize("<p>кот&nbsp;м</p>")?, "кот м");
    Ok(())
}

#[test]
fn test_blank_font() -> Result<()> {
    let html = "<p><span style='font-family:ZapfDingbats'> </span>кот</p>";
    assert_eq!(normalize(html)?, " кот");

    let html = "<p><span style='font-family:ZapfDingbats'>x</span>кот</p>";
    assert!(matches!(normalize(html), Err(ConvertError::Structural { .. })));
    Ok(())
}

#[test]
fn test_unknown_markup_is_an_error() {
    for html in [
        "<p><font>кот</font></p>",
        "<p><b class=x>кот</b></p>",
        "<p><span style='color:blue'>кот</span></p>",
        r#"<p><span style='font-family:"Lucida Bright Math Symbol"'><b>x</b></span></p>"#,
    ] {
        assert!(
            matches!(normalize(html), Err(ConvertError::Structural { .. })),
            "{}",
            html
        );
    }
}

#[test]
fn test_unmapped_glyph() {
    let html = r#"<p><span style='font-family:"ZapfDingbats BT"'>q</span></p>"#;

    match normalize(html) {
        Err(ConvertError::GlyphMapping { glyph, font, .. }) => {
            assert_eq!(glyph, 'q');
            assert_eq!(font, "font-family:\"ZapfDingbats BT\"");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_custom_font_table() -> Result<()> {
    let mut fonts = FontTable::new();
    fonts.insert("font-family:Accents", FontHandler::Accent('\u{301}'));

    let html = "<p>к<span style='font-family:Accents'>о</span>т</p>";
    assert_eq!(normalize_html(html, &fonts)?, "ко́т");

    // not in this table
    let html = "<p><span style='font-family:Tim_acc'>о</span></p>";
    assert!(normalize_html(html, &fonts).is_err());
    Ok(())
}

#[test]
fn test_clean_style() {
    let clean = clean_style("font-size:6.0pt;mso-bidi-font-size:\n10.0pt;font-family:\"ZapfDingbats BT\"");
    assert_eq!(clean.value.as_deref(), Some("font-family:\"ZapfDingbats BT\""));
    assert!(!clean.raised);

    let clean = clean_style("position:relative;top:-2.0pt;mso-text-raise:2.0pt");
    assert_eq!(clean.value, None);
    assert!(clean.raised);
}

#[test]
fn test_clean_document() -> Result<()> {
    let html = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/dictionary.html"
    ))?;

    let lines = clean_document(&html, FontTable::standard(), &CleanOptions::default())?;

    assert_eq!(
        lines,
        [
            "♠ <b>кот</b> м 1a",
            "♠ <b>рыба́к</b> м 3b",
            "♠ <b>ко́шка</b>: <i>см.</i> <b>кот</b>",
            "♠ <b>скры́тое</b> с 1a(REVIEW: проверить)",
            "♠ <b>исключе́ние</b> ж 7a",
            "♠ <b>ла́ва</b> ж 1a;",
            "мо 1a (<i>устар.</i>)",
        ]
    );
    Ok(())
}
