// Word's inline styles carry a lot of layout noise. Everything listed here is
// dropped; whatever survives must be understood by the font table.

/// Vertical offset Word uses instead of <sup> in some entries.
pub const RAISED: &str = "top:-2.0pt";

// Properties dropped whatever their value.
const PRESENTATIONAL_PROPERTIES: &[&str] = &[
    "mso-tab-count",
    "font-size",
    "mso-bidi-font-size",
    "mso-bidi-font-style",
    "position",
    "top",
    "mso-text-raise",
    "letter-spacing",
    "mso-bidi-font-weight",
    "mso-ansi-language",
    "mso-spacerun",
    "mso-bidi-font-family",
    "mso-fareast-font-family",
    "mso-bookmark",
];

// Single declarations dropped as a whole.
const PRESENTATIONAL_DECLARATIONS: &[&str] = &[
    "mso-bidi-font-weight:normal",
    "mso-list:Ignore",
    "font-family:TimesET",
    "font-family:\"Courier New\"",
    "font-family:Symbol",
    "font:7.0pt \"Times New Roman\"",
    "background:red",
    "mso-highlight:red",
    "text-decoration:none",
];

/// Attributes that never mean anything for the dictionary text.
pub const IGNORED_ATTRIBUTES: &[&str] = &["lang", "dir", "name"];

#[derive(Debug, PartialEq, Eq)]
pub struct CleanStyle {
    /// `None` when nothing but noise was left.
    pub value: Option<String>,
    pub raised: bool,
}

pub fn is_presentational(declaration: &str) -> bool {
    if declaration.trim().is_empty() {
        return true;
    }

    let property = match declaration.find(':') {
        Some(i) => &declaration[..i],
        None => declaration,
    };

    PRESENTATIONAL_PROPERTIES.contains(&property)
        || PRESENTATIONAL_DECLARATIONS.contains(&declaration)
}

pub fn clean_style(style: &str) -> CleanStyle {
    let style = style.replace(['\n', '\r'], "");
    let declarations: Vec<&str> = style.split(';').collect();

    let raised = declarations.contains(&RAISED);

    let kept: Vec<&str> = declarations
        .into_iter()
        .filter(|d| !is_presentational(d))
        .collect();
    let value = kept.join(";");

    CleanStyle {
        value: if value.trim().is_empty() {
            None
        } else {
            Some(value)
        },
        raised,
    }
}
