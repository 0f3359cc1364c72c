use once_cell::sync::Lazy;
use regex::Regex;
use markup5ever_rcdom::Handle;

use crate::{
    error::{ConvertError, Result},
    markup::{
        font::{self, FontHandler, FontTable},
        style::{self, IGNORED_ATTRIBUTES},
        tree,
    },
};

/// Starts a headword; a <sup> holding it is a wrapper, not a superscript.
pub const HEADWORD_MARK: char = '♠';

const METRIC_CONVERTER: &str = "st1:metricconverter";

/// Flattens one paragraph to the inline vocabulary of the dictionary lines:
/// `<b>`, `<i>`, `<sup>`, `<br/>`, text and substituted glyphs.
///
/// Walks the paragraph in pre-order without recursion because wrappers are
/// removed from the tree while it is being walked. Anything that is not known
/// to be noise, a wrapper, or inline markup is an error.
pub fn normalize_paragraph(paragraph: &Handle, fonts: &FontTable) -> Result<String> {
    let mut cursor = tree::first_child(paragraph);
    while let Some(node) = cursor {
        cursor = visit(paragraph, node, fonts)?;
    }

    let html = tree::inner_html(paragraph).map_err(|e| {
        ConvertError::structural(format!("serialization failed: {}", e), tree::text_content(paragraph))
    })?;

    Ok(flatten(&html))
}

// Returns the next cursor.
fn visit(paragraph: &Handle, node: Handle, fonts: &FontTable) -> Result<Option<Handle>> {
    let node = strip_presentational(paragraph, node)?;

    if let Some(text) = tree::text(&node) {
        if text.contains('\u{a0}') {
            tree::set_text(&node, &text.replace('\u{a0}', " "));
        }
    }

    match tree::node_name(&node) {
        "span" | METRIC_CONVERTER | "o:p" | "u" | "a" | "sup" => {
            apply_font(paragraph, &node, fonts)?;

            let name = tree::node_name(&node);
            if tree::has_attributes(&node) && name != METRIC_CONVERTER {
                return Err(ConvertError::structural(
                    format!(
                        "attributes {:?} on <{}>",
                        tree::attribute_names(&node),
                        name
                    ),
                    tree::text_content(paragraph),
                ));
            }

            if name != "sup" || wraps_headword_mark(&node) {
                let first = tree::promote_children(&node).ok_or_else(|| {
                    ConvertError::structural(
                        format!("detached <{}>", name),
                        tree::text_content(paragraph),
                    )
                })?;
                return Ok(Some(first));
            }
        }

        "br" | "b" | "i" | "#text" | "#comment" => {
            if tree::has_attributes(&node) {
                return Err(ConvertError::structural(
                    format!(
                        "attributes {:?} on <{}>",
                        tree::attribute_names(&node),
                        tree::node_name(&node)
                    ),
                    tree::text_content(paragraph),
                ));
            }
        }

        name => {
            return Err(ConvertError::structural(
                format!("tag <{}>", name),
                tree::text_content(paragraph),
            ))
        }
    }

    Ok(tree::next_in_preorder(paragraph, &node))
}

fn strip_presentational(paragraph: &Handle, node: Handle) -> Result<Handle> {
    let mut node = node;

    if let Some(value) = tree::attribute(&node, "style") {
        let clean = style::clean_style(&value);

        if clean.raised {
            node = tree::retag(&node, "sup").ok_or_else(|| {
                ConvertError::structural("raised node outside the tree", tree::text_content(paragraph))
            })?;
        }

        match clean.value {
            Some(value) => tree::set_attribute(&node, "style", &value),
            None => tree::remove_attribute(&node, "style"),
        }
    }

    for name in IGNORED_ATTRIBUTES {
        tree::remove_attribute(&node, name);
    }

    Ok(node)
}

fn wraps_headword_mark(node: &Handle) -> bool {
    tree::first_child(node)
        .and_then(|c| tree::text(&c))
        .map_or(false, |t| t.contains(HEADWORD_MARK))
}

fn apply_font(paragraph: &Handle, node: &Handle, fonts: &FontTable) -> Result<()> {
    let Some(style) = tree::attribute(node, "style") else {
        return Ok(());
    };
    let Some(handler) = fonts.get(&style) else {
        return Ok(());
    };

    let texts: Vec<Handle> = node
        .children
        .borrow()
        .iter()
        .filter(|c| tree::is_text(c))
        .cloned()
        .collect();
    let first = texts.first();

    let missing_text = || {
        ConvertError::structural(
            format!("no text under {}", style),
            tree::text_content(paragraph),
        )
    };

    match handler {
        FontHandler::Glyphs { table, required } => match first {
            Some(text_node) => {
                let text = tree::text(text_node).unwrap_or_default();
                let mapped = table.map(&text).map_err(|glyph| ConvertError::GlyphMapping {
                    font: style.clone(),
                    glyph,
                    paragraph: tree::text_content(paragraph),
                })?;
                tree::set_text(text_node, &mapped);
            }
            None if *required => return Err(missing_text()),
            None => {}
        },

        FontHandler::Accent(mark) => {
            if let Some(text_node) = first {
                let text = tree::text(text_node).unwrap_or_default();
                let accented = font::insert_after_first_char(&text, *mark).ok_or_else(missing_text)?;
                tree::set_text(text_node, &accented);
            }
        }

        FontHandler::Blank => {
            let [text_node] = texts.as_slice() else {
                return Err(ConvertError::structural(
                    format!("{} text runs under {}", texts.len(), style),
                    tree::text_content(paragraph),
                ));
            };
            let text = tree::text(text_node).unwrap_or_default();
            if !text.trim().is_empty() {
                return Err(ConvertError::structural(
                    format!("text {:?} under {}", text, style),
                    tree::text_content(paragraph),
                ));
            }
        }

        FontHandler::Review => {
            let text_node = first.ok_or_else(missing_text)?;
            let text = tree::text(text_node).unwrap_or_default();
            tree::set_text(text_node, &font::review(&text));
        }
    }

    tree::remove_attribute(node, "style");
    Ok(())
}

fn flatten(html: &str) -> String {
    static REGEX_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

    REGEX_WHITESPACE
        .replace_all(html, " ")
        .replace("<i> </i>", " ")
        .replace("<i>\u{ad}</i>", "")
        .replace("<b>\u{ad}</b>", "")
        .replace("</b><b>", "")
        .replace("</i><i>", "")
        .replace("<br>", "<br/>")
}
