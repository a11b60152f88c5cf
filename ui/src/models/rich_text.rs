//! Rich-text fields from the CMS blocks editor.
//!
//! A field arrives either as a plain string (older schemas, short text
//! fields) or as an array of block nodes whose inline children carry the
//! text. [`RichText`] captures both shapes; anything else lands in
//! [`RichText::Other`] and reads as empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RichText {
    Plain(String),
    Blocks(Vec<Block>),
    Other(Value),
}

/// A paragraph, heading, list, ... Only the inline text matters for display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Block {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Inline>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Inline {
    #[serde(default)]
    pub text: Option<String>,
}

impl Block {
    /// Inline texts concatenated without separators.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .flatten()
            .filter_map(|inline| inline.text.as_deref())
            .collect()
    }
}

impl RichText {
    pub fn paragraph(text: &str) -> Self {
        Self::Blocks(vec![Block {
            kind: Some("paragraph".to_string()),
            children: Some(vec![Inline {
                text: Some(text.to_string()),
            }]),
        }])
    }

    /// Display text: strings as-is, blocks joined by a single space.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Blocks(blocks) => blocks
                .iter()
                .map(Block::text)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Other(_) => String::new(),
        }
    }
}

/// Normalize an optional rich-text field; absent or `null` reads as empty.
pub fn extract_text(value: Option<&RichText>) -> String {
    value.map(RichText::plain_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Option<RichText> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn null_and_absent_are_empty() {
        assert_eq!(extract_text(None), "");
        assert_eq!(extract_text(parse(json!(null)).as_ref()), "");
    }

    #[test]
    fn strings_pass_through_and_are_idempotent() {
        let value = parse(json!("Remote teams, fast.")).unwrap();
        let once = extract_text(Some(&value));
        let twice = extract_text(Some(&RichText::Plain(once.clone())));
        assert_eq!(once, "Remote teams, fast.");
        assert_eq!(once, twice);
    }

    #[test]
    fn blocks_join_inline_text_with_single_space() {
        let value = parse(json!([
            { "type": "paragraph", "children": [
                { "type": "text", "text": "Hire " },
                { "type": "text", "text": "vetted", "bold": true },
                { "type": "text", "text": " engineers." }
            ]},
            { "type": "paragraph", "children": [{ "type": "text", "text": "In days." }] }
        ]))
        .unwrap();
        assert_eq!(value.plain_text(), "Hire vetted engineers. In days.");
    }

    #[test]
    fn blocks_without_children_contribute_empty_text() {
        let value = parse(json!([
            { "type": "paragraph" },
            { "type": "paragraph", "children": [{ "text": "Only" }] }
        ]))
        .unwrap();
        assert_eq!(value.plain_text(), " Only");
    }

    #[test]
    fn unexpected_shapes_read_as_empty() {
        for raw in [json!(42), json!(true), json!({ "text": "nope" }), json!([1, 2])] {
            let value = parse(raw.clone()).unwrap();
            assert!(matches!(value, RichText::Other(_)), "{raw}");
            assert_eq!(value.plain_text(), "", "{raw}");
        }
    }
}
