use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::parser::types::*;

// Parser for converting element snapshots (JSON) to typed elements
pub struct ElementParser<'a> {
    document: &'a Value,
}

impl<'a> ElementParser<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self { document }
    }

    /// Parses a document holding a single element object or an array of them.
    pub fn parse_elements(&self) -> Result<Vec<Element>> {
        match self.document {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    self.parse_element(item)
                        .with_context(|| format!("element #{} is malformed", index))
                })
                .collect(),
            Value::Object(_) => Ok(vec![self.parse_element(self.document)?]),
            other => bail!("expected an element object or an array, found {}", kind_of(other)),
        }
    }

    fn parse_element(&self, item: &Value) -> Result<Element> {
        let Some(object) = item.as_object() else {
            bail!("expected an element object, found {}", kind_of(item));
        };

        let kind = object.get("kind").and_then(|k| k.as_str()).unwrap_or("");

        // Unknown kinds still get a label: their bare name
        if !KNOWN_KINDS.contains(&kind) {
            let name = object
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("")
                .to_string();
            debug!(kind, name = name.as_str(), "no renderer for element kind");
            return Ok(Element::Other(OtherElement {
                kind: kind.to_string(),
                name,
            }));
        }

        let element = Element::deserialize(item)
            .with_context(|| format!("invalid `{}` element", kind))?;
        Ok(element)
    }
}

/// Reads and parses an element snapshot from JSON text.
pub fn parse_elements(json: &str) -> Result<Vec<Element>> {
    let document: Value = serde_json::from_str(json).context("element snapshot is not valid JSON")?;
    ElementParser::new(&document).parse_elements()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
