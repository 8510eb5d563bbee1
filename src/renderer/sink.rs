use crate::renderer::traits::*;
use serde::Serialize;
use std::fmt;

impl LabelSink for String {
    fn append(&mut self, text: &str, _style: Style) {
        self.push_str(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

/// A label as styled runs of text. Adjacent runs never share a style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyledLabel {
    segments: Vec<Segment>,
}

impl StyledLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text of all runs with the given style, in order.
    pub fn text_with_style(&self, style: Style) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.style == style)
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

impl LabelSink for StyledLabel {
    fn append(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.segments.push(Segment {
                text: text.to_string(),
                style,
            }),
        }
    }
}

impl fmt::Display for StyledLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// Forwards everything as qualifier text.
pub struct QualifierSink<'a> {
    inner: &'a mut dyn LabelSink,
}

impl<'a> QualifierSink<'a> {
    pub fn new(inner: &'a mut dyn LabelSink) -> Self {
        Self { inner }
    }
}

impl LabelSink for QualifierSink<'_> {
    fn append(&mut self, text: &str, _style: Style) {
        self.inner.append(text, Style::Qualifier);
    }
}
