use crate::config::Separators;
use crate::flags::FormatFlags;
use serde::Serialize;

/// Configuration context for one label composition
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    pub flags: FormatFlags,
    pub separators: &'a Separators,
}

impl<'a> LabelContext<'a> {
    pub fn new(flags: FormatFlags, separators: &'a Separators) -> Self {
        Self { flags, separators }
    }

    /// Same separators, different options. Used for owner labels.
    pub fn with_flags(&self, flags: FormatFlags) -> Self {
        Self {
            flags,
            separators: self.separators,
        }
    }
}

/// How a piece of label text should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Plain,
    /// Owner text a viewer may render muted.
    Qualifier,
}

/// Receives label text in order. Both back ends see identical calls.
pub trait LabelSink {
    fn append(&mut self, text: &str, style: Style);

    fn plain(&mut self, text: &str) {
        self.append(text, Style::Plain);
    }
}

/// Core composition trait for all labelled elements
pub trait Label {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink);
}
