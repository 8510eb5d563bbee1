use crate::config::Separators;
use crate::flags::FormatFlags;
use crate::parser::Element;
use crate::renderer::sink::StyledLabel;
use crate::renderer::traits::*;

/// Composes labels with one set of separators.
#[derive(Debug, Clone, Default)]
pub struct ElementLabels {
    separators: Separators,
}

impl ElementLabels {
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn label(&self, element: &Element, flags: FormatFlags) -> String {
        compose_label(element, flags, &self.separators)
    }

    pub fn styled_label(&self, element: &Element, flags: FormatFlags) -> StyledLabel {
        compose_styled_label(element, flags, &self.separators)
    }
}

/// The label of `element` as plain text. Never fails; degraded inputs give degraded labels.
pub fn compose_label(element: &Element, flags: FormatFlags, separators: &Separators) -> String {
    let mut output = String::new();
    element.write_label(&LabelContext::new(flags, separators), &mut output);
    output
}

/// The same label as [`compose_label`], split into plain and qualifier runs.
pub fn compose_styled_label(element: &Element, flags: FormatFlags, separators: &Separators) -> StyledLabel {
    let mut output = StyledLabel::new();
    element.write_label(&LabelContext::new(flags, separators), &mut output);
    output
}
