//! Resolved styles for one interaction state.

use crate::style::{AttributeKind, Color, FontDescriptor, LineLimit};

/// The effective value of every attribute, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub background_color: Color,
    pub title_color: Color,
    pub font: FontDescriptor,
    pub line_count: LineLimit,
}

impl Appearance {
    /// Lists the attributes whose values differ from `previous`.
    ///
    /// The result follows [`AttributeKind::ALL`] order, so a renderer can
    /// apply the changes deterministically.
    pub fn changes(&self, previous: &Appearance) -> Vec<AttributeKind> {
        AttributeKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                AttributeKind::BackgroundColor => {
                    self.background_color != previous.background_color
                }
                AttributeKind::TitleColor => self.title_color != previous.title_color,
                AttributeKind::Font => self.font != previous.font,
                AttributeKind::LineCount => self.line_count != previous.line_count,
            })
            .collect()
    }
}
