//! Declarative style sheets.
//!
//! A [`StyleSheet`] describes a [`StyleTable`] in YAML or JSON:
//!
//! ```yaml
//! fallback: strict          # or inherit-normal
//! disabled_fallback:        # per-attribute, overrides `fallback`
//!   background_color: dim-default(0.5)
//!   font: inherit-normal
//! defaults:
//!   background_color: black
//! normal:
//!   background_color: "#3478f6"
//!   title_color: white
//!   font: { family: Helvetica, size: 17, weight: bold }
//!   line_count: 2
//! highlighted:
//!   background_color: "#1f5fd1"
//! disabled:
//!   title_color: "#ffffff80"
//! ```
//!
//! Every section is optional. Values stay as text until [`StyleSheet::table`]
//! validates them, so a bad color is reported with the section and attribute
//! it came from instead of a parser position.

mod error;

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

pub use error::StyleSheetError;

use crate::control::StatefulControl;
use crate::resolver::{DisabledRule, FallbackPolicy, StateStyleResolver};
use crate::state::InteractionState;
use crate::style::{
    AttributeKind, BackgroundColor, Color, Font, FontDescriptor, FontWeight, LineCount, LineLimit,
    TitleColor, DEFAULT_FONT_SIZE, SYSTEM_FONT_FAMILY,
};
use crate::table::StyleTable;

/// Font entry in a style sheet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    fn to_descriptor(&self, scope: &str) -> Result<FontDescriptor, StyleSheetError> {
        let family = self.family.as_deref().unwrap_or(SYSTEM_FONT_FAMILY);
        if family.trim().is_empty() {
            return Err(StyleSheetError::InvalidFont {
                scope: scope.to_string(),
                reason: "family must not be empty".to_string(),
            });
        }
        let font = FontDescriptor::new(family, self.size.unwrap_or(DEFAULT_FONT_SIZE))
            .weight(self.weight);
        if !font.has_valid_size() {
            return Err(StyleSheetError::InvalidFont {
                scope: scope.to_string(),
                reason: format!("size must be a positive number, got {}", font.size),
            });
        }
        Ok(font)
    }
}

/// Attribute values for one section of a style sheet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateStyles {
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(default)]
    pub line_count: Option<u32>,
}

/// Parsed, not yet validated, values of one section.
struct ParsedStyles {
    background_color: Option<Color>,
    title_color: Option<Color>,
    font: Option<FontDescriptor>,
    line_count: Option<LineLimit>,
}

impl StateStyles {
    fn parse(&self, scope: &str) -> Result<ParsedStyles, StyleSheetError> {
        let color = |text: &Option<String>, attribute: AttributeKind| {
            text.as_deref()
                .map(|t| {
                    t.parse::<Color>()
                        .map_err(|source| StyleSheetError::InvalidColor {
                            scope: scope.to_string(),
                            attribute,
                            source,
                        })
                })
                .transpose()
        };

        Ok(ParsedStyles {
            background_color: color(&self.background_color, AttributeKind::BackgroundColor)?,
            title_color: color(&self.title_color, AttributeKind::TitleColor)?,
            font: self
                .font
                .as_ref()
                .map(|f| f.to_descriptor(scope))
                .transpose()?,
            line_count: self.line_count.map(LineLimit),
        })
    }
}

/// Per-attribute disabled rules; unset attributes follow the sheet's policy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisabledFallbacks {
    #[serde(default)]
    pub background_color: Option<DisabledRule>,
    #[serde(default)]
    pub title_color: Option<DisabledRule>,
    #[serde(default)]
    pub font: Option<DisabledRule>,
    #[serde(default)]
    pub line_count: Option<DisabledRule>,
}

impl DisabledFallbacks {
    fn rules(&self) -> impl Iterator<Item = (AttributeKind, DisabledRule)> {
        [
            (AttributeKind::BackgroundColor, self.background_color),
            (AttributeKind::TitleColor, self.title_color),
            (AttributeKind::Font, self.font),
            (AttributeKind::LineCount, self.line_count),
        ]
        .into_iter()
        .filter_map(|(kind, rule)| rule.map(|rule| (kind, rule)))
    }
}

/// A complete style sheet: fallback policy, defaults and per-state overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSheet {
    #[serde(default)]
    pub fallback: FallbackPolicy,
    #[serde(default)]
    pub disabled_fallback: DisabledFallbacks,
    #[serde(default)]
    pub defaults: StateStyles,
    #[serde(default)]
    pub normal: StateStyles,
    #[serde(default)]
    pub highlighted: StateStyles,
    #[serde(default)]
    pub selected: StateStyles,
    #[serde(default)]
    pub disabled: StateStyles,
}

impl StyleSheet {
    pub fn from_yaml_str(source: &str) -> Result<Self, StyleSheetError> {
        // An empty document deserializes as unit, not as an empty map
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, StyleSheetError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a sheet from disk; `.json` files are JSON, anything else YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleSheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StyleSheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let sheet = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };
        debug!("loaded style sheet {}", path.display());
        Ok(sheet)
    }

    /// The section holding overrides for `state`.
    pub fn state(&self, state: InteractionState) -> &StateStyles {
        match state {
            InteractionState::Normal => &self.normal,
            InteractionState::Highlighted => &self.highlighted,
            InteractionState::Selected => &self.selected,
            InteractionState::Disabled => &self.disabled,
        }
    }

    /// Validates every value and builds the style table.
    pub fn table(&self) -> Result<StyleTable, StyleSheetError> {
        let mut table = StyleTable::new();

        let defaults = self.defaults.parse("defaults")?;
        if let Some(color) = defaults.background_color {
            table.set_default(BackgroundColor, color);
        }
        if let Some(color) = defaults.title_color {
            table.set_default(TitleColor, color);
        }
        if let Some(font) = defaults.font {
            table.set_default(Font, font);
        }
        if let Some(lines) = defaults.line_count {
            table.set_default(LineCount, lines);
        }

        for state in InteractionState::ALL {
            let parsed = self.state(state).parse(state.as_str())?;
            if let Some(color) = parsed.background_color {
                table.set(BackgroundColor, state, color);
            }
            if let Some(color) = parsed.title_color {
                table.set(TitleColor, state, color);
            }
            if let Some(font) = parsed.font {
                table.set(Font, state, font);
            }
            if let Some(lines) = parsed.line_count {
                table.set(LineCount, state, lines);
            }
        }

        Ok(table)
    }

    /// The sheet's policy with its per-attribute disabled rules applied.
    pub fn resolver(&self) -> StateStyleResolver {
        let mut resolver = StateStyleResolver::with_policy(self.fallback);
        for (kind, rule) in self.disabled_fallback.rules() {
            debug!("{} uses disabled rule {}", kind, rule);
            resolver = resolver.with_disabled_rule(kind, rule);
        }
        resolver
    }

    /// Builds a control styled by this sheet.
    pub fn control(&self) -> Result<StatefulControl, StyleSheetError> {
        Ok(StatefulControl::with_resolver(self.table()?, self.resolver()))
    }
}
