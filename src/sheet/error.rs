//! Style sheet loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::style::{AttributeKind, ColorParseError};

/// Error returned when a style sheet cannot be loaded or validated.
///
/// `scope` names the sheet section the bad value came from: `defaults` or
/// one of the interaction states.
#[derive(Debug, Error)]
pub enum StyleSheetError {
    #[error("failed to read style sheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML style sheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON style sheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{scope}.{attribute}: {source}")]
    InvalidColor {
        scope: String,
        attribute: AttributeKind,
        source: ColorParseError,
    },

    #[error("{scope}.font: {reason}")]
    InvalidFont { scope: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = StyleSheetError::InvalidColor {
            scope: "highlighted".to_string(),
            attribute: AttributeKind::TitleColor,
            source: "#zz".parse::<crate::Color>().unwrap_err(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("highlighted.title_color:"));
        assert!(msg.contains("#zz"));
    }

    #[test]
    fn test_invalid_font_display() {
        let err = StyleSheetError::InvalidFont {
            scope: "defaults".to_string(),
            reason: "size must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "defaults.font: size must be positive");
    }
}
