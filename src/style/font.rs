//! Font descriptors and line limits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Family name used when no family is given.
pub const SYSTEM_FONT_FAMILY: &str = "system";

/// Point size of the default font.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }
}

/// A font request handed to the platform's text system.
///
/// The descriptor only names a font; loading and rasterizing it is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
        }
    }

    /// The system font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(SYSTEM_FONT_FAMILY, size)
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns `true` when the size is finite and positive.
    pub fn has_valid_size(&self) -> bool {
        self.size.is_finite() && self.size > 0.0
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::system(DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        if self.weight != FontWeight::Regular {
            write!(f, " {}", self.weight.as_str())?;
        }
        Ok(())
    }
}

/// Maximum number of text lines; zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineLimit(pub u32);

impl LineLimit {
    pub const UNLIMITED: LineLimit = LineLimit(0);
    pub const SINGLE: LineLimit = LineLimit(1);

    pub fn is_unlimited(self) -> bool {
        self.0 == 0
    }

    /// The line limit, or `None` when unlimited.
    pub fn limit(self) -> Option<u32> {
        (!self.is_unlimited()).then_some(self.0)
    }
}

impl Default for LineLimit {
    fn default() -> Self {
        LineLimit::SINGLE
    }
}

impl From<u32> for LineLimit {
    fn from(lines: u32) -> Self {
        LineLimit(lines)
    }
}

impl fmt::Display for LineLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit() {
            Some(n) => write!(f, "{}", n),
            None => f.write_str("unlimited"),
        }
    }
}
