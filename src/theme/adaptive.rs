//! Style tables that follow the system color mode.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use crate::sheet::{StyleSheet, StyleSheetError};
use crate::table::StyleTable;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of style tables selected by the user's display mode.
///
/// # Example
///
/// ```rust
/// use statestyle::{
///     AdaptiveStyle, BackgroundColor, Color, ColorMode, InteractionState, StyleTable,
/// };
///
/// let light = StyleTable::new().with(BackgroundColor, InteractionState::Normal, Color::WHITE);
/// let dark = StyleTable::new().with(BackgroundColor, InteractionState::Normal, Color::BLACK);
/// let adaptive = AdaptiveStyle::new(light, dark);
///
/// let table = adaptive.for_mode(ColorMode::Dark);
/// assert_eq!(table.get(BackgroundColor, InteractionState::Normal), Some(&Color::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveStyle {
    light: StyleTable,
    dark: StyleTable,
}

impl AdaptiveStyle {
    pub fn new(light: StyleTable, dark: StyleTable) -> Self {
        Self { light, dark }
    }

    /// Builds both tables from style sheets.
    pub fn from_sheets(light: &StyleSheet, dark: &StyleSheet) -> Result<Self, StyleSheetError> {
        Ok(Self::new(light.table()?, dark.table()?))
    }

    pub fn for_mode(&self, mode: ColorMode) -> &StyleTable {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The table for the color mode reported by the current detector.
    pub fn table(&self) -> &StyleTable {
        self.for_mode(detect_color_mode())
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to decide between light and dark styles.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
