//! Light and dark style selection.
//!
//! This module provides:
//!
//! - [`AdaptiveStyle`]: Light/dark style table pairs with OS detection
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`set_color_mode_detector`]: Replaces OS detection, e.g. in tests

mod adaptive;

pub use adaptive::{detect_color_mode, set_color_mode_detector, AdaptiveStyle, ColorMode};
