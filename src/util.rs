//! Text and terminal color helpers used by the preview.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Color;

/// Maps a color to the nearest entry of the ANSI 256-color palette.
///
/// Alpha is ignored; grays use the 24-step grayscale ramp.
///
/// # Example
///
/// ```rust
/// use statestyle::{util::nearest_ansi256, Color};
///
/// assert_eq!(nearest_ansi256(Color::rgb(255, 0, 0)), 196);
/// assert_eq!(nearest_ansi256(Color::BLACK), 16);
/// ```
pub fn nearest_ansi256(color: Color) -> u8 {
    let (r, g, b) = color.to_rgb();
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            level => 232 + ((level as u16 - 8) * 24 / 247) as u8,
        };
    }
    let cube = |channel: u8| (channel as u16 * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

/// Shortens `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pads `s` with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_ansi256_grayscale() {
        assert_eq!(nearest_ansi256(Color::BLACK), 16);
        assert_eq!(nearest_ansi256(Color::WHITE), 231);
        let mid = nearest_ansi256(Color::rgb(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_nearest_ansi256_color_cube() {
        assert_eq!(nearest_ansi256(Color::rgb(0, 255, 0)), 46);
        assert_eq!(nearest_ansi256(Color::rgb(0, 0, 255)), 21);
    }

    #[test]
    fn test_nearest_ansi256_ignores_alpha() {
        assert_eq!(
            nearest_ansi256(Color::rgba(0, 0, 255, 0)),
            nearest_ansi256(Color::rgb(0, 0, 255))
        );
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Helvetica", 20), "Helvetica");
        assert_eq!(truncate_to_width("Helvetica", 5), "Helv…");
        assert_eq!(truncate_to_width("Helvetica", 0), "…");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語フォント", 6), "日本…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
        assert_eq!(pad_to_width("日本", 5), "日本 ");
    }
}
