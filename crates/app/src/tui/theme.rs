//! Color handling for contact theming

use ratatui::style::Color;

/// Bubble colors light enough to need dark text on top
const LIGHT_COLORS: [&str; 5] = ["#FFC0CB", "#87CEEB", "#FFDEAD", "#90EE90", "#ADD8E6"];

/// Parse a `#RRGGBB` hex string
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // Length is in bytes; non-ASCII input would split a code point below
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Contact theme color, with a fallback for malformed seed values
pub fn contact_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(Color::Cyan)
}

/// Whether text drawn over this color should be dark
pub fn is_light(hex: &str) -> bool {
    LIGHT_COLORS.iter().any(|c| c.eq_ignore_ascii_case(hex))
}

/// Readable foreground for text drawn over the given background color
pub fn text_on(hex: &str) -> Color {
    if is_light(hex) {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF6347"), Some(Color::Rgb(0xFF, 0x63, 0x47)));
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex_color("FF6347"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(contact_color("nonsense"), Color::Cyan);
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // "é" is two bytes, so this is six bytes but five characters
        assert_eq!(parse_hex_color("#aébbb"), None);
        assert_eq!(parse_hex_color("#ΩΩΩ"), None);
        assert_eq!(contact_color("#aébbb"), Color::Cyan);
    }

    #[test]
    fn test_is_light_ignores_case() {
        assert!(is_light("#ffc0cb"));
        assert!(is_light("#FFC0CB"));
        assert!(!is_light("#DC143C"));
    }

    #[test]
    fn test_text_on() {
        assert_eq!(text_on("#87CEEB"), Color::Black);
        assert_eq!(text_on("#6A5ACD"), Color::White);
    }
}
