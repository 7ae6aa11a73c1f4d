//! Color parsing and formatting for attribute values.

use vello::peniko::Color;

use crate::error::{StyleError, StyleResult};

/// Gray as used by the default track color (`#888888`).
pub const GRAY: Color = Color::from_rgb8(0x88, 0x88, 0x88);

/// Red as used by the default progress color (`#ff0000`).
pub const RED: Color = Color::from_rgb8(0xff, 0x00, 0x00);

/// Parse a color from `#rgb`, `#rrggbb`, `#rrggbbaa` or one of the named colors.
pub fn parse_color(value: &str) -> StyleResult<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(value, hex);
    }

    named_color(value).ok_or_else(|| StyleError::invalid_color(value, "unknown color name"))
}

/// Format a color as a lowercase hex string, omitting alpha when opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

fn parse_hex(raw: &str, hex: &str) -> StyleResult<Color> {
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| StyleError::invalid_color(raw, "invalid hex digit"))
    };

    // from_str_radix alone would accept a leading '+'
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleError::invalid_color(raw, "invalid hex digit"));
    }

    match hex.len() {
        3 => {
            let expand = |i: usize| channel(i..i + 1).map(|v| v * 0x11);
            Ok(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        },
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(StyleError::invalid_color(
            raw,
            "hex color must be 3, 6 or 8 characters",
        )),
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::from_rgb8(0x00, 0x00, 0x00),
        "darkgray" | "darkgrey" => Color::from_rgb8(0x44, 0x44, 0x44),
        "gray" | "grey" => GRAY,
        "lightgray" | "lightgrey" => Color::from_rgb8(0xcc, 0xcc, 0xcc),
        "white" => Color::from_rgb8(0xff, 0xff, 0xff),
        "red" => RED,
        "green" => Color::from_rgb8(0x00, 0xff, 0x00),
        "blue" => Color::from_rgb8(0x00, 0x00, 0xff),
        "yellow" => Color::from_rgb8(0xff, 0xff, 0x00),
        "cyan" => Color::from_rgb8(0x00, 0xff, 0xff),
        "magenta" => Color::from_rgb8(0xff, 0x00, 0xff),
        "transparent" => Color::from_rgba8(0x00, 0x00, 0x00, 0x00),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(to_hex(parse_color("#f80").unwrap()), "#ff8800");
        assert_eq!(to_hex(parse_color("#123456").unwrap()), "#123456");
        assert_eq!(to_hex(parse_color("#12345680").unwrap()), "#12345680");
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(to_hex(parse_color("Gray").unwrap()), "#888888");
        assert_eq!(to_hex(parse_color("red").unwrap()), "#ff0000");
        assert_eq!(to_hex(parse_color("transparent").unwrap()), "#00000000");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_color("#12"),
            Err(StyleError::InvalidColor { .. })
        ));
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("#+f+f+f").is_err());
        assert!(parse_color("#+1+2+3+4").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
    }
}
