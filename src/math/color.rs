use egui::Color32;

use crate::error::ConfigError;

/// sRGB color with components in `[0, 1]`
pub type Rgb = [f32; 3];

pub const BLACK: Rgb = [0.0, 0.0, 0.0];

/// Builds a color from a packed `0xRRGGBB` literal
pub const fn hex_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Parses a CSS-style hex color (`#rgb`, `#rrggbb`, with or without alpha)
///
/// Alpha digits are validated and then ignored, the RGB channels are never
/// scaled by them.
pub fn parse_color(value: &str) -> Result<Rgb, ConfigError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = |e: egui::ecolor::ParseHexColorError| ConfigError::InvalidColor {
        value: value.to_string(),
        reason: format!("{e:?}"),
    };

    let mut color = Color32::from_hex(&format!("#{digits}")).map_err(invalid)?;
    // from_hex premultiplies alpha into the channels, so re-read the
    // validated digits without their alpha part
    if matches!(digits.len(), 4 | 8) {
        let opaque = &digits[..digits.len() / 4 * 3];
        color = Color32::from_hex(&format!("#{opaque}")).map_err(invalid)?;
    }

    Ok([
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    ])
}

/// Formats a color as `#rrggbb`
pub fn to_hex(color: Rgb) -> String {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_red() {
        let rgb = parse_color("#ff0000").unwrap();
        assert_eq!(rgb, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_color_without_hash() {
        let rgb = parse_color("00ff00").unwrap();
        assert_eq!(rgb, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_parse_color_short_form() {
        let rgb = parse_color("#fff").unwrap();
        assert_eq!(rgb, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_color_ignores_alpha() {
        assert_eq!(parse_color("#ff000080").unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(parse_color("#0f08").unwrap(), [0.0, 1.0, 0.0]);
        assert_eq!(parse_color("#33669900").unwrap(), parse_color("#336699").unwrap());
        assert!(parse_color("#ff0000zz").is_err());
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        let err = parse_color("not-a-color").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn test_hex_rgb_matches_parse() {
        assert_eq!(hex_rgb(0xffcc66), parse_color("#ffcc66").unwrap());
    }

    #[test]
    fn test_to_hex_roundtrip() {
        assert_eq!(to_hex(hex_rgb(0x1b2533)), "#1b2533");
    }

    #[test]
    fn test_srgb_linear_inverse() {
        for c in [0.0, 0.02, 0.2, 0.5, 1.0] {
            assert!((linear_to_srgb(srgb_to_linear(c)) - c).abs() < 1e-4);
        }
    }
}
