//! Sticky colors
//!
//! Colors are CSS hex strings. They are normalized to lowercase so the
//! used-colors list can be de-duplicated by plain string equality.

use super::error::{DomainError, DomainResult};

/// Palette offered before the user has picked anything
pub const DEFAULT_PALETTE: [&str; 6] = ["#4c90e1", "#50aec7", "#89d2a4", "#ed706a", "#f4b450", "#ec5fa1"];

/// Validate a `#rgb` / `#rrggbb` color and return it as lowercase `#rrggbb`.
///
/// Short colors are expanded since `<input type="color">` only accepts the
/// six-digit form.
pub fn normalize_color(raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('#')
        .ok_or_else(|| DomainError::InvalidInput(format!("color `{}` must start with '#'", trimmed)))?;

    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DomainError::InvalidInput(format!("color `{}` is not a hex color", trimmed)));
    }

    let digits = digits.to_ascii_lowercase();
    if digits.len() == 3 {
        return Ok(digits.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        }));
    }
    Ok(format!("#{}", digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_color("#ED706A").unwrap(), "#ed706a");
        assert_eq!(normalize_color("  #AbCDeF ").unwrap(), "#abcdef");
    }

    #[test]
    fn test_normalize_expands_short_form() {
        assert_eq!(normalize_color("#fff").unwrap(), "#ffffff");
        assert_eq!(normalize_color("#A0c").unwrap(), "#aa00cc");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_color("red").is_err());
        assert!(normalize_color("#12345").is_err());
        assert!(normalize_color("#gggggg").is_err());
    }

    #[test]
    fn test_default_palette_is_normalized() {
        for color in DEFAULT_PALETTE {
            assert_eq!(normalize_color(color).unwrap(), color);
        }
    }
}
