use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Accent used when nothing is stored
pub const DEFAULT_ACCENT_HEX: &str = "#4A90E2";

/// Triple derived from an accent that cannot be parsed
pub const DEFAULT_ACCENT_RGB: Rgb = Rgb {
    r: 0x4A,
    g: 0x90,
    b: 0xE2,
};

/// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB`. Short form expands each digit.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let digits: Vec<String> = hex.chars().map(|c| format!("{c}{c}")).collect();
            Some(Rgb {
                r: channel(&digits[0])?,
                g: channel(&digits[1])?,
                b: channel(&digits[2])?,
            })
        }
        6 => Some(Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

/// Like `parse_hex`, but never fails: unparsable input gives the default triple.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(DEFAULT_ACCENT_RGB)
}

/// The user's accent color, kept as the hex string they chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentColor {
    hex: String,
}

impl AccentColor {
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Derived triple, recomputed from the hex on every call
    pub fn rgb(&self) -> Rgb {
        hex_to_rgb(&self.hex)
    }

    /// Build from user input, rejecting anything `parse_hex` refuses.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        parse_hex(trimmed)?;
        let hex = if trimmed.starts_with('#') {
            trimmed.to_string()
        } else {
            format!("#{}", trimmed)
        };
        Some(AccentColor { hex })
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor {
            hex: DEFAULT_ACCENT_HEX.to_string(),
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Stored values are taken as-is; a bad value only affects the derived triple.
impl FromStr for AccentColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AccentColor { hex: s.to_string() })
    }
}
