use crate::error::ConfigError;

/// 8-bit RGB color with a floating point alpha, as accepted by canvas fill styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn from_rgb_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, slot) in out.iter_mut().enumerate() {
                    let v = channel(&hex[i..i + 1])?;
                    *slot = v * 17;
                }
                Ok(Self::from_rgb_array(out))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for canvas fill styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Linear `[r, g, b, a]` in 0..1 for GPU vertex data.
    #[inline]
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgba::from_hex("#ffa500").unwrap(), Rgba::rgb(255, 165, 0));
        assert_eq!(Rgba::from_hex("fa0").unwrap(), Rgba::rgb(255, 170, 0));
        assert_eq!(Rgba::from_hex("  #FFFFFF ").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#ff", "#ffa50", "#gggggg", "#ffa5000", "#é12"] {
            assert!(
                matches!(Rgba::from_hex(bad), Err(ConfigError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn css_string_carries_alpha() {
        let c = Rgba::WHITE.with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
    }
}
