/// Linear RGB color with components in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Parse the color notations a page script is likely to hand us:
    /// `#rgb`, `#rrggbb`, `0xrrggbb`, `rgb(r, g, b)` and a bare decimal number.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex_digits(hex);
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            if hex.len() == 6 {
                return parse_hex_digits(hex);
            }
            return None;
        }
        if let Some(body) = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut parts = body.split(',').map(|p| p.trim().parse::<u8>());
            let (r, g, b) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => (r, g, b),
                _ => return None,
            };
            return Some(Self::from_hex(
                ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
            ));
        }
        s.parse::<u32>()
            .ok()
            .filter(|v| *v <= 0xff_ffff)
            .map(Self::from_hex)
    }
}

fn parse_hex_digits(hex: &str) -> Option<Color> {
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_hex(value)),
        3 => {
            // #rgb expands each nibble: 0xabc -> 0xaabbcc
            let r = (value >> 8) & 0xf;
            let g = (value >> 4) & 0xf;
            let b = value & 0xf;
            Some(Color::from_hex(
                (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11),
            ))
        }
        _ => None,
    }
}

/// Exponential-squared fog: blend factor `1 - exp(-(density * depth)^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogExp2 {
    pub color: Color,
    pub density: f32,
}

impl FogExp2 {
    pub fn new(color: Color, density: f32) -> Self {
        Self { color, density }
    }

    /// Fraction of the fog color mixed in at view-space `depth`.
    #[inline]
    pub fn factor(&self, depth: f32) -> f32 {
        let d = self.density * depth;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}
