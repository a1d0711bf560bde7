use crate::foundation::core::Rgba8;
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::random::{RandomExt, RandomSource};

/// Five colors shared by every layer of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette([Rgba8; Palette::LEN]);

impl Palette {
    pub const LEN: usize = 5;

    pub const fn new(colors: [Rgba8; Palette::LEN]) -> Self {
        Self(colors)
    }

    /// Parse exactly five hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> StrataResult<Self> {
        if colors.len() != Self::LEN {
            return Err(StrataError::validation(format!(
                "palette must have exactly {} colors, got {}",
                Self::LEN,
                colors.len()
            )));
        }
        let mut out = [Rgba8::BLACK; Self::LEN];
        for (slot, s) in out.iter_mut().zip(colors) {
            *slot = parse_hex(s.as_ref()).map_err(StrataError::validation)?;
        }
        Ok(Self(out))
    }

    pub fn colors(&self) -> &[Rgba8; Palette::LEN] {
        &self.0
    }

    pub fn get(&self, i: usize) -> Option<Rgba8> {
        self.0.get(i).copied()
    }

    /// Uniform pick.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Rgba8 {
        self.0[rng.index(Self::LEN)]
    }
}

impl serde::Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex: Vec<String> = self.0.iter().map(|c| c.to_hex()).collect();
        hex.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(c: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(c, 16).map_err(|_| format!("invalid hex digit \"{c}\""))?;
        Ok(v * 17)
    }

    if !s.is_ascii() {
        return Err(format!("hex color must be ascii, got \"{s}\""));
    }

    let (r, g, b, a) = match s.len() {
        3 | 4 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            let a = if s.len() == 4 {
                hex_nibble(&s[3..4])?
            } else {
                255
            };
            (r, g, b, a)
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 {
                hex_byte(&s[6..8])?
            } else {
                255
            };
            (r, g, b, a)
        }
        _ => {
            return Err(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(Rgba8::rgba(r, g, b, a))
}

const fn hex(v: u32) -> Rgba8 {
    Rgba8::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn pal(v: [u32; 5]) -> Palette {
    Palette::new([hex(v[0]), hex(v[1]), hex(v[2]), hex(v[3]), hex(v[4])])
}

/// Built-in palette set.
pub const BUILTIN_PALETTES: [Palette; 10] = [
    pal([0x264653, 0x2a9d8f, 0xe9c46a, 0xf4a261, 0xe76f51]),
    pal([0x000000, 0x14213d, 0xfca311, 0xe5e5e5, 0xffffff]),
    pal([0xcdb4db, 0xffc8dd, 0xffafcc, 0xbde0fe, 0xa2d2ff]),
    pal([0xd8f3dc, 0xb7e4c7, 0x95d5b2, 0x74c69d, 0x52b788]),
    pal([0xe63946, 0xf1faee, 0xa8dadc, 0x457b9d, 0x1d3557]),
    // vibrant
    pal([0xffbe0b, 0xfb5607, 0xff006e, 0x8338ec, 0x3a86ff]),
    // muted, earthy
    pal([0x006d77, 0x83c5be, 0xedf6f9, 0xffddd2, 0xe29578]),
    // soft, warm
    pal([0xb5838d, 0xe5989b, 0xffb4a2, 0xffcdb2, 0xfff1e6]),
    pal([0x10002b, 0x240046, 0x3c096c, 0x5a189a, 0x7b2cbf]),
    // wine/plum
    pal([0xb7094c, 0xa01a58, 0x892b64, 0x723c70, 0x5c4d7d]),
];

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
