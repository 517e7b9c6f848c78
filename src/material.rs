//! Render material descriptions handed to the host.

use alloc::string::String;

/// 24-bit RGB colour, `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const DARK_GREY: Color = Color(0x222222);
}

/// A texture the host should load for the cloth.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureSource {
    pub url: String,
    pub flip_y: bool,
    pub anisotropy: u8,
}

impl TextureSource {
    pub fn new(url: impl Into<String>) -> Self {
        TextureSource { url: url.into(), flip_y: false, anisotropy: 16 }
    }
}

/// Cloth surface variant, resolved once when the cloth is mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialConfig {
    Textured(TextureSource),
    Flat(Color),
}

impl MaterialConfig {
    /// Textured when a source is given, plain white otherwise.
    pub fn resolve(texture_source: Option<&str>) -> Self {
        match texture_source {
            Some(url) => MaterialConfig::Textured(TextureSource::new(url)),
            None => MaterialConfig::Flat(Color::WHITE),
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, MaterialConfig::Textured(_))
    }
}

/// Phong shading parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phong {
    pub shininess: f32,
    pub specular: Color,
    pub emissive: Option<(Color, f32)>,
    pub double_sided: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Phong {
    /// Soft sheen, visible from both faces.
    pub fn cloth() -> Self {
        Phong {
            shininess: 100.0,
            specular: Color::DARK_GREY,
            emissive: None,
            double_sided: true,
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    /// Glossy, faintly glowing white.
    pub fn pole() -> Self {
        Phong {
            shininess: 200.0,
            specular: Color::WHITE,
            emissive: Some((Color::WHITE, 0.15)),
            double_sided: false,
            cast_shadow: true,
            receive_shadow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_yields_flat_white() {
        assert_eq!(MaterialConfig::resolve(None), MaterialConfig::Flat(Color::WHITE));
    }

    #[test]
    fn texture_settings() {
        match MaterialConfig::resolve(Some("/client/cloth.png")) {
            MaterialConfig::Textured(t) => {
                assert_eq!(t.url, "/client/cloth.png");
                assert!(!t.flip_y);
                assert_eq!(t.anisotropy, 16);
            }
            other => panic!("expected a textured material, got {:?}", other),
        }
    }
}
