use crate::error::{PhosphorError, Result};
use std::fmt;
use std::str::FromStr;

/// Gaussian radius used for the glow layer
pub const GLOW_RADIUS: u32 = 5;

/// Alpha of the black scanline bands (out of 255)
pub const SCANLINE_ALPHA: u8 = 40;

/// Fixed contrast factor applied as the last stage
pub const CONTRAST_FACTOR: f32 = 1.2;

/// Foreground tint palettes
///
/// Only `fg` feeds the transform. `bg` and `select` mirror the companion
/// terminal theme and are kept for parity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// Mint phosphor (#ABFFE9)
    #[default]
    Mobile,
    /// Periwinkle phosphor (#99F)
    Shader,
}

impl Palette {
    pub const ALL: [Palette; 2] = [Palette::Mobile, Palette::Shader];

    /// Foreground tint, the only color the pipeline reads
    pub fn fg(self) -> [u8; 3] {
        match self {
            Palette::Mobile => [171, 255, 233],
            Palette::Shader => [153, 153, 255],
        }
    }

    pub fn bg(self) -> [u8; 3] {
        match self {
            Palette::Mobile => [1, 10, 19],
            Palette::Shader => [17, 17, 17],
        }
    }

    pub fn select(self) -> [u8; 3] {
        match self {
            Palette::Mobile => [238, 255, 255],
            Palette::Shader => [255, 255, 255],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Mobile => "mobile",
            Palette::Shader => "shader",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = PhosphorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Palette::Mobile),
            "shader" => Ok(Palette::Shader),
            _ => Err(PhosphorError::InvalidConfig(format!(
                "unknown palette '{}', expected 'mobile' or 'shader'",
                s
            ))),
        }
    }
}

/// Configuration for CRT stylization
#[derive(Debug, Clone, PartialEq)]
pub struct PhosphorConfig {
    /// Foreground tint
    pub palette: Palette,

    /// Effects
    pub scanlines: bool, // default true
    pub glow: bool,      // default true

    /// Uniform resize factor applied before remapping, default 1.0
    pub scale: f64,

    /// Accepted for compatibility; no stage reads it
    pub transparent_background: bool, // default true
}

impl Default for PhosphorConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Mobile,

            // Effects
            scanlines: true,
            glow: true,

            scale: 1.0,
            transparent_background: true,
        }
    }
}

impl PhosphorConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PhosphorError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
