use std::{fmt, str::FromStr};

use thiserror::Error;

/// Number of interleaved channels in a decoded source buffer.
pub const SOURCE_CHANNELS: usize = 4;

/// Channel layout of the converted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    Rgb,
    #[default]
    Rgba,
}

impl ChannelMode {
    pub fn channel_count(self) -> usize {
        match self {
            ChannelMode::Rgb => 3,
            ChannelMode::Rgba => 4,
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown channel mode `{0}`, expected `rgb` or `rgba`")]
pub struct ParseChannelModeError(String);

impl FromStr for ChannelMode {
    type Err = ParseChannelModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rgb") {
            Ok(ChannelMode::Rgb)
        } else if s.eq_ignore_ascii_case("rgba") {
            Ok(ChannelMode::Rgba)
        } else {
            Err(ParseChannelModeError(s.to_owned()))
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMode::Rgb => f.write_str("rgb"),
            ChannelMode::Rgba => f.write_str("rgba"),
        }
    }
}

/// Decoded linear light image, interleaved RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearImage {
    width: u32,
    height: u32,
    pixels: Vec<f32>,
}

impl LinearImage {
    /// # Panics
    ///
    /// Panics if `pixels` doesn't hold exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<f32>) -> Self {
        assert_eq!(
            pixels.len(),
            sample_count(width, height, SOURCE_CHANNELS),
            "source buffer doesn't match image dimensions"
        );

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }
}

/// 8-bit display encoded image ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdrImage {
    width: u32,
    height: u32,
    mode: ChannelMode,
    pixels: Vec<u8>,
}

impl LdrImage {
    /// # Panics
    ///
    /// Panics if `pixels` doesn't hold exactly `width * height` pixels of `mode`.
    pub fn new(width: u32, height: u32, mode: ChannelMode, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            sample_count(width, height, mode.channel_count()),
            "destination buffer doesn't match image dimensions"
        );

        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

pub(crate) fn sample_count(width: u32, height: u32, channels: usize) -> usize {
    width as usize * height as usize * channels
}
