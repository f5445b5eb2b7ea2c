use crate::{
    buffer::{sample_count, ChannelMode, LdrImage, LinearImage, SOURCE_CHANNELS},
    transfer,
};

/// Returns the index into an RGBA source buffer that feeds destination sample
/// `dst_index` of a buffer with `channel_count` channels.
///
/// With three channels every fourth source sample (alpha) is skipped.
///
/// # Panics
///
/// Panics if `channel_count` is neither 3 nor 4.
pub fn source_index(dst_index: usize, channel_count: usize) -> usize {
    match channel_count {
        4 => dst_index,
        3 => dst_index + dst_index / 3,
        _ => panic!("unsupported channel count {channel_count}"),
    }
}

/// Scales an encoded value to a byte, rounding half up.
///
/// The float to int cast saturates, so values outside `[0, 1]` clamp to the
/// byte range and NaN becomes 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Encodes an interleaved RGBA linear buffer into 8-bit samples with the
/// layout of `mode`.
///
/// Alpha goes through the same curve as the colour channels in RGBA mode and
/// is never read in RGB mode.
///
/// # Panics
///
/// Panics if `source` doesn't hold exactly `width * height` RGBA pixels.
pub fn repack(source: &[f32], width: u32, height: u32, mode: ChannelMode) -> Vec<u8> {
    assert_eq!(
        source.len(),
        sample_count(width, height, SOURCE_CHANNELS),
        "source buffer doesn't match image dimensions"
    );

    let channels = mode.channel_count();

    (0..sample_count(width, height, channels))
        .map(|d| quantize(transfer::encode(source[source_index(d, channels)])))
        .collect()
}

impl LinearImage {
    pub fn to_ldr(&self, mode: ChannelMode) -> LdrImage {
        let pixels = repack(self.pixels(), self.width(), self.height(), mode);

        LdrImage::new(self.width(), self.height(), mode, pixels)
    }
}
