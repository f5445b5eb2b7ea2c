/// Exponent of the power segment of the sRGB curve.
pub const DEFAULT_GAMMA: f32 = 2.4;

/// Linear values at or below this use the linear segment.
const LINEAR_CUTOFF: f32 = 0.003_130_8;
const LINEAR_SLOPE: f32 = 12.92;
const OFFSET: f32 = 0.055;

/// Encodes a linear light value with the sRGB transfer function.
///
/// The input is not clamped. Values above the display range saturate at `1.0`,
/// negative values stay negative.
pub fn linear_to_srgb(linear: f32, gamma: f32) -> f32 {
    if linear <= LINEAR_CUTOFF {
        linear * LINEAR_SLOPE
    } else {
        ((1.0 + OFFSET) * linear.powf(1.0 / gamma) - OFFSET).min(1.0)
    }
}

/// [`linear_to_srgb`] with the standard gamma.
pub fn encode(linear: f32) -> f32 {
    linear_to_srgb(linear, DEFAULT_GAMMA)
}
