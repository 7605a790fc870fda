use serde::{Serialize, Serializer};

/// Fill color handed to the map layer, 8-bit RGBA. Serializes as the
/// `[r, g, b, a]` array the display side expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 255 }
    }

    pub fn as_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_array())
    }
}

/// Gray marker for stations whose availability is unknown.
pub const NO_DATA_COLOR: Rgba = Rgba::opaque(128, 128, 128);

/// Midpoint of the scale, used when the ratio field is present but empty.
pub const NEUTRAL_RATIO: f64 = 0.5;

/// Busy-to-free scale: 0.0 is solid red (no bikes left), 1.0 solid green.
/// Out-of-range input is clamped, non-finite input falls back to the
/// no-data gray.
pub fn ratio_color(ratio: f64) -> Rgba {
    if !ratio.is_finite() {
        return NO_DATA_COLOR;
    }

    let ratio = ratio.clamp(0.0, 1.0);
    Rgba::opaque(
        (255.0 * (1.0 - ratio)).round() as u8,
        (255.0 * ratio).round() as u8,
        0,
    )
}

/// Evenly spaced swatches of the availability scale, for a legend strip.
pub fn legend_gradient(steps: usize) -> Vec<Rgba> {
    if steps < 2 {
        return vec![ratio_color(0.0); steps];
    }

    (0..steps)
        .map(|step| ratio_color(step as f64 / (steps - 1) as f64))
        .collect()
}
