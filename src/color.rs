use std::fmt::Display;

use image::Rgba;

const RED_BRIGHTNESS_WEIGHT: f64 = 0.241;
const GREEN_BRIGHTNESS_WEIGHT: f64 = 0.691;
const BLUE_BRIGHTNESS_WEIGHT: f64 = 0.068;

/// Divisor mapping a 16 bit channel value onto the 8 bit range.
const SIXTEEN_TO_EIGHT_BIT_DIVISOR: u16 = 257;

/// A single RGBA sample with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Converts a straight alpha sample into a pixel whose color channels are
    /// premultiplied by alpha. The product is taken at 16 bit depth and only
    /// then truncated to 8 bits.
    pub fn premultiplied(value: &Rgba<u16>) -> Self {
        let [red, green, blue, alpha] = value.0;
        let premultiply = |channel: u16| {
            // channel * alpha <= u16::MAX * u16::MAX
            (u32::from(channel) * u32::from(alpha) / u32::from(u16::MAX)) as u16
        };
        Pixel::from(&Rgba([
            premultiply(red),
            premultiply(green),
            premultiply(blue),
            alpha,
        ]))
    }
}

impl From<&Rgba<u8>> for Pixel {
    fn from(value: &Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = value.0;
        Pixel::new(red, green, blue, alpha)
    }
}

impl From<&Rgba<u16>> for Pixel {
    fn from(value: &Rgba<u16>) -> Self {
        let [red, green, blue, alpha] = value.0.map(scale_to_eight_bit);
        Pixel::new(red, green, blue, alpha)
    }
}

/// Truncates a 16 bit channel value to 8 bits. 8 bit values that were
/// widened by the decoder map back onto themselves.
fn scale_to_eight_bit(value: u16) -> u8 {
    // u16::MAX / 257 == 255
    (value / SIXTEEN_TO_EIGHT_BIT_DIVISOR) as u8
}

/// The per channel mean of a pixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AverageColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl AverageColor {
    /// Perceived brightness in the range [0.0, 255.0].
    ///
    /// Weighted euclidean norm of the red, green and blue channels. Alpha is
    /// ignored.
    pub fn brightness(&self) -> f64 {
        let red = f64::from(self.red);
        let green = f64::from(self.green);
        let blue = f64::from(self.blue);
        let weighted_red = RED_BRIGHTNESS_WEIGHT * red.powi(2);
        let weighted_green = GREEN_BRIGHTNESS_WEIGHT * green.powi(2);
        let weighted_blue = BLUE_BRIGHTNESS_WEIGHT * blue.powi(2);
        (weighted_red + weighted_green + weighted_blue).sqrt()
    }
}

impl Display for AverageColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
