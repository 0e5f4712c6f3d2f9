/// An RGB color with channels in the `0.0..=1.0` range.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Self = Self { red: 0.0, green: 0.0, blue: 0.0 };
    pub const WHITE: Self = Self { red: 1.0, green: 1.0, blue: 1.0 };

    /// Creates a color, clamping each channel into `0.0..=1.0`.
    ///
    /// `NaN` channels become `0.0`.
    #[must_use]
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red: clamp_unit(red), green: clamp_unit(green), blue: clamp_unit(blue) }
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }

    /// Returns the channels quantized to 8 bits (rounded to nearest).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (clamp_unit(c) * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue)]
    }

    #[must_use]
    pub const fn channels(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
