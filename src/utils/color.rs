// src/utils/color.rs
//! Random HSL colors for tinting roads and markings.

use std::fmt;

use rand::Rng;

/// Hue range the random colors are drawn from, in degrees. The upper part wraps
/// past 360 and is left to the CSS consumer to reduce.
pub const HUE_MIN: f64 = 290.0;
pub const HUE_SPAN: f64 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Draws a color with the given generator. Saturation is 100% and lightness 60%.
pub fn random_color_with<R: Rng>(rng: &mut R) -> Hsl {
    let hue = HUE_MIN + rng.random::<f64>() * HUE_SPAN;
    Hsl::new(hue, 100.0, 60.0)
}

/// Random color string from the thread-local generator, e.g. `hsl(301.5,100%, 60%)`.
pub fn get_random_color() -> String {
    random_color_with(&mut rand::rng()).to_string()
}
