//! Kleurverloop blauw → groen → rood voor genormaliseerde waarden.

use serde::Serialize;

/// RGB-kleur met kanalen in het bereik [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorValue {
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Midden van het verloop; hier ligt puur groen.
const MIDPOINT: f64 = 0.5;

/// Zet een waarde uit [0, 1] om naar een kleur op het blauw → groen → rood
/// verloop.
///
/// Waarden buiten het bereik worden eerst geclampt, NaN telt als 0. De functie
/// is daardoor totaal: elke `f64` levert een geldige kleur op.
#[must_use]
pub fn color_from_unit(t: f64) -> ColorValue {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    if t <= MIDPOINT {
        let tt = t / MIDPOINT;
        ColorValue::new(0.0, tt, 1.0 - tt)
    } else {
        let tt = (t - MIDPOINT) / MIDPOINT;
        ColorValue::new(tt, 1.0 - tt, 0.0)
    }
}
