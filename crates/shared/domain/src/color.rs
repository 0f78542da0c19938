use crate::roles::BandRoles;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One row of the resistor color-code table.
///
/// `digit` is present only for colors usable as a significant digit, `tolerance`
/// only for colors usable as a tolerance band. Every color has an exponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCode {
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub digit: Option<u8>,
    pub exponent: i32,
    /// Percent, e.g. `5.0` for gold.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

impl ColorCode {
    #[must_use]
    pub const fn new(
        name: &'static str,
        digit: Option<u8>,
        exponent: i32,
        tolerance: Option<f64>,
    ) -> Self {
        Self { name: Cow::Borrowed(name), digit, exponent, tolerance }
    }

    #[must_use]
    pub fn roles(&self) -> BandRoles {
        let mut roles = BandRoles::EXPONENT;
        roles.set(BandRoles::DIGIT, self.digit.is_some());
        roles.set(BandRoles::TOLERANCE, self.tolerance.is_some());
        roles
    }
}

/// The thirteen colors offered by the calculator form.
pub const STANDARD_COLORS: &[ColorCode] = &[
    ColorCode::new("pink", None, -3, None),
    ColorCode::new("silver", None, -2, Some(10.0)),
    ColorCode::new("gold", None, -1, Some(5.0)),
    ColorCode::new("black", Some(0), 0, None),
    ColorCode::new("brown", Some(1), 1, Some(1.0)),
    ColorCode::new("red", Some(2), 2, Some(2.0)),
    ColorCode::new("orange", Some(3), 3, Some(0.05)),
    ColorCode::new("yellow", Some(4), 4, Some(0.02)),
    ColorCode::new("green", Some(5), 5, Some(0.5)),
    ColorCode::new("blue", Some(6), 6, Some(0.25)),
    ColorCode::new("violet", Some(7), 7, Some(0.1)),
    ColorCode::new("grey", Some(8), 8, Some(0.01)),
    ColorCode::new("white", Some(9), 9, None),
];
