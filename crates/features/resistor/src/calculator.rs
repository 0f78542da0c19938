use crate::band::BandFields;
use crate::table::ColorTable;
use crate::validator::{BandSelection, InvalidFields, validate};
use ohm_domain::constants::DEFAULT_TOLERANCE_PERCENT;
use serde_json::{Map, Value};
use std::fmt;

/// Nominal resistance and its tolerance bounds, in ohms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorResult {
    pub base_resistance: f64,
    /// Percent actually applied (the default when no tolerance band was chosen).
    pub tolerance: f64,
    pub max_resistance: f64,
    pub min_resistance: f64,
}

impl ResistorResult {
    /// `"22000 ohms ±5%"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResistorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ohms ±{}%", self.base_resistance, self.tolerance)
    }
}

impl BandSelection {
    /// The significant digits read as one integer (`red, violet, black` is `270`).
    #[must_use]
    pub fn significand(&self) -> u32 {
        let two = u32::from(self.first) * 10 + u32::from(self.second);
        self.third.map_or(two, |third| two * 10 + u32::from(third))
    }

    /// Applies the exponent and tolerance. Negative exponents divide so that
    /// `22 * 10^-1` is exactly `2.2`.
    #[must_use]
    pub fn calculate(&self) -> ResistorResult {
        let significand = f64::from(self.significand());
        let scale = 10_f64.powi(self.exponent.saturating_abs());
        let base_resistance =
            if self.exponent < 0 { significand / scale } else { significand * scale };
        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE_PERCENT);

        ResistorResult {
            base_resistance,
            tolerance,
            max_resistance: base_resistance * (100.0 + tolerance) / 100.0,
            min_resistance: base_resistance * (100.0 - tolerance) / 100.0,
        }
    }
}

/// Validates `fields` and computes the resistance in one step.
///
/// # Errors
/// Returns the invalid fields when validation fails; nothing is computed then.
pub fn calculate(table: &ColorTable, fields: &Map<String, Value>) -> Result<ResistorResult, InvalidFields> {
    validate(table, fields).map(|selection| selection.calculate())
}

/// Same as [`calculate`] for a typed form body.
///
/// # Errors
/// Returns the invalid fields when validation fails.
pub fn calculate_fields(table: &ColorTable, fields: &BandFields) -> Result<ResistorResult, InvalidFields> {
    calculate(table, &fields.to_field_map())
}
