//! Wire shapes returned by the calculator endpoints.

use crate::band::BandField;
use crate::calculator::ResistorResult;
use crate::validator::InvalidFields;
use ohm_derive::api_model;
use ohm_domain::color::ColorCode;
use ohm_domain::roles::BandRoles;

/// Numeric result of `POST /calculate-values`.
///
/// `mix_resistance` is the lower bound. The key is kept as `mixResistance`
/// because existing clients read it under that name.
#[api_model]
#[derive(Clone, Copy, PartialEq)]
pub struct ResistorValues {
    pub base_resistance: f64,
    pub max_resistance: f64,
    pub mix_resistance: f64,
    /// Percent applied.
    pub tolerance: f64,
}

impl From<ResistorResult> for ResistorValues {
    fn from(result: ResistorResult) -> Self {
        Self {
            base_resistance: result.base_resistance,
            max_resistance: result.max_resistance,
            mix_resistance: result.min_resistance,
            tolerance: result.tolerance,
        }
    }
}

/// Body of every 400 response.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct InvalidFieldsResponse {
    pub invalid_fields: Vec<BandField>,
}

impl From<InvalidFields> for InvalidFieldsResponse {
    fn from(invalid: InvalidFields) -> Self {
        Self { invalid_fields: invalid.iter().collect() }
    }
}

/// One row of `GET /colors`.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    pub digit: Option<u8>,
    pub exponent: i32,
    pub tolerance: Option<f64>,
    /// Bands this color may occupy: `digit`, `exponent`, `tolerance`.
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub roles: BandRoles,
}

impl From<&ColorCode> for ColorEntry {
    fn from(color: &ColorCode) -> Self {
        Self {
            name: color.name.to_string(),
            digit: color.digit,
            exponent: color.exponent,
            tolerance: color.tolerance,
            roles: color.roles(),
        }
    }
}
