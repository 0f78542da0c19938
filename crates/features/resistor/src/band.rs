//! Band roles and the request body the form submits.

use ohm_derive::api_model;
use ohm_domain::roles::BandRoles;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{EnumIter, IntoStaticStr};

/// A band position on the resistor, named by its JSON key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
    strum_macros::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum BandField {
    FirstBand,
    SecondBand,
    ThirdBand,
    ExponentBand,
    ToleranceBand,
}

impl BandField {
    /// The JSON key (`"firstBand"`, ...).
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// The role a color needs to occupy this band.
    #[must_use]
    pub const fn role(self) -> BandRoles {
        match self {
            Self::FirstBand | Self::SecondBand | Self::ThirdBand => BandRoles::DIGIT,
            Self::ExponentBand => BandRoles::EXPONENT,
            Self::ToleranceBand => BandRoles::TOLERANCE,
        }
    }

    /// First, second and exponent bands must always be supplied.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::FirstBand | Self::SecondBand | Self::ExponentBand)
    }
}

/// Band selection as submitted by the form. Unknown keys are ignored.
#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct BandFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_band: Option<String>,
}

impl BandFields {
    #[must_use]
    pub fn get(&self, field: BandField) -> Option<&str> {
        match field {
            BandField::FirstBand => self.first_band.as_deref(),
            BandField::SecondBand => self.second_band.as_deref(),
            BandField::ThirdBand => self.third_band.as_deref(),
            BandField::ExponentBand => self.exponent_band.as_deref(),
            BandField::ToleranceBand => self.tolerance_band.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, field: BandField) -> &mut Option<String> {
        match field {
            BandField::FirstBand => &mut self.first_band,
            BandField::SecondBand => &mut self.second_band,
            BandField::ThirdBand => &mut self.third_band,
            BandField::ExponentBand => &mut self.exponent_band,
            BandField::ToleranceBand => &mut self.tolerance_band,
        }
    }

    /// The JSON object the endpoints receive, with absent bands left out.
    #[must_use]
    pub fn to_field_map(&self) -> Map<String, Value> {
        <BandField as strum::IntoEnumIterator>::iter()
            .filter_map(|field| {
                self.get(field).map(|color| (field.key().to_owned(), Value::from(color)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_camel_case() {
        assert_eq!(BandField::FirstBand.key(), "firstBand");
        assert_eq!(BandField::ToleranceBand.to_string(), "toleranceBand");
        assert_eq!(serde_json::to_value(BandField::ExponentBand).ok(), Some("exponentBand".into()));
    }

    #[test]
    fn field_map_skips_absent_bands() {
        let fields = BandFields {
            first_band: Some("red".to_owned()),
            exponent_band: Some("orange".to_owned()),
            ..BandFields::default()
        };

        let map = fields.to_field_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("firstBand"), Some(&Value::from("red")));
        assert!(!map.contains_key("secondBand"));
    }

    #[test]
    fn body_ignores_unknown_keys() {
        let fields: BandFields =
            serde_json::from_str(r#"{"firstBand":"red","extra":true}"#).expect("lenient body");
        assert_eq!(fields.first_band.as_deref(), Some("red"));
    }
}
