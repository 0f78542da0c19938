//! Turns a submitted field map into a typed [`BandSelection`] or the set of bad fields.

use crate::band::BandField;
use crate::table::ColorTable;
use ohm_domain::color::ColorCode;
use ohm_domain::constants::UNSPECIFIED;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;

/// Band values resolved against the table. Digits are always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSelection {
    pub first: u8,
    pub second: u8,
    /// Present only on five-band resistors.
    pub third: Option<u8>,
    pub exponent: i32,
    /// Percent; `None` when no tolerance band was chosen.
    pub tolerance: Option<f64>,
}

/// Distinct invalid fields, in band order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvalidFields(BTreeSet<BandField>);

impl InvalidFields {
    pub fn iter(&self) -> impl Iterator<Item = BandField> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, field: BandField) -> bool {
        self.0.contains(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: BandField) -> bool {
        self.0.insert(field)
    }

    pub fn remove(&mut self, field: BandField) -> bool {
        self.0.remove(&field)
    }
}

impl FromIterator<BandField> for InvalidFields {
    fn from_iter<I: IntoIterator<Item = BandField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[BandField; N]> for InvalidFields {
    fn from(fields: [BandField; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.key())?;
        }
        Ok(())
    }
}

enum Resolved<'t> {
    Absent,
    Color(&'t ColorCode),
    Invalid,
}

/// Validates every band of `fields` against `table`.
///
/// Unknown keys are ignored. `null` and `""` mean absent, and so does `"unspecified"`
/// for the tolerance band. A missing required band, a non-string value, an unknown
/// color, or a color that cannot play the band's role marks that field invalid.
///
/// # Errors
/// Returns every invalid field, each once, when any band fails.
pub fn validate(table: &ColorTable, fields: &Map<String, Value>) -> Result<BandSelection, InvalidFields> {
    let mut invalid = InvalidFields::default();

    let first = accept(table, fields, BandField::FirstBand, &mut invalid).and_then(|c| c.digit);
    let second = accept(table, fields, BandField::SecondBand, &mut invalid).and_then(|c| c.digit);
    let third = accept(table, fields, BandField::ThirdBand, &mut invalid).and_then(|c| c.digit);
    let exponent = accept(table, fields, BandField::ExponentBand, &mut invalid).map(|c| c.exponent);
    let tolerance =
        accept(table, fields, BandField::ToleranceBand, &mut invalid).and_then(|c| c.tolerance);

    match (first, second, exponent) {
        (Some(first), Some(second), Some(exponent)) if invalid.is_empty() => {
            Ok(BandSelection { first, second, third, exponent, tolerance })
        },
        _ => Err(invalid),
    }
}

/// Returns the color chosen for `field`, recording the field in `invalid` when it fails.
fn accept<'t>(
    table: &'t ColorTable,
    fields: &Map<String, Value>,
    field: BandField,
    invalid: &mut InvalidFields,
) -> Option<&'t ColorCode> {
    match resolve(table, fields.get(field.key()), field) {
        Resolved::Color(color) => Some(color),
        Resolved::Absent if !field.is_required() => None,
        Resolved::Absent | Resolved::Invalid => {
            invalid.insert(field);
            None
        },
    }
}

fn resolve<'t>(table: &'t ColorTable, raw: Option<&Value>, field: BandField) -> Resolved<'t> {
    let name = match raw {
        None | Some(Value::Null) => return Resolved::Absent,
        Some(Value::String(name)) => name.as_str(),
        Some(_) => return Resolved::Invalid,
    };

    if name.is_empty() || (field == BandField::ToleranceBand && name == UNSPECIFIED) {
        return Resolved::Absent;
    }

    match table.get(name) {
        Some(color) if color.roles().contains(field.role()) => Resolved::Color(color),
        _ => Resolved::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn check(value: Value) -> Result<BandSelection, InvalidFields> {
        validate(&ColorTable::standard(), &fields(value))
    }

    #[test]
    fn empty_map_reports_required_bands() {
        let err = check(json!({})).expect_err("nothing selected");
        assert_eq!(
            err,
            InvalidFields::from([BandField::FirstBand, BandField::SecondBand, BandField::ExponentBand])
        );
    }

    #[test]
    fn resolves_four_band_selection() {
        let selection = check(json!({
            "firstBand": "red",
            "secondBand": "violet",
            "exponentBand": "gold",
            "toleranceBand": "silver",
        }))
        .expect("valid");

        assert_eq!(
            selection,
            BandSelection { first: 2, second: 7, third: None, exponent: -1, tolerance: Some(10.0) }
        );
    }

    #[test]
    fn digit_bands_reject_colors_without_a_digit() {
        let err = check(json!({
            "firstBand": "gold",
            "secondBand": "red",
            "thirdBand": "pink",
            "exponentBand": "red",
        }))
        .expect_err("gold and pink carry no digit");
        assert_eq!(err, InvalidFields::from([BandField::FirstBand, BandField::ThirdBand]));
    }

    #[test]
    fn tolerance_band_rejects_colors_without_tolerance() {
        let err = check(json!({
            "firstBand": "red",
            "secondBand": "red",
            "exponentBand": "pink",
            "toleranceBand": "black",
        }))
        .expect_err("black has no tolerance");
        assert_eq!(err, InvalidFields::from([BandField::ToleranceBand]));
    }

    #[test]
    fn absent_markers_for_optional_bands() {
        for tolerance in [json!(null), json!(""), json!("unspecified")] {
            let selection = check(json!({
                "firstBand": "red",
                "secondBand": "red",
                "thirdBand": "",
                "exponentBand": "orange",
                "toleranceBand": tolerance,
            }))
            .expect("optional bands may be blank");
            assert_eq!(selection.third, None);
            assert_eq!(selection.tolerance, None);
        }
    }

    #[test]
    fn unspecified_is_only_special_for_tolerance() {
        let err = check(json!({
            "firstBand": "red",
            "secondBand": "unspecified",
            "exponentBand": "orange",
        }))
        .expect_err("not a color");
        assert_eq!(err, InvalidFields::from([BandField::SecondBand]));
    }

    #[test]
    fn non_string_values_are_invalid() {
        let err = check(json!({
            "firstBand": 2,
            "secondBand": ["red"],
            "exponentBand": "orange",
            "toleranceBand": false,
        }))
        .expect_err("wrong types");
        assert_eq!(
            err,
            InvalidFields::from([BandField::FirstBand, BandField::SecondBand, BandField::ToleranceBand])
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let selection = check(json!({
            "firstBand": "brown",
            "secondBand": "black",
            "exponentBand": "red",
            "bandCount": 4,
        }))
        .expect("extra keys are fine");
        assert_eq!(selection.first, 1);
    }

    #[test]
    fn invalid_fields_serialize_as_a_list() {
        let invalid = InvalidFields::from([BandField::ExponentBand, BandField::FirstBand]);
        assert_eq!(serde_json::to_value(&invalid).ok(), Some(json!(["firstBand", "exponentBand"])));
        assert_eq!(invalid.to_string(), "firstBand, exponentBand");
    }
}
