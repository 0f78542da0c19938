//! The immutable color-code lookup table.

use crate::error::ResistorError;
use fxhash::FxHashMap;
use ohm_domain::color::{ColorCode, STANDARD_COLORS};
use ohm_domain::constants::UNSPECIFIED;
use ohm_domain::roles::BandRoles;
use std::ops::RangeInclusive;

/// Exponents a configured color may carry; keeps every resistance finite and non-zero.
pub const EXPONENT_RANGE: RangeInclusive<i32> = -12..=12;

/// Validated, name-indexed color table. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: Vec<ColorCode>,
    index: FxHashMap<String, usize>,
}

impl ColorTable {
    /// The built-in thirteen-color table.
    #[must_use]
    pub fn standard() -> Self {
        let colors = STANDARD_COLORS.to_vec();
        let index = colors.iter().enumerate().map(|(i, c)| (c.name.to_string(), i)).collect();
        Self { colors, index }
    }

    /// Builds a table from configured entries.
    ///
    /// # Errors
    /// Returns [`ResistorError::InvalidTable`] when the list is empty, a name is blank or
    /// repeated, a digit is above 9, an exponent falls outside [`EXPONENT_RANGE`], a tolerance
    /// is not a finite percentage in `0..=100`, or a tolerance color is named `unspecified`.
    pub fn from_codes(colors: Vec<ColorCode>) -> Result<Self, ResistorError> {
        if colors.is_empty() {
            return Err(invalid("table has no colors"));
        }

        let mut index = FxHashMap::default();
        for (position, color) in colors.iter().enumerate() {
            check_entry(color)?;
            if index.insert(color.name.to_string(), position).is_some() {
                return Err(invalid(format!("duplicate color `{}`", color.name)));
            }
        }

        Ok(Self { colors, index })
    }

    /// Looks a color up by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorCode> {
        self.index.get(name).map(|&i| &self.colors[i])
    }

    /// Colors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorCode> {
        self.colors.iter()
    }

    /// Colors usable in every one of `roles`, in table order.
    pub fn accepting(&self, roles: BandRoles) -> impl Iterator<Item = &ColorCode> {
        self.colors.iter().filter(move |c| c.roles().contains(roles))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_entry(color: &ColorCode) -> Result<(), ResistorError> {
    if color.name.trim().is_empty() {
        return Err(invalid("color name cannot be blank"));
    }
    if let Some(digit) = color.digit.filter(|&d| d > 9) {
        return Err(invalid(format!("`{}` has digit {digit}, expected 0-9", color.name)));
    }
    if let Some(tolerance) = color.tolerance.filter(|t| !(0.0..=100.0).contains(t)) {
        return Err(invalid(format!("`{}` has tolerance {tolerance}%, expected 0-100", color.name)));
    }
    if !EXPONENT_RANGE.contains(&color.exponent) {
        return Err(invalid(format!(
            "`{}` has exponent {}, expected {}..={}",
            color.name,
            color.exponent,
            EXPONENT_RANGE.start(),
            EXPONENT_RANGE.end()
        )));
    }
    if color.tolerance.is_some() && color.name == UNSPECIFIED {
        return Err(invalid(format!("`{UNSPECIFIED}` is reserved for an empty tolerance band")));
    }
    Ok(())
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> ResistorError {
    ResistorError::InvalidTable { message: message.into(), context: None }
}
