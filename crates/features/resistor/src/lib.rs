//! # Resistor
//!
//! The color-code calculator slice.
//!
//! * [`table`] holds the immutable color table, loaded once at startup.
//! * [`validator`] turns a submitted field map into a [`BandSelection`] or the set of
//!   [`InvalidFields`]; bad input never raises an error.
//! * [`calculator`] derives the nominal resistance and its tolerance bounds.
//! * [`form`] is the reducer behind the calculator form.
//! * `api` (feature `server`) exposes the HTTP routes.
//!
//! ```rust
//! use ohm_resistor::{ColorTable, calculate};
//! use serde_json::json;
//!
//! let fields = json!({
//!     "firstBand": "red",
//!     "secondBand": "red",
//!     "exponentBand": "orange",
//!     "toleranceBand": "gold",
//! });
//! let fields = fields.as_object().cloned().unwrap_or_default();
//!
//! let result = calculate(&ColorTable::standard(), &fields).unwrap();
//! assert_eq!(result.label(), "22000 ohms ±5%");
//! ```

#[cfg(feature = "server")]
pub mod api;
mod band;
pub mod calculator;
mod dto;
mod error;
pub mod form;
pub mod table;
pub mod validator;

pub use crate::band::{BandField, BandFields};
pub use crate::calculator::{ResistorResult, calculate, calculate_fields};
pub use crate::dto::{ColorEntry, InvalidFieldsResponse, ResistorValues};
pub use crate::error::{ResistorError, ResistorErrorExt};
pub use crate::table::ColorTable;
pub use crate::validator::{BandSelection, InvalidFields, validate};

use ohm_domain::config::ResistorConfig;
use ohm_kernel::domain::registry::InitializedSlice;

/// Shared calculator state: the active color table.
#[ohm_derive::ohm_slice]
pub struct Resistor {
    pub table: ColorTable,
}

/// Builds the slice from `config`, falling back to the standard table.
///
/// # Errors
/// Returns [`ResistorError::InvalidTable`] when configured colors break a table rule.
pub fn init(config: &ResistorConfig) -> Result<InitializedSlice, ResistorError> {
    let table = match &config.colors {
        Some(colors) => ColorTable::from_codes(colors.clone()).context("resistor.colors")?,
        None => ColorTable::standard(),
    };

    tracing::info!(colors = table.len(), custom = config.colors.is_some(), "Resistor slice initialized");

    Ok(InitializedSlice::new(Resistor::new(ResistorInner { table })))
}
