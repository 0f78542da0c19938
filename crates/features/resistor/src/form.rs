//! Client-side state of the calculator form, driven by discrete actions.
//!
//! The reducer owns no I/O: [`FormAction::Submit`] hands back the request body and
//! the caller feeds the server's answer in with [`FormAction::ReceiveResult`] or
//! [`FormAction::ReceiveInvalid`].

use crate::band::{BandField, BandFields};
use crate::dto::ResistorValues;
use crate::table::ColorTable;
use crate::validator::InvalidFields;
use ohm_domain::color::ColorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    /// A result is on display.
    Done,
    /// The last submission came back with invalid fields.
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Select { field: BandField, color: String },
    ToggleThirdBand,
    Submit,
    Reset,
    ReceiveResult(ResistorValues),
    ReceiveInvalid(InvalidFields),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    selection: BandFields,
    five_band: bool,
    invalid: InvalidFields,
    result: Option<ResistorValues>,
    status: FormStatus,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action`. Returns the request body when the action starts a submission.
    pub fn apply(&mut self, action: FormAction) -> Option<BandFields> {
        match action {
            FormAction::Select { field, color } => {
                *self.selection.slot_mut(field) = Some(color).filter(|c| !c.is_empty());
                self.invalid.remove(field);
                self.status = FormStatus::Editing;
            },
            FormAction::ToggleThirdBand => {
                self.five_band = !self.five_band;
                self.invalid.remove(BandField::ThirdBand);
            },
            FormAction::Submit => {
                if self.status == FormStatus::Submitting || !self.can_submit() {
                    return None;
                }
                self.status = FormStatus::Submitting;
                return Some(self.request());
            },
            FormAction::Reset => *self = Self::default(),
            FormAction::ReceiveResult(values) => {
                self.result = Some(values);
                self.invalid = InvalidFields::default();
                self.status = FormStatus::Done;
            },
            FormAction::ReceiveInvalid(fields) => {
                self.result = None;
                self.invalid = fields;
                self.status = FormStatus::Rejected;
            },
        }
        None
    }

    /// Every band shown by the form has a color, except the optional tolerance band.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.visible_fields()
            .filter(|field| field.is_required() || *field == BandField::ThirdBand)
            .all(|field| self.selection.get(field).is_some())
    }

    /// The body to send. The third band is left out in four-band mode.
    #[must_use]
    pub fn request(&self) -> BandFields {
        let mut body = self.selection.clone();
        if !self.five_band {
            body.third_band = None;
        }
        body
    }

    /// Bands shown by the form, in display order.
    pub fn visible_fields(&self) -> impl Iterator<Item = BandField> + use<> {
        let five_band = self.five_band;
        <BandField as strum::IntoEnumIterator>::iter()
            .filter(move |field| five_band || *field != BandField::ThirdBand)
    }

    /// The colors the select for `field` should offer.
    pub fn options<'t>(table: &'t ColorTable, field: BandField) -> impl Iterator<Item = &'t ColorCode> {
        table.accepting(field.role())
    }

    #[must_use]
    pub fn selected(&self, field: BandField) -> Option<&str> {
        self.selection.get(field)
    }

    #[must_use]
    pub const fn is_five_band(&self) -> bool {
        self.five_band
    }

    #[must_use]
    pub fn is_invalid(&self, field: BandField) -> bool {
        self.invalid.contains(field)
    }

    #[must_use]
    pub const fn invalid(&self) -> &InvalidFields {
        &self.invalid
    }

    #[must_use]
    pub const fn result(&self) -> Option<&ResistorValues> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }
}
