use std::borrow::Cow;

/// Errors raised by the resistor slice.
///
/// Rejected band selections are not errors; they travel as
/// [`InvalidFields`](crate::InvalidFields) in the validator's `Err` arm.
#[ohm_derive::ohm_error]
pub enum ResistorError {
    /// A configured color table broke one of the table rules (startup only).
    #[error("Invalid color table{}: {message}", format_context(.context))]
    InvalidTable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The slice was not registered in the API state.
    #[cfg(feature = "server")]
    #[error("Resistor slice unavailable{}: {source}", format_context(.context))]
    State {
        source: ohm_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for ResistorError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Resistor request failed");
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
