//! Axum handlers for the calculator routes.

use crate::band::BandFields;
use crate::calculator::calculate;
use crate::dto::{ColorEntry, InvalidFieldsResponse, ResistorValues};
use crate::error::{ResistorError, ResistorErrorExt};
use crate::Resistor;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use ohm_derive::api_handler;
use ohm_domain::constants::RESISTOR_TAG;
use ohm_kernel::server::ApiState;
use serde_json::{Map, Value};
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `POST /calculate-value`, `POST /calculate-values` and `GET /colors`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(calculate_value))
        .routes(routes!(calculate_values))
        .routes(routes!(list_colors))
}

impl FromRequestParts<ApiState> for Resistor {
    type Rejection = ResistorError;

    async fn from_request_parts(_parts: &mut Parts, state: &ApiState) -> Result<Self, Self::Rejection> {
        state.try_get_slice::<Self>().cloned().context("resistor routes mounted without the slice")
    }
}

impl IntoResponse for InvalidFieldsResponse {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

#[api_handler(
    post,
    path = "/calculate-value",
    request_body = BandFields,
    responses(
        (status = OK, description = "Resistance label", body = String, content_type = "text/html"),
        (status = BAD_REQUEST, description = "Bands that failed validation", body = InvalidFieldsResponse),
    ),
    tag = RESISTOR_TAG,
)]
async fn calculate_value(
    resistor: Resistor,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Html<String>, InvalidFieldsResponse> {
    match calculate(&resistor.table, &fields) {
        Ok(result) => {
            debug!(base = result.base_resistance, tolerance = result.tolerance, "Calculated label");
            Ok(Html(result.label()))
        },
        Err(invalid) => {
            debug!(%invalid, "Rejected band selection");
            Err(invalid.into())
        },
    }
}

#[api_handler(
    post,
    path = "/calculate-values",
    request_body = BandFields,
    responses(
        (status = OK, description = "Nominal resistance with tolerance bounds", body = ResistorValues),
        (status = BAD_REQUEST, description = "Bands that failed validation", body = InvalidFieldsResponse),
    ),
    tag = RESISTOR_TAG,
)]
async fn calculate_values(
    resistor: Resistor,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<ResistorValues>, InvalidFieldsResponse> {
    match calculate(&resistor.table, &fields) {
        Ok(result) => {
            debug!(base = result.base_resistance, tolerance = result.tolerance, "Calculated values");
            Ok(Json(result.into()))
        },
        Err(invalid) => {
            debug!(%invalid, "Rejected band selection");
            Err(invalid.into())
        },
    }
}

#[api_handler(
    get,
    path = "/colors",
    responses((status = OK, description = "Active color-code table", body = [ColorEntry])),
    tag = RESISTOR_TAG,
)]
async fn list_colors(resistor: Resistor) -> Json<Vec<ColorEntry>> {
    Json(resistor.table.iter().map(ColorEntry::from).collect())
}
