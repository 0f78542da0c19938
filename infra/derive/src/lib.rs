#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace:
//!
//! * [`macro@ohm_error`] turns an enum into a `thiserror` error with `.context(..)` support.
//! * [`macro@api_model`] / [`macro@api_handler`] keep DTOs and Axum handlers consistent and
//!   wire them into the `OpenAPI` document when the `server` feature is on.
//! * [`macro@ohm_slice`] builds the `Arc` handle for a feature slice.
//! * [`macro@main`] bootstraps the Tokio runtime from a named profile.
//!
//! The examples below are `ignore`d because proc-macro crates cannot use their own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Bootstraps a pre-configured Tokio runtime around an `async fn main`.
///
/// Profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
/// The function must return a `Result`, because runtime construction can fail.
///
/// ```rust,ignore
/// #[ohm_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request/response DTO.
///
/// Adds `Debug`, `Serialize`, `Deserialize` when missing, derives `utoipa::ToSchema`
/// under the `server` feature, and applies `rename_all = "camelCase"` plus
/// `deny_unknown_fields` unless told otherwise.
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct BandFields {
///     pub first_band: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` (under the `server` feature).
///
/// Accepts the usual `utoipa::path` arguments.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a crate error enum.
///
/// Every variant must use named fields. Variants carrying a `source` (or a field marked
/// `#[source]`/`#[from]`) must also carry `context: Option<Cow<'static, str>>`.
///
/// Generated items:
///
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<Name>Ext` with `.context(..)` for `Result<T, Name>` and for `Result<T, Source>`.
/// * `From<Source>` for every source variant.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// ```rust,ignore
/// #[ohm_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn ohm_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a feature slice: `<Name>Inner` holds the fields, `<Name>` is a cheap `Arc` handle
/// that derefs to it and implements `FeatureSlice`.
///
/// ```rust,ignore
/// #[ohm_derive::ohm_slice]
/// pub struct Resistor {
///     pub table: ColorTable,
/// }
///
/// let slice = Resistor::new(ResistorInner { table });
/// ```
#[proc_macro_attribute]
pub fn ohm_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
