//! # Domain Models
//!
//! Pure data shared by every crate: configuration, the color-code record, band roles,
//! and the feature-slice registry. Only `serde` and `bitflags` are allowed here.

pub mod color;
pub mod config;
pub mod constants;
pub mod registry;
pub mod roles;
