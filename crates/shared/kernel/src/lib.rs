//! Kernel utilities shared across slices.
//!
//! Keep this crate lightweight: layered config loading, and (with the `server` feature)
//! the shared [`server::ApiState`] plus the system routes every deployment exposes.
//!
//! ```rust,no_run
//! use ohm_kernel::config::load_config;
//! use ohm_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! assert_eq!(cfg.server.port, 4583);
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use ohm_domain as domain;
