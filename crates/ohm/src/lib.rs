//! Facade crate for the Ohm calculator.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Add `ohm` with the `server` feature for the HTTP routes.
//! - Call [`init`] to build every feature slice from the loaded [`ApiConfig`].

pub use ohm_domain as domain;
use ohm_domain::config::ApiConfig;
use ohm_domain::registry::InitializedSlice;
pub use ohm_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use ohm_kernel::server::router::system_router;
        pub use ohm_resistor::api::router as resistor_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ohm_resistor as resistor;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "resistor",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initializes every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::resistor::init(&config.resistor)?];

    Ok(slices)
}
