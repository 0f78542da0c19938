/// `OpenAPI` tag for liveness and health routes.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the color-code calculator routes.
pub const RESISTOR_TAG: &str = "Resistor";

/// Tolerance applied when no tolerance band is selected.
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 20.0;
/// Explicit "no tolerance band" value accepted from the form.
pub const UNSPECIFIED: &str = "unspecified";

/// Prefix for environment overrides (`OHM__SERVER__PORT`).
pub const ENV_PREFIX: &str = "OHM";
/// Default configuration file stem, resolved against the working directory.
pub const CONFIG_FILE: &str = "server";
