use config::{Case, Config, Environment, File};
use ohm_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[ohm_derive::ohm_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file, then `OHM__`-prefixed environment overrides.
///
/// 1. **File**: `path` when given (must exist), otherwise `server.{toml,json,yaml,..}` in the
///    working directory if one exists.
/// 2. **Environment**: `OHM__SERVER__PORT=8080` maps to `server.port`; nested keys use `__`.
///
/// Missing keys fall back to the `serde(default)` values of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source cannot be
/// parsed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use ohm_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path
        .map_or_else(|| (PathBuf::from(CONFIG_FILE), false), |p| (p.as_ref().to_path_buf(), true));

    info!(path = %file.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
