pub use crate::config::{ConfigError, load_config};
pub use ohm_domain::config::ApiConfig;
pub use ohm_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
