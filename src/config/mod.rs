//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FrontConfig (validated, immutable)
//!     → read once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AppConfig, AutoAnimateConfig, FrontConfig, ListenerConfig, ObservabilityConfig, PluginsConfig,
    RouterConfig, SecurityConfig, TimeoutConfig,
};
pub use validation::ValidationError;
