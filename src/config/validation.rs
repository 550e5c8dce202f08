//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, selectors and URL prefixes
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrontConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::FrontConfig;
use crate::http::server::RESERVED_PATHS;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("app.mount_selector: `{0}` must be an id selector such as `#app`")]
    InvalidMountSelector(String),

    #[error("{field}: `{value}` must start with '/'")]
    NotAbsolute { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field}: `{value}` overlaps the reserved path `{reserved}`")]
    ReservedPath {
        field: &'static str,
        value: String,
        reserved: &'static str,
    },

    #[error("{field}: `{value}` must not contain `{{` or `}}`")]
    PathPattern { field: &'static str, value: String },

    #[error("router.base: `{base}` lies under app.assets_prefix `{assets_prefix}`")]
    BaseUnderAssets { base: String, assets_prefix: String },
}

/// True when `path` equals `prefix` or is nested below it.
fn is_under(path: &str, prefix: &str) -> bool {
    let path = path.trim_end_matches('/');
    let prefix = prefix.trim_end_matches('/');
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

fn check_reserved(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    for reserved in RESERVED_PATHS {
        if is_under(value, reserved) {
            errors.push(ValidationError::ReservedPath {
                field,
                value: value.to_string(),
                reserved,
            });
        }
    }
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &FrontConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    let selector = &config.app.mount_selector;
    let selector_ok = selector
        .strip_prefix('#')
        .map(|id| !id.is_empty() && !id.contains(|c: char| c.is_whitespace() || c == '"' || c == '\''))
        .unwrap_or(false);
    if !selector_ok {
        errors.push(ValidationError::InvalidMountSelector(selector.clone()));
    }

    if !config.app.assets_prefix.starts_with('/') || config.app.assets_prefix == "/" {
        errors.push(ValidationError::NotAbsolute {
            field: "app.assets_prefix",
            value: config.app.assets_prefix.clone(),
        });
    }

    let assets_prefix = &config.app.assets_prefix;
    if assets_prefix.contains(['{', '}']) {
        errors.push(ValidationError::PathPattern {
            field: "app.assets_prefix",
            value: assets_prefix.clone(),
        });
    }
    check_reserved("app.assets_prefix", assets_prefix, &mut errors);

    if config.app.assets_dir.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "app.assets_dir" });
    }

    if !config.router.base.starts_with('/') {
        errors.push(ValidationError::NotAbsolute {
            field: "router.base",
            value: config.router.base.clone(),
        });
    } else if assets_prefix.starts_with('/') && assets_prefix != "/" {
        if is_under(&config.router.base, assets_prefix) {
            errors.push(ValidationError::BaseUnderAssets {
                base: config.router.base.clone(),
                assets_prefix: assets_prefix.clone(),
            });
        }
        check_reserved("router.base", &config.router.base, &mut errors);
    }

    if config.plugins.auto_animate.enabled && config.plugins.auto_animate.script_src.trim().is_empty() {
        errors.push(ValidationError::Empty {
            field: "plugins.auto_animate.script_src",
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&FrontConfig::default()), Ok(()));
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = FrontConfig::default();
        config.listener.bind_address = "localhost".into();
        config.app.mount_selector = "app".into();
        config.router.base = "front".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidMountSelector("app".into())));
        assert!(errors.contains(&ValidationError::Zero("timeouts.request_secs")));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = FrontConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_assets_prefix_must_avoid_reserved_paths() {
        for prefix in ["/healthz", "/__routes", "/healthz/static", "/__routes/"] {
            let mut config = FrontConfig::default();
            config.app.assets_prefix = prefix.into();

            let errors = validate_config(&config).unwrap_err();
            assert!(
                matches!(errors[0], ValidationError::ReservedPath { field: "app.assets_prefix", .. }),
                "{} should be rejected",
                prefix
            );
        }

        // Sharing a leading substring is not nesting
        let mut config = FrontConfig::default();
        config.app.assets_prefix = "/healthzone".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_assets_prefix_rejects_captures() {
        for prefix in ["/{x}", "/static/{*rest}", "/a}"] {
            let mut config = FrontConfig::default();
            config.app.assets_prefix = prefix.into();

            let errors = validate_config(&config).unwrap_err();
            assert_eq!(
                errors,
                vec![ValidationError::PathPattern {
                    field: "app.assets_prefix",
                    value: prefix.to_string(),
                }]
            );
        }
    }

    #[test]
    fn test_base_must_not_sit_under_assets() {
        for base in ["/assets", "/assets/", "/assets/app"] {
            let mut config = FrontConfig::default();
            config.router.base = base.into();

            let errors = validate_config(&config).unwrap_err();
            assert_eq!(
                errors,
                vec![ValidationError::BaseUnderAssets {
                    base: base.to_string(),
                    assets_prefix: "/assets".to_string(),
                }]
            );
        }

        let mut config = FrontConfig::default();
        config.router.base = "/assets-app".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_base_must_avoid_reserved_paths() {
        let mut config = FrontConfig::default();
        config.router.base = "/healthz".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::ReservedPath { field: "router.base", .. }));
    }

    #[test]
    fn test_assets_prefix_must_not_be_root() {
        let mut config = FrontConfig::default();
        config.app.assets_prefix = "/".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::NotAbsolute { field: "app.assets_prefix", .. }));
    }
}
