//! Configuration constants and utilities for tapeline
//!
//! Endpoint and timeout defaults live here, together with the environment
//! variable overrides. Precedence is command line, then environment, then
//! the defaults below.

use std::time::Duration;

/// Default endpoint of the calculation service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/calculate";

/// Endpoint of the older, multiply-only calculation service
pub const DEFAULT_LEGACY_ENDPOINT: &str = "http://localhost:8080/api/multiply";

/// Environment variable name for overriding the endpoint
pub const ENDPOINT_ENV_VAR: &str = "TAPELINE_ENDPOINT";

/// Environment variable name for the log filter (also enables file logging)
pub const LOG_ENV_VAR: &str = "TAPELINE_LOG";

/// Log file written next to the process when logging is enabled
pub const LOG_FILE: &str = "tapeline.log";

/// Default timeout imposed on every outbound evaluation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve the endpoint to use, checking the command line value first, then
/// the environment variable, then falling back to the default for the
/// selected endpoint flavor.
pub fn resolve_endpoint(cli_endpoint: Option<&str>, legacy: bool) -> String {
    if let Some(endpoint) = cli_endpoint {
        return endpoint.to_string();
    }

    std::env::var_os(ENDPOINT_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| {
            if legacy {
                DEFAULT_LEGACY_ENDPOINT.to_string()
            } else {
                DEFAULT_ENDPOINT.to_string()
            }
        })
}
