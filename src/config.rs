//! Login client configuration.
//!
//! A WASM bundle has no process environment, so overrides are read at build
//! time through `option_env!` and baked into the binary.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// URL the login mutations are posted to.
    pub graphql_endpoint: String,
    /// Session storage key holding the bearer token.
    pub token_key: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl LoginConfig {
    /// Build config from build-time variables.
    ///
    /// Optional:
    /// - `LOGIN_GRAPHQL_ENDPOINT`: default `/graphql`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LOGIN_GRAPHQL_ENDPOINT"))
    }

    #[must_use]
    pub fn from_raw(endpoint: Option<&str>) -> Self {
        Self {
            graphql_endpoint: parse_endpoint(endpoint),
            ..Self::default()
        }
    }
}

fn parse_endpoint(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.trim_end_matches('/').is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
    }
}
