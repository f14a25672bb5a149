use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::ServerOrigin;
use crate::util::is_http_token;
use thiserror::Error;

/// Server-side CORS policy, compiled into [`crate::Settings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub server_origin: ServerOrigin,
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Pre-flight cache lifetime in seconds; `0` disables `Access-Control-Max-Age`.
    pub max_age: u64,
    /// Emit `Access-Control-Allow-Methods` even for simple request methods.
    pub force_allowed_methods: bool,
    /// Emit `Access-Control-Allow-Headers` even when only simple headers were requested.
    pub force_allowed_headers: bool,
    /// Validate the `Host` header against the server origin first.
    pub check_host: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            server_origin: ServerOrigin::default(),
            allowed_origins: AllowedOrigins::default(),
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: 0,
            force_allowed_methods: false,
            force_allowed_headers: false,
            check_host: false,
        }
    }
}

impl CorsOptions {
    pub fn new(server_origin: ServerOrigin) -> Self {
        Self {
            server_origin,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .allowed_methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(header) = self
            .allowed_headers
            .values()
            .iter()
            .chain(self.exposed_headers.values())
            .find(|header| !is_http_token(header))
        {
            return Err(ValidationError::InvalidHeaderName(header.clone()));
        }

        Ok(())
    }
}

/// Configuration faults, reported before any request is analyzed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server origin scheme must not be empty")]
    EmptyScheme,
    #[error("server origin host must not be empty")]
    EmptyHost,
    #[error("server origin host `{0}` contains characters not allowed in a host")]
    InvalidHost(String),
    #[error("server origin port {0} is out of range")]
    InvalidPort(u16),
    #[error("`{0}` is not a valid server origin")]
    InvalidServerOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP token")]
    InvalidHeaderName(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
