use crate::allowed_headers::HeaderRules;
use crate::allowed_methods::MethodRules;
use crate::allowed_origins::OriginRules;
use crate::constants::header;
use crate::constants::value::LIST_JOINER;
use crate::logger::{Logger, TracingLogger};
use crate::options::{CorsOptions, ValidationError};
use crate::request::CorsRequest;
use crate::strategy::AnalysisStrategy;
use std::fmt;
use std::sync::Arc;

/// A compiled, immutable [`CorsOptions`] snapshot answering the same policy
/// for every resource and request.
///
/// Share it behind an `Arc`; to reconfigure, build a new one.
#[derive(Clone)]
pub struct Settings {
    options: CorsOptions,
    origins: OriginRules,
    methods: MethodRules,
    headers: HeaderRules,
    exposed_headers: String,
    logger: Arc<dyn Logger>,
}

impl Settings {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        Ok(Self {
            origins: options.allowed_origins.compile(),
            methods: options.allowed_methods.compile(),
            headers: options.allowed_headers.compile(),
            exposed_headers: options.exposed_headers.header_value(),
            options,
            logger: Arc::new(TracingLogger),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The options this snapshot was compiled from.
    pub fn options(&self) -> &CorsOptions {
        &self.options
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl AnalysisStrategy for Settings {
    fn server_origin_scheme(&self) -> &str {
        self.options.server_origin.scheme()
    }

    fn server_origin_host(&self) -> &str {
        self.options.server_origin.host()
    }

    fn server_origin_port(&self) -> Option<u16> {
        self.options.server_origin.port()
    }

    fn is_check_host(&self) -> bool {
        self.options.check_host
    }

    fn is_request_origin_allowed(&self, origin: &str) -> bool {
        let allowed = self.origins.allows(origin);
        if !allowed {
            self.logger
                .debug("Origin is not in the allowed origins.", &[("origin", &origin)]);
        }
        allowed
    }

    fn is_request_method_supported(&self, method: &str) -> bool {
        let supported = self.methods.allows(method);
        if !supported {
            self.logger
                .debug("Method is not in the allowed methods.", &[("method", &method)]);
        }
        supported
    }

    fn is_request_all_headers_supported(&self, lc_headers: &[String]) -> bool {
        let supported = self.headers.allows(lc_headers);
        if !supported && let Some(rejected) = self.headers.first_rejected(lc_headers) {
            self.logger
                .debug("Header is not in the allowed headers.", &[("header", &rejected)]);
        }
        supported
    }

    fn is_request_credentials_supported(&self, _request: &dyn CorsRequest) -> bool {
        self.options.credentials
    }

    fn is_pre_flight_can_be_cached(&self, _request: &dyn CorsRequest) -> bool {
        self.options.max_age > 0
    }

    fn pre_flight_cache_max_age(&self, _request: &dyn CorsRequest) -> u64 {
        self.options.max_age
    }

    fn is_force_add_allowed_methods(&self) -> bool {
        self.options.force_allowed_methods
    }

    fn is_force_add_allowed_headers(&self) -> bool {
        self.options.force_allowed_headers
    }

    /// With every method allowed, the requested method is echoed back.
    fn request_allowed_methods(&self, request: &dyn CorsRequest) -> String {
        if self.methods.allows_all_methods() {
            return request
                .first_header(header::ACCESS_CONTROL_REQUEST_METHOD)
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
        }
        self.methods.display().to_string()
    }

    /// With every header allowed, the requested headers are echoed back.
    fn request_allowed_headers(&self, request: &dyn CorsRequest) -> String {
        if self.headers.allows_all_headers() {
            return request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .into_iter()
                .flat_map(|value| value.split(header::LIST_SEPARATOR))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .collect::<Vec<_>>()
                .join(LIST_JOINER);
        }
        self.headers.display().to_string()
    }

    fn response_exposed_headers(&self, _request: &dyn CorsRequest) -> String {
        self.exposed_headers.clone()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
