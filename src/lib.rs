mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod analyzer;
pub mod constants;
mod exposed_headers;
mod header_builder;
mod headers;
#[cfg(feature = "http")]
mod http_request;
mod logger;
mod options;
mod origin;
mod request;
mod result;
mod settings;
mod strategy;
#[cfg(test)]
mod test_support;
pub mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOrigins;
pub use analyzer::Analyzer;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use logger::{LogField, Logger, NoopLogger, TracingLogger};
pub use options::{CorsOptions, ValidationError};
pub use origin::{HostHeader, OriginParseError, ParsedOrigin, ServerOrigin};
pub use request::{CorsRequest, RequestContext};
pub use result::{AnalysisResult, RequestType};
pub use settings::Settings;
pub use strategy::AnalysisStrategy;
pub use util::parse_request_headers;
