use crate::constants::{header, method};
use crate::header_builder::HeaderBuilder;
use crate::logger::{Logger, TracingLogger};
use crate::origin::{HostHeader, ParsedOrigin};
use crate::request::CorsRequest;
use crate::result::{AnalysisResult, RequestType};
use crate::settings::Settings;
use crate::strategy::AnalysisStrategy;
use crate::util::parse_request_headers;
use std::sync::Arc;

/// Classifies requests per the CORS resource processing model and computes
/// the response headers to emit.
///
/// `analyze` is a pure function of the request and the strategy: it performs
/// no I/O and keeps no state between calls, so one analyzer can serve many
/// threads.
pub struct Analyzer<S = Settings> {
    strategy: S,
    logger: Arc<dyn Logger>,
}

impl<S: AnalysisStrategy> Analyzer<S> {
    pub fn new(strategy: S) -> Self {
        Self::with_logger(strategy, Arc::new(TracingLogger))
    }

    pub fn with_logger(strategy: S, logger: Arc<dyn Logger>) -> Self {
        Self { strategy, logger }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn analyze<R: CorsRequest + ?Sized>(&self, request: &R) -> AnalysisResult {
        let request = &request as &dyn CorsRequest;
        self.logger.debug("CORS analysis for request started.", &[]);
        let result = self.analyze_request(request);
        self.logger.debug(
            "CORS analysis for request completed.",
            &[("request_type", &result.request_type())],
        );
        result
    }

    fn analyze_request(&self, request: &dyn CorsRequest) -> AnalysisResult {
        if self.strategy.is_check_host() && !self.is_same_host(request) {
            return AnalysisResult::without_headers(RequestType::ErrorNoHostHeader);
        }

        let Some(origin) = request
            .first_header(header::ORIGIN)
            .filter(|origin| !origin.is_empty())
        else {
            self.logger
                .info("Request is not CORS (request origin is empty).", &[]);
            return AnalysisResult::without_headers(RequestType::OutOfScope);
        };

        if !self.is_cross_origin(origin) {
            return AnalysisResult::without_headers(RequestType::OutOfScope);
        }

        if !self.strategy.is_request_origin_allowed(origin) {
            self.logger.info(
                "Request origin is not allowed. Check config settings for Allowed Origins.",
                &[("origin", &origin)],
            );
            return AnalysisResult::without_headers(RequestType::ErrorOriginNotAllowed);
        }

        if request.method() == method::OPTIONS {
            self.analyze_as_pre_flight(request, origin)
        } else {
            self.analyze_as_request(request, origin)
        }
    }

    fn analyze_as_request(&self, request: &dyn CorsRequest, origin: &str) -> AnalysisResult {
        self.logger
            .debug("Request is identified as an actual CORS request.", &[]);

        let builder = HeaderBuilder::new(&self.strategy, request);
        let mut headers = builder.build_origin_headers(origin);
        builder.build_exposed_headers(&mut headers);

        AnalysisResult::new(RequestType::ActualRequest, headers.into_headers())
    }

    fn analyze_as_pre_flight(&self, request: &dyn CorsRequest, origin: &str) -> AnalysisResult {
        let Some(request_method) = request
            .first_header(header::ACCESS_CONTROL_REQUEST_METHOD)
            .filter(|value| !value.is_empty())
        else {
            self.logger.debug(
                "Request is not CORS (header Access-Control-Request-Method is not specified).",
                &[],
            );
            return AnalysisResult::without_headers(RequestType::OutOfScope);
        };

        self.logger
            .debug("Request is identified as a pre-flight CORS request.", &[]);

        let lc_request_headers =
            parse_request_headers(&request.header(header::ACCESS_CONTROL_REQUEST_HEADERS));

        if !self.strategy.is_request_method_supported(request_method) {
            self.logger.info(
                "Request method is not supported. Check config settings for Allowed Methods.",
                &[("method", &request_method)],
            );
            return AnalysisResult::without_headers(RequestType::ErrorMethodNotSupported);
        }

        if !self
            .strategy
            .is_request_all_headers_supported(&lc_request_headers)
        {
            self.logger.info(
                "Request headers are not supported. Check config settings for Allowed Headers.",
                &[("headers", &lc_request_headers.join(","))],
            );
            return AnalysisResult::without_headers(RequestType::ErrorHeadersNotSupported);
        }

        let builder = HeaderBuilder::new(&self.strategy, request);
        let mut headers = builder.build_origin_headers(origin);
        builder.build_max_age_header(&mut headers);
        builder.build_methods_header(&mut headers, request_method);
        builder.build_allowed_headers(&mut headers, &lc_request_headers);

        AnalysisResult::new(RequestType::PreFlight, headers.into_headers())
    }

    fn is_same_host(&self, request: &dyn CorsRequest) -> bool {
        let server_host = self.strategy.server_origin_host();
        let server_port = self.strategy.server_origin_port();
        let host = request.first_header(header::HOST);

        let is_same_host = host
            .map(HostHeader::parse)
            .is_some_and(|parsed| parsed.matches(server_host, server_port));

        if !is_same_host {
            let server_port = PortField(server_port);
            self.logger.info(
                "Host header in request either absent or do not match server origin. \
                 Check config settings for Server Origin and Host Check.",
                &[
                    ("host", &host.unwrap_or_default()),
                    ("server_origin_host", &server_host),
                    ("server_origin_port", &server_port),
                ],
            );
        }

        is_same_host
    }

    /// An unparseable origin counts as cross-origin so that it still goes
    /// through the allow-list.
    fn is_cross_origin(&self, origin: &str) -> bool {
        let parsed = match ParsedOrigin::parse(origin) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.logger.warning(
                    "Request origin header URL cannot be parsed.",
                    &[("url", &origin), ("error", &err)],
                );
                return true;
            }
        };

        let server_scheme = self.strategy.server_origin_scheme();
        let server_host = self.strategy.server_origin_host();
        let server_port = self.strategy.server_origin_port();

        if !parsed.is_host_equal(server_host)
            || !parsed.is_port_equal(server_port)
            || !parsed.is_scheme_equal(server_scheme)
        {
            return true;
        }

        let server_port = PortField(server_port);
        self.logger.info(
            "Request is not CORS (request origin equals to server one).",
            &[
                ("request_origin", &origin),
                ("server_origin_scheme", &server_scheme),
                ("server_origin_host", &server_host),
                ("server_origin_port", &server_port),
            ],
        );
        false
    }
}

/// Displays an optional port, `-` when absent.
struct PortField(Option<u16>);

impl std::fmt::Display for PortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(port) => write!(f, "{port}"),
            None => f.write_str("-"),
        }
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod analyzer_test;
