use crate::constants::{header, method, simple_request_header, value};
use crate::headers::HeaderCollection;
use crate::request::CorsRequest;
use crate::strategy::AnalysisStrategy;

pub(crate) struct HeaderBuilder<'a, S: ?Sized> {
    strategy: &'a S,
    request: &'a dyn CorsRequest,
}

impl<'a, S: AnalysisStrategy + ?Sized> HeaderBuilder<'a, S> {
    pub(crate) fn new(strategy: &'a S, request: &'a dyn CorsRequest) -> Self {
        Self { strategy, request }
    }

    /// `Allow-Origin` (echoed), `Allow-Credentials` when supported, `Vary: Origin`.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        if self.strategy.is_request_credentials_supported(self.request) {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                value::ALLOW_CREDENTIALS_TRUE,
            );
        }
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        let exposed = self.strategy.response_exposed_headers(self.request);
        if !exposed.is_empty() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed);
        }
    }

    pub(crate) fn build_max_age_header(&self, headers: &mut HeaderCollection) {
        if self.strategy.is_pre_flight_can_be_cached(self.request) {
            let max_age = self.strategy.pre_flight_cache_max_age(self.request);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
    }

    /// Only needed when the requested method is not simple, unless forced.
    pub(crate) fn build_methods_header(&self, headers: &mut HeaderCollection, request_method: &str) {
        if !is_simple_method(request_method) || self.strategy.is_force_add_allowed_methods() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.strategy.request_allowed_methods(self.request),
            );
        }
    }

    /// Only needed when a requested header is not simple (`Content-Type`
    /// counts as non-simple), unless forced.
    pub(crate) fn build_allowed_headers(
        &self,
        headers: &mut HeaderCollection,
        lc_request_headers: &[String],
    ) {
        if has_non_simple_header(lc_request_headers)
            || self.strategy.is_force_add_allowed_headers()
        {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.strategy.request_allowed_headers(self.request),
            );
        }
    }
}

pub(crate) fn is_simple_method(request_method: &str) -> bool {
    method::SIMPLE.contains(&request_method)
}

pub(crate) fn has_non_simple_header(lc_request_headers: &[String]) -> bool {
    lc_request_headers.iter().any(|header| {
        !simple_request_header::EXCLUDING_CONTENT_TYPE.contains(&header.as_str())
    })
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
