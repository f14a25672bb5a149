use crate::headers::Headers;
use std::fmt;

/// Classification of an analyzed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// Not a CORS request: no `Origin`, same origin, or an `OPTIONS` request
    /// without `Access-Control-Request-Method`.
    OutOfScope,
    PreFlight,
    ActualRequest,
    ErrorOriginNotAllowed,
    ErrorMethodNotSupported,
    ErrorHeadersNotSupported,
    /// `Host` is absent or does not match the server origin.
    ErrorNoHostHeader,
}

impl RequestType {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Self::ErrorOriginNotAllowed
                | Self::ErrorMethodNotSupported
                | Self::ErrorHeadersNotSupported
                | Self::ErrorNoHostHeader
        )
    }

    /// Stable numeric code, handy for metrics labels and persisted logs.
    pub fn code(self) -> u8 {
        match self {
            Self::OutOfScope => 0,
            Self::PreFlight => 1,
            Self::ActualRequest => 2,
            Self::ErrorOriginNotAllowed => 3,
            Self::ErrorMethodNotSupported => 4,
            Self::ErrorHeadersNotSupported => 5,
            Self::ErrorNoHostHeader => 6,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OutOfScope => "out of CORS scope",
            Self::PreFlight => "pre-flight request",
            Self::ActualRequest => "actual request",
            Self::ErrorOriginNotAllowed => "origin not allowed",
            Self::ErrorMethodNotSupported => "method not supported",
            Self::ErrorHeadersNotSupported => "headers not supported",
            Self::ErrorNoHostHeader => "host header missing or mismatched",
        };
        f.write_str(name)
    }
}

/// Outcome of [`crate::Analyzer::analyze`]: what the request is and which
/// headers to put on the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    request_type: RequestType,
    headers: Headers,
}

impl AnalysisResult {
    pub(crate) fn new(request_type: RequestType, headers: Headers) -> Self {
        Self {
            request_type,
            headers,
        }
    }

    pub(crate) fn without_headers(request_type: RequestType) -> Self {
        Self::new(request_type, Headers::new())
    }

    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    pub fn response_headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks a response header up by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn into_response_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
