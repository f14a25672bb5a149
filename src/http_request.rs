use crate::request::CorsRequest;
use crate::result::AnalysisResult;
use http::header::{HeaderMap, HeaderName, HeaderValue, VARY};
use http::request::{Parts, Request};

fn header_values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect()
}

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::<B>::method(self).as_str()
    }

    fn header(&self, name: &str) -> Vec<&str> {
        header_values(self.headers(), name)
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }
}

impl CorsRequest for Parts {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn header(&self, name: &str) -> Vec<&str> {
        header_values(&self.headers, name)
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }
}

impl AnalysisResult {
    /// Copies the computed headers onto `headers`. `Vary` is appended to
    /// whatever the response already varies on; every other name replaces
    /// existing values.
    ///
    /// Entries that are not valid HTTP header names or values are skipped.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for (name, value) in self.response_headers() {
            let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                continue;
            };
            if name == VARY {
                append_vary(headers, value);
                continue;
            }
            if let Ok(value) = HeaderValue::from_str(value) {
                headers.insert(name, value);
            }
        }
    }
}

fn append_vary(headers: &mut HeaderMap, value: &str) {
    for entry in value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
    {
        let present = headers
            .get_all(VARY)
            .iter()
            .filter_map(|existing| existing.to_str().ok())
            .flat_map(|existing| existing.split(','))
            .map(str::trim)
            .any(|existing| existing == "*" || existing.eq_ignore_ascii_case(entry));
        if present {
            continue;
        }
        if let Ok(entry) = HeaderValue::from_str(entry) {
            headers.append(VARY, entry);
        }
    }
}

#[cfg(test)]
#[path = "http_request_test.rs"]
mod http_request_test;
