use crate::constants::simple_response_header;
use crate::constants::value::LIST_JOINER;
use crate::util::{dedup_trimmed, normalize_lower};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static SIMPLE_RESPONSE_HEADERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| simple_response_header::ALL.into_iter().collect());

/// Response headers scripts on an allowed origin may read, rendered into
/// `Access-Control-Expose-Headers`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Builds the list, trimming whitespace and removing case-insensitive
    /// duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: dedup_trimmed(values, normalize_lower),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Header value with simple response headers left out, since a browser
    /// exposes those regardless. Empty when nothing remains.
    pub(crate) fn header_value(&self) -> String {
        self.values
            .iter()
            .filter(|value| !is_simple_response_header(value))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(LIST_JOINER)
    }
}

pub(crate) fn is_simple_response_header(name: &str) -> bool {
    SIMPLE_RESPONSE_HEADERS.contains(normalize_lower(name).as_str())
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
