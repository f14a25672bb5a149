use crate::constants::value::LIST_JOINER;
use crate::util::{dedup_trimmed, normalize_lower};
use std::collections::HashSet;

/// Headers accepted in `Access-Control-Request-Headers`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Any requested header is accepted.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    /// Builds a list in configured casing; duplicates are detected
    /// case-insensitively and the first spelling wins.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedup_trimmed(values, normalize_lower))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub(crate) fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }

    pub(crate) fn compile(&self) -> HeaderRules {
        match self {
            Self::Any => HeaderRules {
                allow_all: true,
                allowed: HashSet::new(),
                display: String::new(),
            },
            Self::List(values) => HeaderRules {
                allow_all: false,
                allowed: values.iter().map(|value| normalize_lower(value)).collect(),
                display: values.join(LIST_JOINER),
            },
        }
    }
}

/// Precomputed lookup and display form of [`AllowedHeaders`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeaderRules {
    allow_all: bool,
    allowed: HashSet<String>,
    display: String,
}

impl HeaderRules {
    pub(crate) fn allows_all_headers(&self) -> bool {
        self.allow_all
    }

    /// Every lower-cased header must be in the allow-set.
    pub(crate) fn allows(&self, lc_headers: &[String]) -> bool {
        self.allow_all || lc_headers.iter().all(|header| self.allowed.contains(header))
    }

    /// First lower-cased header missing from the allow-set.
    pub(crate) fn first_rejected<'a>(&self, lc_headers: &'a [String]) -> Option<&'a str> {
        if self.allow_all {
            return None;
        }
        lc_headers
            .iter()
            .find(|header| !self.allowed.contains(*header))
            .map(String::as_str)
    }

    pub(crate) fn display(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
