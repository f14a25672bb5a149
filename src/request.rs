/// Read access to the inbound request, supplied by the host application.
///
/// Header name lookups are case-insensitive. Only the method and a handful of
/// CORS-related headers are ever read.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// All values of the header `name` in arrival order, empty when absent.
    fn header(&self, name: &str) -> Vec<&str>;

    fn has_header(&self, name: &str) -> bool {
        !self.header(name).is_empty()
    }

    fn first_header(&self, name: &str) -> Option<&str> {
        self.header(name).into_iter().next()
    }
}

impl<T: CorsRequest + ?Sized> CorsRequest for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn header(&self, name: &str) -> Vec<&str> {
        (**self).header(name)
    }

    fn has_header(&self, name: &str) -> bool {
        (**self).has_header(name)
    }

    fn first_header(&self, name: &str) -> Option<&str> {
        (**self).first_header(name)
    }
}

/// Borrowed, framework-agnostic request view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub headers: Vec<(&'a str, &'a str)>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'a str, value: &'a str) -> Self {
        self.headers.push((name, value));
        self
    }
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
            .collect()
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
