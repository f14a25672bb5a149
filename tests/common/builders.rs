use cors_analyzer::constants::{header, method};
use cors_analyzer::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, AnalysisResult, Analyzer, CorsOptions,
    ExposedHeaders, NoopLogger, RequestContext, ServerOrigin, Settings,
};
use std::sync::Arc;

pub const SERVER_HOST: &str = "example.com:123";

#[derive(Default)]
pub struct AnalyzerBuilder {
    server_origin: Option<ServerOrigin>,
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    force_allowed_methods: Option<bool>,
    force_allowed_headers: Option<bool>,
    check_host: Option<bool>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server_origin(mut self, origin: ServerOrigin) -> Self {
        self.server_origin = Some(origin);
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.origins = Some(AllowedOrigins::any());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn methods_config(mut self, methods: AllowedMethods) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn force_allowed_methods(mut self, enabled: bool) -> Self {
        self.force_allowed_methods = Some(enabled);
        self
    }

    pub fn force_allowed_headers(mut self, enabled: bool) -> Self {
        self.force_allowed_headers = Some(enabled);
        self
    }

    pub fn check_host(mut self, enabled: bool) -> Self {
        self.check_host = Some(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            server_origin: self.server_origin.unwrap_or_else(default_server_origin),
            allowed_origins: self.origins.unwrap_or(defaults.allowed_origins),
            allowed_methods: self.methods.unwrap_or(defaults.allowed_methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            force_allowed_methods: self
                .force_allowed_methods
                .unwrap_or(defaults.force_allowed_methods),
            force_allowed_headers: self
                .force_allowed_headers
                .unwrap_or(defaults.force_allowed_headers),
            check_host: self.check_host.unwrap_or(defaults.check_host),
        }
    }

    pub fn settings(self) -> Settings {
        Settings::new(self.options())
            .expect("valid CORS configuration")
            .with_logger(Arc::new(NoopLogger))
    }

    pub fn build(self) -> Analyzer<Settings> {
        Analyzer::with_logger(self.settings(), Arc::new(NoopLogger))
    }
}

fn default_server_origin() -> ServerOrigin {
    ServerOrigin::new("http", "example.com", 123).expect("valid server origin")
}

pub struct RequestBuilder {
    method: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: vec![(header::HOST.to_string(), SERVER_HOST.to_string())],
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn host(self, host: impl Into<String>) -> Self {
        self.without_header(header::HOST).header(header::HOST, host)
    }

    pub fn without_host(self) -> Self {
        self.without_header(header::HOST)
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    fn without_header(mut self, name: &str) -> Self {
        self.headers
            .retain(|(candidate, _)| !candidate.eq_ignore_ascii_case(name));
        self
    }

    pub fn analyze(&self, analyzer: &Analyzer<Settings>) -> AnalysisResult {
        let context = self.headers.iter().fold(
            RequestContext::new(&self.method),
            |context, (name, value)| context.with_header(name, value),
        );
        analyzer.analyze(&context)
    }
}

pub fn analyzer() -> AnalyzerBuilder {
    AnalyzerBuilder::new()
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
