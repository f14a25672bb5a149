pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";

    /// Separator used inside `Access-Control-Request-Headers`.
    pub const LIST_SEPARATOR: char = ',';
}

pub mod value {
    pub const ALLOW_CREDENTIALS_TRUE: &str = "true";
    /// Joiner for the rendered allow/expose lists.
    pub const LIST_JOINER: &str = ", ";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods a browser may send cross-origin without a pre-flight.
    pub const SIMPLE: [&str; 3] = [GET, HEAD, POST];
}

/// Lower-cased simple request header names.
pub mod simple_request_header {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const CONTENT_LANGUAGE: &str = "content-language";
    pub const CONTENT_TYPE: &str = "content-type";

    /// Simple request headers that never require `Access-Control-Allow-Headers`.
    /// `Content-Type` is left out because only some of its values are simple.
    pub const EXCLUDING_CONTENT_TYPE: [&str; 3] = [ACCEPT, ACCEPT_LANGUAGE, CONTENT_LANGUAGE];
}

/// Lower-cased response headers a browser always exposes to scripts.
pub mod simple_response_header {
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const CONTENT_LANGUAGE: &str = "content-language";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const EXPIRES: &str = "expires";
    pub const LAST_MODIFIED: &str = "last-modified";
    pub const PRAGMA: &str = "pragma";

    pub const ALL: [&str; 7] = [
        ACCEPT_LANGUAGE,
        CACHE_CONTROL,
        CONTENT_LANGUAGE,
        CONTENT_TYPE,
        EXPIRES,
        LAST_MODIFIED,
        PRAGMA,
    ];
}

pub mod scheme {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";

    pub const HTTP_DEFAULT_PORT: u16 = 80;
    pub const HTTPS_DEFAULT_PORT: u16 = 443;
}
