use crate::request::CorsRequest;
use std::sync::Arc;

/// Policy questions the [`crate::Analyzer`] asks while classifying a request.
///
/// The analyzer never reads configuration directly, so a custom strategy can
/// answer per request (for example per route) by inspecting `request`.
pub trait AnalysisStrategy: Send + Sync {
    fn server_origin_scheme(&self) -> &str;

    fn server_origin_host(&self) -> &str;

    /// `None` when the server listens on the scheme's default port.
    fn server_origin_port(&self) -> Option<u16>;

    fn is_check_host(&self) -> bool;

    fn is_request_origin_allowed(&self, origin: &str) -> bool;

    /// Case-sensitive unless every method is allowed.
    fn is_request_method_supported(&self, method: &str) -> bool;

    /// `lc_headers` are lower-cased header names.
    fn is_request_all_headers_supported(&self, lc_headers: &[String]) -> bool;

    fn is_request_credentials_supported(&self, request: &dyn CorsRequest) -> bool;

    fn is_pre_flight_can_be_cached(&self, request: &dyn CorsRequest) -> bool;

    fn pre_flight_cache_max_age(&self, request: &dyn CorsRequest) -> u64;

    fn is_force_add_allowed_methods(&self) -> bool;

    fn is_force_add_allowed_headers(&self) -> bool;

    fn request_allowed_methods(&self, request: &dyn CorsRequest) -> String;

    fn request_allowed_headers(&self, request: &dyn CorsRequest) -> String;

    fn response_exposed_headers(&self, request: &dyn CorsRequest) -> String;
}

macro_rules! forward_strategy {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<S: AnalysisStrategy + ?Sized> AnalysisStrategy for $wrapper {
                fn server_origin_scheme(&self) -> &str {
                    (**self).server_origin_scheme()
                }

                fn server_origin_host(&self) -> &str {
                    (**self).server_origin_host()
                }

                fn server_origin_port(&self) -> Option<u16> {
                    (**self).server_origin_port()
                }

                fn is_check_host(&self) -> bool {
                    (**self).is_check_host()
                }

                fn is_request_origin_allowed(&self, origin: &str) -> bool {
                    (**self).is_request_origin_allowed(origin)
                }

                fn is_request_method_supported(&self, method: &str) -> bool {
                    (**self).is_request_method_supported(method)
                }

                fn is_request_all_headers_supported(&self, lc_headers: &[String]) -> bool {
                    (**self).is_request_all_headers_supported(lc_headers)
                }

                fn is_request_credentials_supported(&self, request: &dyn CorsRequest) -> bool {
                    (**self).is_request_credentials_supported(request)
                }

                fn is_pre_flight_can_be_cached(&self, request: &dyn CorsRequest) -> bool {
                    (**self).is_pre_flight_can_be_cached(request)
                }

                fn pre_flight_cache_max_age(&self, request: &dyn CorsRequest) -> u64 {
                    (**self).pre_flight_cache_max_age(request)
                }

                fn is_force_add_allowed_methods(&self) -> bool {
                    (**self).is_force_add_allowed_methods()
                }

                fn is_force_add_allowed_headers(&self) -> bool {
                    (**self).is_force_add_allowed_headers()
                }

                fn request_allowed_methods(&self, request: &dyn CorsRequest) -> String {
                    (**self).request_allowed_methods(request)
                }

                fn request_allowed_headers(&self, request: &dyn CorsRequest) -> String {
                    (**self).request_allowed_headers(request)
                }

                fn response_exposed_headers(&self, request: &dyn CorsRequest) -> String {
                    (**self).response_exposed_headers(request)
                }
            }
        )+
    };
}

forward_strategy!(&S, Arc<S>, Box<S>);
