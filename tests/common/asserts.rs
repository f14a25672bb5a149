use cors_analyzer::{AnalysisResult, Headers, RequestType};

pub fn assert_actual(result: AnalysisResult) -> Headers {
    match result.request_type() {
        RequestType::ActualRequest => result.into_response_headers(),
        other => panic!("expected actual request, got {:?}", other),
    }
}

pub fn assert_preflight(result: AnalysisResult) -> Headers {
    match result.request_type() {
        RequestType::PreFlight => result.into_response_headers(),
        other => panic!("expected pre-flight request, got {:?}", other),
    }
}

/// Out-of-scope and error outcomes never carry headers.
pub fn assert_headerless(result: &AnalysisResult, expected: RequestType) {
    assert_eq!(result.request_type(), expected);
    assert!(
        result.response_headers().is_empty(),
        "expected no headers for {:?}, got {:?}",
        expected,
        result.response_headers(),
    );
}
