//! Problem Details test helpers for backend testing
//!
//! Utilities for asserting Problem Details responses in both unit and
//! integration tests without depending on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local ProblemDetails struct that matches the backend's structure
/// but doesn't depend on backend types
#[derive(Debug, Deserialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
///
/// - HTTP status matches expected
/// - Content-Type is `application/problem+json`
/// - `x-trace-id` header exists and matches the body `trace_id`
/// - Problem Details fields are present and match expected values
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail: Option<&str>,
) {
    assert_eq!(status, expected_status);

    // Content-Type may include parameters (e.g., charset)
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str).unwrap_or_else(|_| {
        panic!("Failed to parse error body as ProblemDetails. Raw body: {body_str}")
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(
        !trace_id_header.is_empty(),
        "x-trace-id header should not be empty"
    );
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    if let Some(detail) = expected_detail {
        assert_eq!(problem.detail, detail);
    }
    assert!(!problem.title.is_empty(), "title should not be empty");
    assert!(
        problem.type_.ends_with(&problem.code),
        "type should reference the error code"
    );
}
