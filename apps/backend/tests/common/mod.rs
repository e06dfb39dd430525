#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate that a response follows the ProblemDetails structure, that
/// trace_id matches the x-trace-id header, and that header rules hold:
///
/// - 401: WWW-Authenticate: Bearer (RFC 7235)
/// - 400/403/404: no WWW-Authenticate
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();

    match expected_status {
        401 => {
            let www_auth = headers.get("WWW-Authenticate");
            assert!(
                www_auth.is_some(),
                "401 responses must have WWW-Authenticate header per RFC 7235"
            );
            assert_eq!(www_auth.unwrap().to_str().unwrap(), "Bearer");
        }
        400 | 403 | 404 => {
            assert!(
                headers.get("WWW-Authenticate").is_none(),
                "{expected_status} responses must not have WWW-Authenticate header"
            );
        }
        _ => {}
    }

    let body = test::read_body(resp).await;

    backend_test_support::problem_details::assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        StatusCode::from_u16(expected_status).expect("valid status code"),
        expected_code,
        Some(expected_detail),
    );
}

/// Read a failure response's code and detail for comparing two error
/// bodies against each other (anti-enumeration checks).
pub async fn read_problem_code_and_detail(resp: ServiceResponse<BoxBody>) -> (String, String) {
    let body: serde_json::Value = test::read_body_json(resp).await;
    (
        body["code"].as_str().unwrap_or_default().to_string(),
        body["detail"].as_str().unwrap_or_default().to_string(),
    )
}
