//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use rstest::rstest;
use serde_json::json;

use crate::domain::Error;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("sold"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn response_body(error: Error) -> serde_json::Value {
    let response = ResponseError::error_response(&error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let body = response_body(Error::internal("UNIQUE constraint failed").with_details(
        json!({ "secret": "x" }),
    ))
    .await;
    assert_eq!(
        body,
        json!({ "code": "internal_error", "message": "Internal server error" })
    );
}

#[actix_web::test]
async fn expected_errors_keep_their_payload() {
    let body = response_body(
        Error::invalid_request("bad").with_details(json!({ "field": "price" })),
    )
    .await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "bad");
    assert_eq!(body["details"]["field"], "price");
}
