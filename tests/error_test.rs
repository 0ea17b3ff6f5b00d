use axum::{http::StatusCode, response::IntoResponse};
use liftbook::error::AppError;

#[test]
fn test_not_found_returns_404() {
    let response = AppError::NotFound("Exercise not found".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_bad_request_returns_400() {
    let response = AppError::BadRequest("Invalid input".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_validation_returns_400() {
    let response = AppError::Validation("Select workout date.".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_store_closed_returns_503() {
    let response = AppError::StoreClosed.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_io_returns_500() {
    let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let response = AppError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_returns_500() {
    let response = AppError::Internal("Something went wrong".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
