use axum::http::StatusCode;
use axum::response::IntoResponse;
use chairtime_api::middleware::error_handling::AppError;
use chairtime_core::errors::BookingError;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_status_code_mapping() {
    let cases = vec![
        (
            AppError(BookingError::NotFound("missing".to_string())),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError(BookingError::Validation("bad input".to_string())),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError(BookingError::InvalidService("bad duration".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            AppError(BookingError::SlotUnavailable),
            StatusCode::CONFLICT,
        ),
        (
            AppError(BookingError::Database(eyre::eyre!("down"))),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_slot_unavailable_body_carries_machine_readable_code() {
    let response = AppError(BookingError::SlotUnavailable).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");

    assert_eq!(body["code"], "slot_unavailable");
    assert!(body["error"].as_str().unwrap().contains("no longer available"));
}

#[tokio::test]
async fn test_booking_error_converts_via_question_mark() {
    fn inner() -> Result<(), BookingError> {
        Err(BookingError::SlotUnavailable)
    }

    fn handler_like() -> Result<(), AppError> {
        inner()?;
        Ok(())
    }

    let err = handler_like().expect_err("error propagates");
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}
