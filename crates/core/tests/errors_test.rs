use chairtime_core::errors::{BookingError, BookingResult};

#[test]
fn test_error_display() {
    let not_found = BookingError::NotFound("Stylist not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let invalid_service = BookingError::InvalidService("duration must be positive".to_string());
    let unavailable = BookingError::SlotUnavailable;
    let database = BookingError::Database(eyre::eyre!("connection refused"));

    assert_eq!(not_found.to_string(), "Resource not found: Stylist not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        invalid_service.to_string(),
        "Invalid service definition: duration must be positive"
    );
    assert_eq!(
        unavailable.to_string(),
        "Requested slot is no longer available"
    );
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_database_error_from_eyre() {
    fn fails() -> eyre::Result<()> {
        Err(eyre::eyre!("pool exhausted"))
    }

    fn propagates() -> BookingResult<()> {
        fails()?;
        Ok(())
    }

    assert!(matches!(propagates(), Err(BookingError::Database(_))));
}

#[test]
fn test_slot_unavailable_is_distinguishable() {
    // Callers branch on this variant to re-offer slots instead of showing
    // a generic failure, so it must never be folded into another variant.
    let err: BookingResult<()> = Err(BookingError::SlotUnavailable);
    match err {
        Err(BookingError::SlotUnavailable) => {}
        other => panic!("expected SlotUnavailable, got {other:?}"),
    }
}

#[test]
fn test_internal_from_boxed_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let err = BookingError::Internal(Box::new(io_error));
    assert!(err.to_string().contains("Internal server error:"));
}
