#![allow(clippy::disallowed_methods)] // unwrap() is acceptable in tests

use super::*;

#[test]
fn test_credentials_missing_display() {
    let err = Error::credentials_missing("API key and secret required");
    assert!(matches!(err, Error::CredentialsMissing(_)));
    assert!(err.to_string().contains("API key and secret required"));
}

#[test]
fn test_empty_response_carries_command() {
    let err = Error::empty_response("returnBalances");
    match &err {
        Error::EmptyResponse { command } => assert_eq!(command, "returnBalances"),
        other => panic!("Expected EmptyResponse, got {other:?}"),
    }
    assert!(err.is_empty_response());
    assert!(!err.is_credentials_missing());
}

#[test]
fn test_request_failed_is_transport() {
    let err = Error::request_failed(503, "Service unavailable");
    match err.as_transport() {
        Some(TransportError::RequestFailed { status, message }) => {
            assert_eq!(*status, 503);
            assert_eq!(message, "Service unavailable");
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[test]
fn test_from_transport_error() {
    let err: Error = TransportError::Timeout.into();
    assert!(matches!(err.as_transport(), Some(TransportError::Timeout)));
}

#[test]
fn test_context_penetration() {
    let err = Error::credentials_missing("missing")
        .context("Failed to sign request")
        .context("Failed to fetch balances");
    assert!(err.is_credentials_missing());
    assert!(matches!(err.root_cause(), Error::CredentialsMissing(_)));
    assert_eq!(err.to_string(), "Failed to fetch balances");
}

#[test]
fn test_report_lists_causes() {
    let err = Error::connection("Connection refused").context("Failed to fetch ticker");
    let report = err.report();
    assert!(report.starts_with("Failed to fetch ticker"));
    assert!(report.contains("Caused by: Transport error: Connection failed: Connection refused"));
}

#[test]
fn test_context_ext_on_result() {
    let result: Result<()> = Err(Error::empty_response("returnTicker"));
    let err = result.context("ticker refresh").unwrap_err();
    assert!(err.is_empty_response());
    assert_eq!(err.to_string(), "ticker refresh");
}

#[test]
fn test_context_ext_lazy_not_evaluated_on_ok() {
    let result: Result<u8> = Ok(7);
    let value = result
        .with_context(|| -> String { panic!("must not be evaluated") })
        .unwrap();
    assert_eq!(value, 7);
}

#[test]
fn test_context_ext_on_option() {
    let missing: Option<&str> = None;
    let err = missing.context("Missing field 'orderNumber'").unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}

#[test]
fn test_config_validation_error_converts() {
    let err: Error = ConfigValidationError::invalid("max_response_size", "cannot be zero").into();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert!(err.to_string().contains("max_response_size"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<TransportError>();
}

#[test]
fn test_error_size_stays_small() {
    assert!(std::mem::size_of::<Error>() <= 56);
}
