//! Coverage for outcome construction and failure normalization.

use std::sync::Arc;

use verdict::{
    FailureInput, NativeError, OriginalError, Outcome, PartialError, failure, flat_map, map,
    status_message, success,
};

use crate::common::{UpstreamError, quiet_normalizer, upstream_with_response};

#[test]
fn test_success_carries_value_and_no_error() {
    let outcome = success(vec![1, 2, 3]);
    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
    assert_eq!(outcome.data(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_success_accepts_unit_and_options() {
    assert!(success(()).is_success());
    assert_eq!(success(None::<i32>).into_data(), Some(None));
}

#[test]
fn test_unknown_without_status_is_internal_server_error() {
    let outcome = failure::<()>(FailureInput::unknown(serde_json::Value::Null));
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(500));
    assert_eq!(error.message(), "Internal Server Error");
    assert!(outcome.data().is_none());
}

#[test]
fn test_native_with_response_404() {
    let outcome = failure::<()>(upstream_with_response("user lookup", 404));
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(404));
    assert_eq!(error.message(), "Not Found");
    assert!(
        error
            .original()
            .and_then(|o| o.downcast_ref::<UpstreamError>())
            .is_some()
    );
}

#[test]
fn test_native_without_status_keeps_display_text() {
    let outcome = failure::<()>(UpstreamError::new("socket closed"));
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(500));
    assert_eq!(error.message(), "upstream call failed: socket closed");
}

#[test]
fn test_partial_conflict_without_message() {
    let outcome = failure::<()>(PartialError::with_code(409));
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(409));
    assert_eq!(error.message(), "Conflict");
}

#[test]
fn test_partial_from_json_payload() {
    let partial: PartialError =
        serde_json::from_str(r#"{"responseStatus": 504, "stack": "old trace"}"#).unwrap();
    let error = quiet_normalizer().normalize(partial);
    assert_eq!(error.code(), Some(504));
    assert_eq!(error.message(), "Gateway Timeout");
    assert_eq!(error.stack(), None);
}

#[test]
fn test_partial_input_is_moved_and_snapshotted() {
    let partial = PartialError::with_message("custom failure");
    let expected = partial.clone();
    let error = quiet_normalizer().normalize(partial);

    let Some(OriginalError::Partial(snapshot)) = error.original() else {
        unreachable!("Expected Partial original");
    };
    assert_eq!(snapshot.as_ref(), &expected);
    assert_eq!(error.message(), "custom failure");
}

#[test]
fn test_failure_twice_keeps_code_and_message() {
    let first = failure::<()>(PartialError::with_code(403)).into_error().unwrap();
    let second = failure::<()>(first.clone()).into_error().unwrap();
    let third = failure::<()>(second.clone()).into_error().unwrap();

    for error in [&second, &third] {
        assert_eq!(error.code(), Some(403));
        assert_eq!(error.message(), "Forbidden");
        assert!(error.stack().is_some());
    }
    assert_eq!(third.original(), first.original());
}

#[test]
fn test_native_shared_original_identity() {
    let shared: Arc<dyn std::error::Error + Send + Sync> = Arc::new(UpstreamError::new("x"));
    let error = failure::<()>(NativeError::from_arc(Arc::clone(&shared)))
        .into_error()
        .unwrap();
    let original = error.original().and_then(OriginalError::as_error).unwrap();
    assert!(Arc::ptr_eq(original, &shared));
}

#[test]
fn test_native_from_anyhow() {
    let err = anyhow::anyhow!("wrapped by anyhow").context("loading profile");
    let error = quiet_normalizer().normalize(NativeError::from_boxed(err.into()));
    assert_eq!(error.code(), Some(500));
    assert_eq!(error.message(), "loading profile");
}

#[test]
fn test_map_on_failure_renormalizes() {
    let outcome: Outcome<i32> = failure(PartialError::with_code(502));
    let mapped = map(outcome, |x| x.to_string());
    assert!(mapped.data().is_none());
    let error = mapped.error().unwrap();
    assert_eq!(error.code(), Some(502));
    assert_eq!(error.message(), "Bad Gateway");
}

#[test]
fn test_map_on_success_calls_once() {
    let mut calls = Vec::new();
    let mapped = map(success(5), |x| {
        calls.push(x);
        x + 1
    });
    assert_eq!(mapped.into_data(), Some(6));
    assert_eq!(calls, vec![5]);
}

#[test]
fn test_flat_map_does_not_rewrap() {
    let inner: Outcome<String> = failure(PartialError::with_code(400));
    let expected_stack = inner.error().unwrap().stack().map(str::to_owned);

    let chained = flat_map(success(1), move |_| inner);
    let error = chained.error().unwrap();
    assert_eq!(error.message(), "Bad Request");
    assert_eq!(error.stack().map(str::to_owned), expected_stack);
}

#[test]
fn test_status_table_lookup() {
    assert_eq!(status_message(429), Some("Too Many Requests"));
    assert_eq!(status_message(200), None);
}
