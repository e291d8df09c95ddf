//! Chaining wrapped operations with `map` and `flat_map`.

use verdict::{Outcome, PartialError, failure, success, try_catch};

use crate::common::{UpstreamError, quiet_normalizer, upstream_with_response};

#[derive(Debug, PartialEq)]
struct Order {
    id: u32,
    total_cents: u64,
}

async fn load_order(id: u32) -> Result<Order, verdict::NativeError> {
    if id == 0 {
        return Err(upstream_with_response("orders service", 503));
    }
    Ok(Order {
        id,
        total_cents: u64::from(id) * 1_000,
    })
}

fn validate(order: Order) -> Outcome<Order> {
    if order.total_cents > 50_000 {
        failure(PartialError {
            message: Some(format!("order {} exceeds limit", order.id)),
            ..PartialError::with_code(400)
        })
    } else {
        success(order)
    }
}

#[tokio::test]
async fn test_successful_pipeline() {
    let dollars = try_catch(load_order(12))
        .await
        .flat_map(validate)
        .map(|order| order.total_cents / 100);
    assert_eq!(dollars.unwrap(), 120);
}

#[tokio::test]
async fn test_validation_failure_short_circuits_map() {
    let mut mapped = false;
    let outcome = try_catch(load_order(99))
        .await
        .flat_map(validate)
        .map(|order| {
            mapped = true;
            order.id
        });

    assert!(!mapped);
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(400));
    assert_eq!(error.message(), "order 99 exceeds limit");
}

#[tokio::test]
async fn test_load_failure_passes_through_every_step() {
    let outcome = try_catch(load_order(0))
        .await
        .flat_map(validate)
        .map(|order| order.id);

    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(503));
    assert_eq!(error.message(), "Service Unavailable");
    assert!(
        error
            .original()
            .and_then(|o| o.downcast_ref::<UpstreamError>())
            .is_some()
    );
}

#[tokio::test]
async fn test_outcome_into_result_for_question_mark() {
    async fn total(id: u32) -> Result<u64, verdict::NormalizedError> {
        let order = try_catch(load_order(id)).await.into_result()?;
        Ok(order.total_cents)
    }

    assert_eq!(total(2).await.unwrap(), 2_000);
    assert_eq!(total(0).await.unwrap_err().code(), Some(503));
}

#[tokio::test]
async fn test_serialized_outcomes() {
    let ok = try_catch(load_order(1)).await.map(|order| order.total_cents);
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        serde_json::json!({"data": 1000, "error": null, "isSuccess": true})
    );

    let failed = try_catch(load_order(0)).await.map(|order| order.total_cents);
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["data"], serde_json::Value::Null);
    assert_eq!(json["error"]["code"], 503);
    assert!(json["error"].get("original").is_none());
}

#[tokio::test]
async fn test_quiet_pipeline_stays_quiet() {
    let outcome = quiet_normalizer()
        .try_catch(load_order(0))
        .await
        .flat_map(validate)
        .map(|order| order.total_cents / 100);

    let error = outcome.error().unwrap();
    assert_eq!(error.code(), Some(503));
    assert_eq!(error.message(), "Service Unavailable");
    assert_eq!(error.stack(), None);
}
