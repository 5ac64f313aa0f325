use super::*;
use std::sync::Arc;

use axum::http::StatusCode;

use crate::state::test_helpers::{FailingLlm, MockLlm, test_app_state_with_llm};

#[test]
fn validate_city_trims_and_accepts() {
    assert_eq!(validate_city("  Paris  ").unwrap(), "Paris");
}

#[test]
fn validate_city_rejects_empty_and_blank() {
    assert_eq!(validate_city("").unwrap_err().status(), StatusCode::BAD_REQUEST);
    assert_eq!(validate_city("   ").unwrap_err().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn validate_city_rejects_oversized() {
    let long = "x".repeat(MAX_CITY_LEN + 1);
    assert_eq!(validate_city(&long).unwrap_err().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn guide_returns_completion_text() {
    let mock = Arc::new(MockLlm::new("Top 6 things in Paris"));
    let state = test_app_state_with_llm(mock.clone()).await;

    let response = generate_guide(
        State(state),
        ApiCredential { key: "key-0123456789".into() },
        Json(GuideRequest { city: "Paris".into() }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.guide_content, "Top 6 things in Paris");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn guide_upstream_failure_is_internal_error() {
    let state = test_app_state_with_llm(Arc::new(FailingLlm)).await;

    let err = generate_guide(
        State(state),
        ApiCredential { key: "key-0123456789".into() },
        Json(GuideRequest { city: "Paris".into() }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message().contains("failed to generate travel guide"));
}

#[tokio::test]
async fn guide_rejects_empty_city_before_calling_llm() {
    let mock = Arc::new(MockLlm::new("unused"));
    let state = test_app_state_with_llm(mock.clone()).await;

    let err = generate_guide(
        State(state),
        ApiCredential { key: "key-0123456789".into() },
        Json(GuideRequest { city: "  ".into() }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}
