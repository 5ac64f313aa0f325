use super::*;

#[test]
fn constructors_set_expected_statuses() {
    assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::service_unavailable("x").status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ApiError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn llm_error_maps_to_internal_with_message() {
    let err: ApiError = LlmError::ApiRequest("connection refused".into()).into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message().contains("generation failed"));
    assert!(err.message().contains("connection refused"));
}

#[test]
fn favorites_error_maps_to_internal() {
    let err: ApiError = FavoritesError::Database(sqlx::Error::PoolClosed).into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message().contains("favorites store failure"));
}

#[tokio::test]
async fn response_body_is_json_error_object() {
    let response = ApiError::bad_request("city must not be empty").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "city must not be empty");
}
