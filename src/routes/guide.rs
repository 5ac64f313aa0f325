//! Guide route — city guide generation.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::credential::ApiCredential;
use super::error::ApiError;
use crate::services::guide;
use crate::state::AppState;

pub const MAX_CITY_LEN: usize = 100;

#[derive(Deserialize)]
pub struct GuideRequest {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub guide_content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

pub(crate) fn validate_city(raw: &str) -> Result<&str, ApiError> {
    let city = raw.trim();
    if city.is_empty() {
        return Err(ApiError::bad_request("city must not be empty"));
    }
    if city.len() > MAX_CITY_LEN {
        return Err(ApiError::bad_request(format!("city must be at most {MAX_CITY_LEN} characters")));
    }
    Ok(city)
}

/// `POST /guide` — generate a travel guide for one city.
pub async fn generate_guide(
    State(state): State<AppState>,
    credential: ApiCredential,
    Json(body): Json<GuideRequest>,
) -> Result<Json<GuideResponse>, ApiError> {
    let city = validate_city(&body.city)?;

    tracing::info!(%city, "generating guide");
    let guide_content = guide::generate_guide(state.llm.as_ref(), &credential.key, city)
        .await
        .map_err(|e| ApiError::internal(format!("failed to generate travel guide: {e}")))?;

    Ok(Json(GuideResponse { guide_content, timestamp: OffsetDateTime::now_utc() }))
}

#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;
