//! Favorites routes — save, list, and clear favorite places.
//!
//! Outcome-to-text rendering lives here: the store returns a discriminated
//! [`SaveOutcome`], and this boundary turns it into the user-facing status
//! message. `success` mirrors the `Saved` variant, never a string scan.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::error::ApiError;
use super::guide::MAX_CITY_LEN;
use crate::services::favorites::{self, Favorite, SaveOutcome};
use crate::state::AppState;

pub const MAX_PLACE_LEN: usize = 200;

#[derive(Deserialize)]
pub struct SaveFavoriteRequest {
    pub city: String,
    pub place_name: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub message: String,
    pub success: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Serialize)]
pub struct FavoritesListResponse {
    pub favorites: Vec<Favorite>,
    pub count: usize,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Render a save outcome as user-facing status text.
pub(crate) fn save_outcome_message(outcome: SaveOutcome, place_name: &str) -> String {
    match outcome {
        SaveOutcome::Saved => format!("✅ **{place_name}** has been saved to your favorites!"),
        SaveOutcome::Duplicate => {
            format!("🤔 Looks like **{place_name}** is already in your favorites list.")
        }
        SaveOutcome::EmptyField => "⚠️ Error: City and Place Name cannot be empty.".to_string(),
    }
}

/// `POST /favorites` — save one favorite place.
pub async fn save_favorite(
    State(state): State<AppState>,
    Json(body): Json<SaveFavoriteRequest>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let city = body.city.trim();
    let place_name = body.place_name.trim();
    if city.is_empty() || place_name.is_empty() {
        return Err(ApiError::bad_request("city and place_name must not be empty"));
    }
    if city.len() > MAX_CITY_LEN {
        return Err(ApiError::bad_request(format!("city must be at most {MAX_CITY_LEN} characters")));
    }
    if place_name.len() > MAX_PLACE_LEN {
        return Err(ApiError::bad_request(format!(
            "place_name must be at most {MAX_PLACE_LEN} characters"
        )));
    }

    tracing::info!(%city, %place_name, "saving favorite");
    let outcome = favorites::add(&state.pool, city, place_name).await?;

    Ok(Json(FavoriteResponse {
        message: save_outcome_message(outcome, place_name),
        success: outcome == SaveOutcome::Saved,
        timestamp: OffsetDateTime::now_utc(),
    }))
}

/// `GET /favorites` — list all saved places in insertion order.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<FavoritesListResponse>, ApiError> {
    let favorites = favorites::list(&state.pool).await?;
    let count = favorites.len();

    Ok(Json(FavoritesListResponse { favorites, count, timestamp: OffsetDateTime::now_utc() }))
}

/// `DELETE /favorites` — clear the whole list.
pub async fn clear_favorites(
    State(state): State<AppState>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    favorites::clear(&state.pool).await?;
    tracing::info!("favorites cleared");

    Ok(Json(FavoriteResponse {
        message: "✅ All favorites have been cleared successfully!".to_string(),
        success: true,
        timestamp: OffsetDateTime::now_utc(),
    }))
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
