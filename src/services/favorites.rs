//! Favorites store — persisted (city, place) pairs.
//!
//! DESIGN
//! ======
//! A single `favorites` table keyed by place name. Saving is driven either
//! by `POST /favorites` or by a save intent detected in chat. Outcomes are
//! a discriminated enum; human-readable status text is rendered only at the
//! HTTP boundary.
//!
//! `place_name` is unique across the whole store, not per city. Concurrent
//! inserts of the same place are arbitrated solely by the UNIQUE constraint:
//! one writer wins, the other observes a duplicate.

use serde::Serialize;
use sqlx::SqlitePool;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row in the `favorites` table, in storage order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub city: String,
    pub place_name: String,
}

/// Result of a save attempt. `EmptyField` and `Duplicate` are user-visible
/// informational outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Duplicate,
    EmptyField,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Save a favorite place.
///
/// Empty (post-trim) city or place name short-circuits to
/// [`SaveOutcome::EmptyField`] without touching storage. An existing
/// `place_name` yields [`SaveOutcome::Duplicate`].
///
/// # Errors
///
/// Returns a database error for any persistence failure other than the
/// uniqueness violation.
pub async fn add(pool: &SqlitePool, city: &str, place_name: &str) -> Result<SaveOutcome, FavoritesError> {
    if city.trim().is_empty() || place_name.trim().is_empty() {
        return Ok(SaveOutcome::EmptyField);
    }

    let result = sqlx::query("INSERT INTO favorites (city, place_name) VALUES (?, ?)")
        .bind(city)
        .bind(place_name)
        .execute(pool)
        .await;

    match result {
        Ok(_) => {
            tracing::info!(%city, %place_name, "favorite saved");
            Ok(SaveOutcome::Saved)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(SaveOutcome::Duplicate),
        Err(e) => Err(e.into()),
    }
}

/// List all favorites in insertion order (stable id ascending).
///
/// An empty store returns an empty vec, never an error.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Favorite>, FavoritesError> {
    let rows = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT id, city, place_name FROM favorites ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, city, place_name)| Favorite { id, city, place_name })
        .collect())
}

/// Delete all favorites. Idempotent.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn clear(pool: &SqlitePool) -> Result<(), FavoritesError> {
    sqlx::query("DELETE FROM favorites").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
