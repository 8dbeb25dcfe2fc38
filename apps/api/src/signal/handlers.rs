//! Axum route handlers for the signal API.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::registry::StoreError;
use crate::signal::decode::{decode, TopSecretResponse};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TopSecretRequest {
    pub satellites: Vec<SatelliteInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SatelliteInfo {
    pub name: String,
    pub distance: f32,
    #[serde(default)]
    pub message: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopSecretSplitRequest {
    pub distance: f32,
    #[serde(default)]
    pub message: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /topsecret
///
/// Stores the three readings in the request, then locates the source and
/// recovers the message from them in request order.
pub async fn handle_top_secret(
    State(state): State<AppState>,
    Json(request): Json<TopSecretRequest>,
) -> Result<Json<TopSecretResponse>, AppError> {
    let count = request.satellites.len();
    if count < 3 {
        return Err(AppError::NotEnoughData);
    }
    if count > 3 {
        return Err(AppError::Validation(format!(
            "exactly three satellites are required, got {count}"
        )));
    }

    let mut seen = HashSet::new();
    let mut updated = Vec::with_capacity(count);
    for info in request.satellites {
        validate_distance(&info.name, info.distance)?;
        if !seen.insert(info.name.clone()) {
            return Err(AppError::Validation(format!(
                "satellite '{}' appears more than once",
                info.name
            )));
        }
        let satellite = state.store.get(&info.name).await.map_err(|e| match e {
            StoreError::NotFound(name) => {
                AppError::Validation(format!("unknown satellite '{name}'"))
            }
        })?;
        updated.push(satellite.with_reading(info.distance, info.message));
    }

    // Validate everything before writing so a bad entry leaves the store untouched.
    for satellite in &updated {
        state.store.upsert(satellite.clone()).await?;
    }

    let response = decode(&updated, state.config.locator_tolerance)?;
    info!(
        "Located source at ({}, {})",
        response.position.x, response.position.y
    );
    Ok(Json(response))
}

/// POST /topsecret_split/:satellite_name
///
/// Records one satellite's reading. Its fixed position is kept.
pub async fn handle_top_secret_split(
    State(state): State<AppState>,
    Path(satellite_name): Path<String>,
    Json(request): Json<TopSecretSplitRequest>,
) -> Result<StatusCode, AppError> {
    validate_distance(&satellite_name, request.distance)?;

    let satellite = state.store.get(&satellite_name).await?;
    state
        .store
        .upsert(satellite.with_reading(request.distance, request.message))
        .await?;

    info!("Stored reading for satellite '{satellite_name}'");
    Ok(StatusCode::OK)
}

/// GET /topsecret_split
///
/// Locates the source from the readings stored so far.
pub async fn handle_get_top_secret_split(
    State(state): State<AppState>,
) -> Result<Json<TopSecretResponse>, AppError> {
    let satellites = state.store.list().await?;
    let response = decode(&satellites, state.config.locator_tolerance)?;
    Ok(Json(response))
}

fn validate_distance(name: &str, distance: f32) -> Result<(), AppError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(AppError::Validation(format!(
            "distance for '{name}' must be a non-negative number"
        )));
    }
    Ok(())
}
