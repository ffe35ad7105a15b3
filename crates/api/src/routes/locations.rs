//! Location endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use persistence::repositories::{DeviceRepository, LocationRepository, NewLocationSample};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::location::{LocationSample, UpdateLocationRequest};

/// Record a location update for a registered phone.
///
/// POST /api/v1/locations
///
/// The sample insert and the device's `last_seen_at` bump happen in one
/// transaction; `recordedAt` is assigned by the server at write time.
pub async fn update_location(
    State(state): State<AppState>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<LocationSample>, ApiError> {
    request.validate()?;

    let location_repo = LocationRepository::new(state.pool.clone());
    let entity = location_repo
        .record_sample(
            &request.device_id,
            NewLocationSample {
                latitude: request.latitude,
                longitude: request.longitude,
                accuracy: request.accuracy,
                altitude: request.altitude,
                battery_level: request.battery_level,
            },
        )
        .await?;

    info!(
        device_id = %request.device_id,
        latitude = request.latitude,
        longitude = request.longitude,
        "Location recorded"
    );

    Ok(Json(entity.into()))
}

/// Get the complete location history for a phone, newest first.
///
/// GET /api/v1/phones/:device_id/locations
///
/// An unknown device yields an empty sequence rather than an error; this
/// endpoint does not distinguish it from a registered device without
/// samples.
pub async fn get_location_history(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<LocationSample>>, ApiError> {
    shared::validation::validate_not_blank(&device_id)
        .map_err(|_| ApiError::Validation("deviceId must not be empty".to_string()))?;

    let device_repo = DeviceRepository::new(state.pool.clone());
    let Some(device) = device_repo.find_by_device_id(&device_id).await? else {
        return Ok(Json(Vec::new()));
    };

    let location_repo = LocationRepository::new(state.pool.clone());
    let samples = location_repo.find_history_by_device(device.id).await?;

    Ok(Json(samples.into_iter().map(Into::into).collect()))
}
