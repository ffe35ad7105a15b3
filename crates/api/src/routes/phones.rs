//! Phone registration and lookup endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use persistence::repositories::{DeviceRepository, LocationRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::device::{Device, PhoneWithLocation, RegisterPhoneRequest};

/// Register a phone, or refresh an existing registration.
///
/// POST /api/v1/phones/register
///
/// Registering the same device identifier again updates the display name
/// and phone number and advances `last_seen_at`; it never creates a second
/// row for the identifier.
pub async fn register_phone(
    State(state): State<AppState>,
    Json(request): Json<RegisterPhoneRequest>,
) -> Result<Json<Device>, ApiError> {
    request.validate()?;

    let device_repo = DeviceRepository::new(state.pool.clone());
    let entity = device_repo
        .upsert_device(
            &request.device_id,
            &request.device_name,
            request.phone_number.as_deref(),
        )
        .await?;

    info!(device_id = %entity.device_id, "Phone registered");

    Ok(Json(entity.into()))
}

/// Get a phone's details together with its last known location.
///
/// GET /api/v1/phones/:device_id/location
///
/// Fails with 404 only when the device itself is unknown; a registered
/// device that has not reported yet comes back with a null `lastLocation`.
pub async fn get_phone_location(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<PhoneWithLocation>, ApiError> {
    shared::validation::validate_not_blank(&device_id)
        .map_err(|_| ApiError::Validation("deviceId must not be empty".to_string()))?;

    let device_repo = DeviceRepository::new(state.pool.clone());
    let device = device_repo.find_by_device_id(&device_id).await?.ok_or_else(|| {
        ApiError::NotFound(format!("Device with device_id '{device_id}' not found"))
    })?;

    let location_repo = LocationRepository::new(state.pool.clone());
    let latest = location_repo.find_latest_by_device(device.id).await?;

    Ok(Json(PhoneWithLocation::new(
        device.into(),
        latest.map(Into::into),
    )))
}
