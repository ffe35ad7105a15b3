//! Location repository for database operations.

use chrono::Utc;
use sqlx::PgPool;

use crate::entities::{DeviceEntity, LocationSampleEntity};
use crate::error::StoreError;

/// Input for recording a new location sample.
#[derive(Debug, Clone)]
pub struct NewLocationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
    pub battery_level: Option<i32>,
}

/// Repository for location-related database operations.
#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Creates a new LocationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Record a location sample for a registered device.
    ///
    /// Runs as one atomic transaction: the sample insert and the device's
    /// `last_seen_at` bump commit together or not at all, both stamped with
    /// the same server-assigned instant. Fails with `DeviceNotFound` when
    /// the identifier is unknown (ingestion never auto-registers) and with
    /// `DataIntegrity` when more than one device row matches it.
    pub async fn record_sample(
        &self,
        device_id: &str,
        sample: NewLocationSample,
    ) -> Result<LocationSampleEntity, StoreError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let devices = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, device_id, display_name, phone_number, last_seen_at, created_at
            FROM devices
            WHERE device_id = $1
            FOR UPDATE
            "#,
        )
        .bind(device_id)
        .fetch_all(&mut *tx)
        .await?;

        let device = match devices.as_slice() {
            [] => return Err(StoreError::DeviceNotFound(device_id.to_string())),
            [device] => device,
            _ => {
                return Err(StoreError::DataIntegrity(format!(
                    "multiple device rows share device_id {device_id}"
                )))
            }
        };

        let entity = sqlx::query_as::<_, LocationSampleEntity>(
            r#"
            INSERT INTO locations (device_ref, latitude, longitude, accuracy, altitude, battery_level, recorded_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, device_ref, latitude, longitude, accuracy, altitude, battery_level, recorded_at, created_at
            "#,
        )
        .bind(device.id)
        .bind(sample.latitude)
        .bind(sample.longitude)
        .bind(sample.accuracy)
        .bind(sample.altitude)
        .bind(sample.battery_level)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE devices
            SET last_seen_at = $2
            WHERE id = $1
            "#,
        )
        .bind(device.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(entity)
    }

    /// Find the most recent sample for a device.
    ///
    /// Ties on `recorded_at` resolve to the highest id, i.e. insertion order.
    pub async fn find_latest_by_device(
        &self,
        device_ref: i64,
    ) -> Result<Option<LocationSampleEntity>, StoreError> {
        let entity = sqlx::query_as::<_, LocationSampleEntity>(
            r#"
            SELECT id, device_ref, latitude, longitude, accuracy, altitude, battery_level, recorded_at, created_at
            FROM locations
            WHERE device_ref = $1
            ORDER BY recorded_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(device_ref)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entity)
    }

    /// Find all samples for a device, newest first.
    pub async fn find_history_by_device(
        &self,
        device_ref: i64,
    ) -> Result<Vec<LocationSampleEntity>, StoreError> {
        let entities = sqlx::query_as::<_, LocationSampleEntity>(
            r#"
            SELECT id, device_ref, latitude, longitude, accuracy, altitude, battery_level, recorded_at, created_at
            FROM locations
            WHERE device_ref = $1
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .bind(device_ref)
        .fetch_all(&self.pool)
        .await?;
        Ok(entities)
    }
}
