//! Device repository for database operations.

use chrono::Utc;
use sqlx::PgPool;

use crate::entities::DeviceEntity;
use crate::error::{is_unique_violation, StoreError};

/// Repository for device-related database operations.
#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Creates a new DeviceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a device by its external identifier.
    pub async fn find_by_device_id(
        &self,
        device_id: &str,
    ) -> Result<Option<DeviceEntity>, StoreError> {
        let entity = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, device_id, display_name, phone_number, last_seen_at, created_at
            FROM devices
            WHERE device_id = $1
            "#,
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entity)
    }

    /// Register a device, or refresh it if the identifier is already known.
    ///
    /// Runs as a transactional read-then-write: the row is locked and
    /// updated when present, inserted otherwise. The unique index on
    /// `device_id` backstops the insert against concurrent registration;
    /// losing that race falls back to the update path, so the call never
    /// produces a duplicate row. `last_seen_at` advances on every call,
    /// `created_at` and the internal id are preserved across updates.
    pub async fn upsert_device(
        &self,
        device_id: &str,
        display_name: &str,
        phone_number: Option<&str>,
    ) -> Result<DeviceEntity, StoreError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, device_id, display_name, phone_number, last_seen_at, created_at
            FROM devices
            WHERE device_id = $1
            FOR UPDATE
            "#,
        )
        .bind(device_id)
        .fetch_optional(&mut *tx)
        .await?;

        let result = if existing.is_some() {
            sqlx::query_as::<_, DeviceEntity>(
                r#"
                UPDATE devices
                SET display_name = $2, phone_number = $3, last_seen_at = $4
                WHERE device_id = $1
                RETURNING id, device_id, display_name, phone_number, last_seen_at, created_at
                "#,
            )
            .bind(device_id)
            .bind(display_name)
            .bind(phone_number)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
        } else {
            sqlx::query_as::<_, DeviceEntity>(
                r#"
                INSERT INTO devices (device_id, display_name, phone_number, last_seen_at, created_at)
                VALUES ($1, $2, $3, $4, $4)
                RETURNING id, device_id, display_name, phone_number, last_seen_at, created_at
                "#,
            )
            .bind(device_id)
            .bind(display_name)
            .bind(phone_number)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
        };

        match result {
            Ok(entity) => {
                tx.commit().await?;
                Ok(entity)
            }
            Err(err) if is_unique_violation(&err) => {
                // Lost the insert race: another registration committed the
                // row between our lookup and insert. It exists now, so the
                // update path applies.
                tx.rollback().await?;
                let entity = sqlx::query_as::<_, DeviceEntity>(
                    r#"
                    UPDATE devices
                    SET display_name = $2, phone_number = $3, last_seen_at = $4
                    WHERE device_id = $1
                    RETURNING id, device_id, display_name, phone_number, last_seen_at, created_at
                    "#,
                )
                .bind(device_id)
                .bind(display_name)
                .bind(phone_number)
                .bind(Utc::now())
                .fetch_one(&self.pool)
                .await?;
                Ok(entity)
            }
            Err(err) => Err(err.into()),
        }
    }
}
