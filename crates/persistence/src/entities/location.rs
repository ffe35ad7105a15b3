//! Location sample entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the locations table.
#[derive(Debug, Clone, FromRow)]
pub struct LocationSampleEntity {
    pub id: i64,
    pub device_ref: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
    pub battery_level: Option<i32>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<LocationSampleEntity> for domain::models::LocationSample {
    fn from(entity: LocationSampleEntity) -> Self {
        Self {
            id: entity.id,
            device_ref: entity.device_ref,
            latitude: entity.latitude,
            longitude: entity.longitude,
            accuracy: entity.accuracy,
            altitude: entity.altitude,
            battery_level: entity.battery_level,
            recorded_at: entity.recorded_at,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_sample_entity_to_domain() {
        let entity = LocationSampleEntity {
            id: 3,
            device_ref: 1,
            latitude: 37.7749,
            longitude: -122.4194,
            accuracy: Some(10.5),
            altitude: None,
            battery_level: Some(85),
            recorded_at: Utc::now(),
            created_at: Utc::now(),
        };
        let sample: domain::models::LocationSample = entity.clone().into();

        assert_eq!(sample.id, entity.id);
        assert_eq!(sample.device_ref, entity.device_ref);
        assert_eq!(sample.latitude, entity.latitude);
        assert_eq!(sample.longitude, entity.longitude);
        assert_eq!(sample.accuracy, entity.accuracy);
        assert!(sample.altitude.is_none());
        assert_eq!(sample.battery_level, entity.battery_level);
    }
}
