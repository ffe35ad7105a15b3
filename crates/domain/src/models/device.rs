//! Device domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::location::LocationSample;

/// Represents a registered device in the system.
///
/// The `device_id` is the caller-supplied external identifier (IMEI, device
/// UUID, etc.) and is unique across all devices; `id` is the internal row
/// identity and never changes once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub device_id: String,
    pub display_name: String,
    pub phone_number: Option<String>,
    pub last_seen_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for phone registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPhoneRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub device_id: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub device_name: String,

    pub phone_number: Option<String>,
}

/// Device record merged with its most recent location sample.
///
/// `last_location` is null for a device that has not reported yet; the
/// lookup only fails when the device itself is unknown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneWithLocation {
    pub id: i64,
    pub device_id: String,
    pub display_name: String,
    pub phone_number: Option<String>,
    pub last_seen_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub last_location: Option<LocationSample>,
}

impl PhoneWithLocation {
    pub fn new(device: Device, last_location: Option<LocationSample>) -> Self {
        Self {
            id: device.id,
            device_id: device.device_id,
            display_name: device.display_name,
            phone_number: device.phone_number,
            last_seen_at: device.last_seen_at,
            created_at: device.created_at,
            last_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterPhoneRequest {
        RegisterPhoneRequest {
            device_id: "imei-356938035643809".to_string(),
            device_name: "Phone A".to_string(),
            phone_number: Some("+420123456789".to_string()),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_without_phone_number() {
        let mut request = valid_request();
        request.phone_number = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_blank_device_id() {
        let mut request = valid_request();
        request.device_id = "   ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_empty_device_name() {
        let mut request = valid_request();
        request.device_name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_device_serializes_camel_case() {
        let device = Device {
            id: 1,
            device_id: "d1".to_string(),
            display_name: "Phone A".to_string(),
            phone_number: None,
            last_seen_at: Utc::now(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["deviceId"], "d1");
        assert_eq!(json["displayName"], "Phone A");
        assert!(json["phoneNumber"].is_null());
        assert!(json.get("lastSeenAt").is_some());
    }

    #[test]
    fn test_phone_with_location_no_sample() {
        let device = Device {
            id: 7,
            device_id: "d7".to_string(),
            display_name: "Phone B".to_string(),
            phone_number: Some("+1555".to_string()),
            last_seen_at: Utc::now(),
            created_at: Utc::now(),
        };
        let merged = PhoneWithLocation::new(device.clone(), None);
        assert_eq!(merged.id, device.id);
        assert_eq!(merged.device_id, device.device_id);
        assert!(merged.last_location.is_none());

        let json = serde_json::to_value(&merged).unwrap();
        assert!(json["lastLocation"].is_null());
    }
}
