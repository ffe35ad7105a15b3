//! Repository implementations for database operations.

pub mod device;
pub mod location;

pub use device::DeviceRepository;
pub use location::{LocationRepository, NewLocationSample};
