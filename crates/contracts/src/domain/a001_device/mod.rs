pub mod aggregate;

pub use aggregate::{DeviceId, DeviceRow};
