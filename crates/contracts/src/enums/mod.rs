pub mod device_category;

pub use device_category::{compose_rubric_id, rubric_prefix_for, DeviceCategory, DEFAULT_RUBRIC_PREFIX};
