pub mod admin_devices;
pub mod loan_device;
