//! Data models for MachinePark

pub mod machine;
pub mod maintenance;
pub mod usage_log;

// Re-export commonly used types
pub use machine::{Machine, MachineDetails};
pub use maintenance::{MaintenanceRecord, MaintenanceRecordWithMachine};
pub use usage_log::{UsageLog, UsageLogWithMachine};
