//! API handlers for MachinePark REST endpoints

pub mod health;
pub mod machines;
pub mod maintenance;
pub mod openapi;
pub mod usage_logs;
