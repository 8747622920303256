// Batch services exposed to the presentation layer
pub mod monitor_service;

pub use monitor_service::{MonitorReport, MonitorService, SkipReason, SkippedTicker};
