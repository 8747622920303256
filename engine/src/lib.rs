// Engine library root: indicator engine, signal evaluator, price providers,
// notifiers and the batch monitor service.

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod notify;
pub mod services;
pub mod signals;

pub use config::settings::{IndicatorParams, MonitorSettings};
pub use error::EngineError;
pub use services::{MonitorReport, MonitorService};
