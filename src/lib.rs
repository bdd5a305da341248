pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::bridge::BridgeTransport;
pub use crate::config::CliConfig;
pub use crate::core::{loader::load_records, run_log::RunLog, sender::BatchSender};
pub use crate::domain::model::{CustomerRecord, RunSummary};
pub use crate::utils::error::{AppError, Result};
