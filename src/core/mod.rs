pub mod loader;
pub mod message;
pub mod phone;
pub mod run_log;
pub mod sender;

pub use crate::domain::model::{CustomerRecord, RowOutcome, RunSummary, SendRequest};
pub use crate::domain::ports::{MessageTransport, SenderConfig};
pub use crate::utils::error::Result;
