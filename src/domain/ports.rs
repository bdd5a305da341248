use crate::domain::model::SendRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound delivery channel. Opaque: delivery is assumed to have happened
/// unless an error comes back.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, request: &SendRequest) -> Result<()>;
}

pub trait SenderConfig: Send + Sync {
    fn country_code(&self) -> &str;
    fn send_offset_min(&self) -> i64;
    fn pause_secs(&self) -> u64;
    fn wait_secs(&self) -> u64;
    fn close_tab(&self) -> bool;
}
