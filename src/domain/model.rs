use serde::Serialize;

/// One spreadsheet row, mapped positionally at load time.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub contract_id: String,
    pub payee_name: String,
    pub raw_contact: String,
    pub open_installments: u32,
}

/// Call contract of the outbound transport.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest {
    pub phone: String,
    pub message: String,
    pub hour: u32,
    pub minute: u32,
    pub wait_seconds: u64,
    pub close_tab: bool,
}

/// Result of processing a single row. Every record yields exactly one of
/// these, and exactly one run-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Sent,
    Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    MissingContact,
    InvalidFormat { raw: String },
    Transport { message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: u32,
    pub failed: u32,
}
