use crate::core::message::compose_message;
use crate::core::phone::normalize_contact;
use crate::core::run_log::RunLog;
use crate::domain::model::{CustomerRecord, FailureReason, RowOutcome, RunSummary, SendRequest};
use crate::domain::ports::{MessageTransport, SenderConfig};
use crate::utils::error::Result;
use chrono::{DateTime, Duration, Local, Timelike};

/// Drives the batch: one transport attempt per valid row, one log line per
/// row, row failures never abort the run.
pub struct BatchSender<T: MessageTransport, C: SenderConfig> {
    transport: T,
    config: C,
}

impl<T: MessageTransport, C: SenderConfig> BatchSender<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub async fn run(&self, records: &[CustomerRecord], log: &mut RunLog) -> Result<RunSummary> {
        log.header()?;

        let mut summary = RunSummary::default();
        let total = records.len();

        for record in records {
            println!(
                "Processando: Contrato={}, Nome={}, Telefone={}, Parcelas={}",
                record.contract_id, record.payee_name, record.raw_contact, record.open_installments
            );

            let outcome = self.process_row(record).await;
            log.record(record, &outcome)?;

            match &outcome {
                RowOutcome::Sent => {
                    summary.sent += 1;
                    println!(
                        "Mensagem enviada ({}/{}): {}",
                        summary.sent, total, record.payee_name
                    );
                }
                RowOutcome::Failed(reason) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Envio falhou para contrato {}: {:?}",
                        record.contract_id,
                        reason
                    );
                }
            }
        }

        log.footer(&summary)?;
        Ok(summary)
    }

    /// One row: VALIDATE_CONTACT → NORMALIZE → COMPOSE → SEND, with early
    /// exit at each validation step. Transport faults come back as a
    /// failure outcome, never as an error of the batch.
    async fn process_row(&self, record: &CustomerRecord) -> RowOutcome {
        let telefone = record.raw_contact.as_str();
        if telefone.is_empty() || telefone == "nan" {
            return RowOutcome::Failed(FailureReason::MissingContact);
        }

        let Some(contact) = normalize_contact(telefone, self.config.country_code()) else {
            return RowOutcome::Failed(FailureReason::InvalidFormat {
                raw: telefone.to_string(),
            });
        };
        tracing::debug!("Telefone formatado: {}", contact);

        let message = compose_message(&record.payee_name, record.open_installments);
        let (hour, minute) = send_time_after(Local::now(), self.config.send_offset_min());

        let request = SendRequest {
            phone: contact,
            message,
            hour,
            minute,
            wait_seconds: self.config.wait_secs(),
            close_tab: self.config.close_tab(),
        };

        let result = self.transport.send(&request).await;

        // Pause after every attempt, to stay under the platform's
        // anti-automation radar.
        tokio::time::sleep(std::time::Duration::from_secs(self.config.pause_secs())).await;

        match result {
            Ok(()) => RowOutcome::Sent,
            Err(e) => RowOutcome::Failed(FailureReason::Transport {
                message: e.to_string(),
            }),
        }
    }
}

/// Target send time: now plus the configured offset, hour/minute only.
pub fn send_time_after(now: DateTime<Local>, offset_min: i64) -> (u32, u32) {
    let at = now + Duration::minutes(offset_min);
    (at.hour(), at.minute())
}
