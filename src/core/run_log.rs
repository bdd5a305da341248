use crate::domain::model::{CustomerRecord, FailureReason, RowOutcome, RunSummary};
use crate::utils::error::Result;
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 80;
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Run log: one header, one line per record, one footer with totals.
/// Owned by the batch for its whole lifetime, truncated on creation and
/// closed on drop on every exit path.
pub struct RunLog {
    writer: BufWriter<File>,
}

impl RunLog {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "Início do envio de mensagens: {}",
            Local::now().format(TIMESTAMP_FORMAT)
        )?;
        writeln!(self.writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    pub fn record(&mut self, record: &CustomerRecord, outcome: &RowOutcome) -> Result<()> {
        match outcome {
            RowOutcome::Sent => writeln!(
                self.writer,
                "SUCESSO - Contrato {}: {} - Enviado para {} - {} parcela(s) em aberto",
                record.contract_id,
                record.payee_name,
                record.raw_contact,
                record.open_installments
            )?,
            RowOutcome::Failed(FailureReason::MissingContact) => writeln!(
                self.writer,
                "FALHA - Contrato {}: {} - Telefone não disponível",
                record.contract_id, record.payee_name
            )?,
            RowOutcome::Failed(FailureReason::InvalidFormat { raw }) => writeln!(
                self.writer,
                "FALHA - Contrato {}: {} - Formato de telefone inválido: {}",
                record.contract_id, record.payee_name, raw
            )?,
            RowOutcome::Failed(FailureReason::Transport { message }) => writeln!(
                self.writer,
                "ERRO - Contrato {}: {} - {}",
                record.contract_id, record.payee_name, message
            )?,
        }
        Ok(())
    }

    pub fn footer(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(
            self.writer,
            "Fim do envio: {}",
            Local::now().format(TIMESTAMP_FORMAT)
        )?;
        writeln!(
            self.writer,
            "Total de mensagens enviadas: {}",
            summary.sent
        )?;
        writeln!(self.writer, "Total de falhas: {}", summary.failed)?;
        self.writer.flush()?;
        Ok(())
    }
}
