use crate::domain::model::CustomerRecord;
use crate::utils::error::{AppError, Result};

/// Loads customer records from the spreadsheet.
///
/// The first four columns are mapped positionally to contract / payee name /
/// contact / open installments, whatever their header text says. Extra
/// columns are ignored. Fewer than four columns is a load failure; nothing
/// is partially loaded.
pub fn load_records(path: &str) -> Result<Vec<CustomerRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Load {
            message: format!("Erro ao carregar o arquivo: {}", e),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::Load {
            message: format!("Erro ao carregar o arquivo: {}", e),
        })?
        .clone();

    let columns: Vec<&str> = headers.iter().collect();
    tracing::info!("Colunas no arquivo: {:?}", columns);

    if headers.len() < 4 {
        return Err(AppError::Load {
            message: "Arquivo não contém todas as colunas necessárias!".to_string(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| AppError::Load {
            message: format!("Erro ao carregar o arquivo: {}", e),
        })?;

        records.push(CustomerRecord {
            contract_id: row.get(0).unwrap_or("").trim().to_string(),
            payee_name: row.get(1).unwrap_or("").trim().to_string(),
            raw_contact: row.get(2).unwrap_or("").trim().to_string(),
            open_installments: parse_installments(row.get(3).unwrap_or("")),
        });
    }

    Ok(records)
}

/// Open-installments cells come in as "3", "3.0" or garbage; anything that
/// is not a non-negative number coerces to zero.
fn parse_installments(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u32,
        _ => 0,
    }
}
