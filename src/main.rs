use clap::Parser;
use std::io::Write;
use zap_cobranca::utils::{logger, validation::Validate};
use zap_cobranca::{load_records, BatchSender, BridgeTransport, CliConfig, CustomerRecord, RunLog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zap-cobranca");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("{}", "=".repeat(50));
    println!("SISTEMA DE ENVIO DE MENSAGENS PARA INADIMPLENTES");
    println!("{}", "=".repeat(50));
    println!("Usando arquivo: {}", config.input);

    let records = match load_records(&config.input) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Load failed: {}", e);
            println!("Não foi possível carregar o arquivo. Verifique o caminho e formato.");
            return Ok(());
        }
    };

    println!(
        "Arquivo carregado com sucesso. {} clientes encontrados.",
        records.len()
    );
    print_preview(&records);

    if !config.yes && !confirm_send()? {
        println!("Operação cancelada pelo usuário.");
        return Ok(());
    }

    let mut log = RunLog::create(&config.log_path)?;
    let transport = BridgeTransport::new(config.bridge_url.clone());
    let sender = BatchSender::new(transport, config.clone());

    let summary = sender.run(&records, &mut log).await?;

    println!(
        "\nProcesso concluído. {} mensagens enviadas, {} falhas.",
        summary.sent, summary.failed
    );
    println!("Confira o arquivo {} para mais detalhes.", config.log_path);

    Ok(())
}

fn print_preview(records: &[CustomerRecord]) {
    println!("\nPrévia dos dados:");
    println!("  CONTRATO | CESSIONARIO | CONTATO | ABERTAS");
    for record in records.iter().take(5) {
        println!(
            "  {} | {} | {} | {}",
            record.contract_id, record.payee_name, record.raw_contact, record.open_installments
        );
    }
}

fn confirm_send() -> anyhow::Result<bool> {
    print!("\nDeseja prosseguir com o envio das mensagens? (S/N): ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("s"))
}
