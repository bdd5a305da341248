use crate::domain::ports::SenderConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_digits, validate_path, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zap-cobranca")]
#[command(about = "Envio em lote de lembretes de cobrança via WhatsApp")]
pub struct CliConfig {
    /// Planilha de clientes (4 primeiras colunas: contrato, cessionário,
    /// contato, parcelas em aberto)
    #[arg(long, default_value = "msg.csv")]
    pub input: String,

    /// Arquivo de log da execução
    #[arg(long, default_value = "log_mensagens_whatsapp.txt")]
    pub log_path: String,

    /// Endereço da ponte de automação do WhatsApp Web
    #[arg(long, default_value = "http://127.0.0.1:3025")]
    pub bridge_url: String,

    /// Código do país prefixado aos números sem ele
    #[arg(long, default_value = "55")]
    pub country_code: String,

    /// Minutos entre agora e o horário-alvo de envio
    #[arg(long, default_value = "1")]
    pub send_offset_min: i64,

    /// Pausa entre envios, em segundos
    #[arg(long, default_value = "20")]
    pub pause_secs: u64,

    /// Espera máxima pelo carregamento do chat, em segundos
    #[arg(long, default_value = "15")]
    pub wait_secs: u64,

    /// Não fechar a aba do navegador após o envio
    #[arg(long)]
    pub keep_tab_open: bool,

    /// Pular a confirmação antes do envio
    #[arg(long)]
    pub yes: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("log_path", &self.log_path)?;
        validate_url("bridge_url", &self.bridge_url)?;
        validate_digits("country_code", &self.country_code)?;
        validate_range("send_offset_min", self.send_offset_min, 1, 59)?;
        Ok(())
    }
}

impl SenderConfig for CliConfig {
    fn country_code(&self) -> &str {
        &self.country_code
    }

    fn send_offset_min(&self) -> i64 {
        self.send_offset_min
    }

    fn pause_secs(&self) -> u64 {
        self.pause_secs
    }

    fn wait_secs(&self) -> u64 {
        self.wait_secs
    }

    fn close_tab(&self) -> bool {
        !self.keep_tab_open
    }
}
