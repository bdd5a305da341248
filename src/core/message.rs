/// First whitespace-delimited token of the payee name, or a generic fallback
/// when the field is empty or a spreadsheet "nan" artifact.
pub fn first_name(payee_name: &str) -> &str {
    let trimmed = payee_name.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return "Cliente";
    }
    trimmed.split_whitespace().next().unwrap_or("Cliente")
}

pub fn compose_message(payee_name: &str, open_installments: u32) -> String {
    let nome = first_name(payee_name);
    if open_installments == 1 {
        format!(
            "Olá, {}, identificamos que você possui 1 parcela em aberto. \
             Posso te enviar o PIX para realizar o acerto?",
            nome
        )
    } else {
        format!(
            "Olá, {}, identificamos que você possui {} parcelas em aberto. \
             Posso te enviar o PIX para realizar o acerto?",
            nome, open_installments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_takes_first_token() {
        assert_eq!(first_name("Maria da Silva"), "Maria");
        assert_eq!(first_name("  João Souza "), "João");
    }

    #[test]
    fn test_first_name_fallback() {
        assert_eq!(first_name(""), "Cliente");
        assert_eq!(first_name("   "), "Cliente");
        assert_eq!(first_name("nan"), "Cliente");
    }

    #[test]
    fn test_singular_phrasing() {
        let msg = compose_message("Maria da Silva", 1);
        assert!(msg.contains("Olá, Maria,"));
        assert!(msg.contains("1 parcela em aberto"));
        assert!(!msg.contains("parcelas"));
    }

    #[test]
    fn test_plural_phrasing() {
        let msg = compose_message("João Souza", 2);
        assert!(msg.contains("Olá, João,"));
        assert!(msg.contains("2 parcelas em aberto"));
    }

    #[test]
    fn test_zero_uses_plural() {
        let msg = compose_message("Ana", 0);
        assert!(msg.contains("0 parcelas em aberto"));
    }
}
