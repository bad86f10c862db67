use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerificaFotosError {
    #[error("falha ao ler a planilha: {0}")]
    ExcelRead(String),

    #[error("coluna '{0}' não encontrada na planilha")]
    MissingColumn(String),

    #[error("falha ao salvar a planilha: {0}")]
    ExcelWrite(String),

    #[error("erro de configuração: {0}")]
    Config(String),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl VerificaFotosError {
    /// Falhas da fase de leitura (arquivo ausente, formato inválido,
    /// coluna de código inexistente).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            VerificaFotosError::ExcelRead(_) | VerificaFotosError::MissingColumn(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VerificaFotosError>;
