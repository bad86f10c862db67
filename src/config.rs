use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Os quatro valores que parametrizam uma execução.
///
/// Os padrões reproduzem os nomes usados pelo ERP: planilha
/// `Relatorio_Produtos.xlsx` com colunas `Código` e `Estoque`, fotos em
/// `./Imagens_Produtos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Planilha de produtos exportada do ERP.
    pub report_path: PathBuf,
    /// Pasta onde ficam as fotos dos produtos.
    pub images_dir: PathBuf,
    /// Cabeçalho da coluna de código.
    pub code_column: String,
    /// Cabeçalho da coluna de estoque.
    pub stock_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("Relatorio_Produtos.xlsx"),
            images_dir: PathBuf::from("./Imagens_Produtos"),
            code_column: "Código".into(),
            stock_column: "Estoque".into(),
        }
    }
}

impl Config {
    /// Carrega a configuração de um arquivo JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report_path, PathBuf::from("Relatorio_Produtos.xlsx"));
        assert_eq!(config.images_dir, PathBuf::from("./Imagens_Produtos"));
        assert_eq!(config.code_column, "Código");
        assert_eq!(config.stock_column, "Estoque");
    }

    #[test]
    fn test_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "report_path": "produtos.xlsx",
                "images_dir": "/fotos",
                "code_column": "Cod",
                "stock_column": "Qtde"
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.report_path, PathBuf::from("produtos.xlsx"));
        assert_eq!(config.images_dir, PathBuf::from("/fotos"));
        assert_eq!(config.code_column, "Cod");
        assert_eq!(config.stock_column, "Qtde");
    }
}
