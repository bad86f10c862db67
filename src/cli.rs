use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verifica-fotos")]
#[command(about = "Confere quais produtos do relatório estão sem foto na pasta de imagens", long_about = None)]
pub struct Cli {
    /// Planilha de produtos (.xlsx)
    #[arg(short, long, default_value = "Relatorio_Produtos.xlsx")]
    pub report: PathBuf,

    /// Pasta com as fotos dos produtos
    #[arg(short, long, default_value = "./Imagens_Produtos")]
    pub images: PathBuf,

    /// Cabeçalho da coluna de código
    #[arg(long, default_value = "Código")]
    pub code_column: String,

    /// Cabeçalho da coluna de estoque
    #[arg(long, default_value = "Estoque")]
    pub stock_column: String,

    /// Arquivo JSON de configuração (substitui os argumentos acima)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exibe o caminho de cada imagem encontrada
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Monta a configuração da execução: arquivo JSON quando informado,
    /// senão os próprios argumentos.
    pub fn into_config(self) -> Result<Config> {
        if let Some(path) = &self.config {
            return Config::load(path);
        }

        Ok(Config {
            report_path: self.report,
            images_dir: self.images,
            code_column: self.code_column,
            stock_column: self.stock_column,
        })
    }
}
