//! Filtro de produtos sem foto.
//!
//! Quatro fases em sequência: leitura, varredura, exportação e aviso de
//! estoque. Uma falha de leitura aborta tudo; uma falha de gravação não
//! desfaz a varredura já concluída, só perde o resultado.

use crate::config::Config;
use crate::error::{Result, VerificaFotosError};
use crate::locator;
use crate::table::{self, CellValue, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Nome fixo do relatório gerado na pasta atual.
pub const OUTPUT_FILE: &str = "Produtos_Sem_Foto.xlsx";

/// Resultado de uma execução completa.
#[derive(Debug)]
pub struct Summary {
    /// Total de produtos lidos do relatório.
    pub total: usize,
    /// Linhas dos produtos sem foto, com todas as colunas originais.
    pub missing: Table,
    /// Quantos produtos sem foto têm estoque positivo.
    pub priority_count: usize,
    /// Caminho do relatório gerado; `None` quando todos têm foto.
    pub output: Option<PathBuf>,
}

/// Varre as linhas e devolve as que não têm imagem correspondente,
/// na ordem original e com todas as colunas.
pub fn scan_missing(
    source: &Table,
    images_dir: &Path,
    code_column: &str,
    verbose: bool,
) -> Result<Table> {
    let code_idx = source
        .column_index(code_column)
        .ok_or_else(|| VerificaFotosError::MissingColumn(code_column.to_string()))?;

    let progress = ProgressBar::new(source.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} produtos")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut missing = Table {
        headers: source.headers.clone(),
        rows: Vec::new(),
    };

    for row in &source.rows {
        let code = row
            .get(code_idx)
            .map(CellValue::to_display)
            .unwrap_or_default();

        match locator::find_image(images_dir, code.trim()) {
            Some(path) => {
                if verbose {
                    progress.println(format!("✔ {} -> {}", code.trim(), path.display()));
                }
            }
            None => missing.rows.push(row.clone()),
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(missing)
}

/// Conta, entre as linhas sem foto, quantas têm estoque maior que zero.
///
/// Coluna de estoque ausente conta como zero; valores que não convertem
/// para número ficam de fora da contagem (mas continuam no relatório).
pub fn count_with_stock(missing: &Table, stock_column: &str) -> usize {
    let Some(stock_idx) = missing.column_index(stock_column) else {
        return 0;
    };

    missing
        .rows
        .iter()
        .filter_map(|row| row.get(stock_idx).and_then(CellValue::as_number))
        .filter(|stock| *stock > 0.0)
        .count()
}

/// Executa a verificação completa e imprime o andamento no console.
///
/// O relatório `Produtos_Sem_Foto.xlsx` é gravado na pasta atual; quando
/// todos os produtos têm foto nenhum arquivo é criado.
pub fn run(config: &Config, verbose: bool) -> Result<Summary> {
    println!("Iniciando a leitura do arquivo Excel...");
    let source = table::read_xlsx(&config.report_path, &config.code_column)?;
    println!("Total de {} produtos encontrados no relatório.", source.len());

    println!(
        "Iniciando a verificação de imagens... ({} imagens na pasta)",
        locator::count_images(&config.images_dir)
    );
    let missing = scan_missing(&source, &config.images_dir, &config.code_column, verbose)?;

    if missing.is_empty() {
        println!("{}", "-".repeat(50));
        println!("🎉 EXCELENTE! Todos os produtos no relatório têm uma imagem correspondente na pasta.");

        return Ok(Summary {
            total: source.len(),
            missing,
            priority_count: 0,
            output: None,
        });
    }

    let output = PathBuf::from(OUTPUT_FILE);
    table::write_xlsx(&missing, &output)?;

    println!("{}", "-".repeat(50));
    println!(
        "✅ CONCLUÍDO! {} produtos foram encontrados sem foto.",
        missing.len()
    );
    println!(
        "✅ O relatório contendo APENAS OS PRODUTOS SEM FOTO foi salvo em: {}",
        OUTPUT_FILE
    );

    let priority_count = count_with_stock(&missing, &config.stock_column);
    if priority_count > 0 {
        println!(
            "⚠️ Atenção: {} desses produtos têm estoque e estão sem foto. Priorize-os!",
            priority_count
        );
    }

    Ok(Summary {
        total: source.len(),
        missing,
        priority_count,
        output: Some(output),
    })
}
