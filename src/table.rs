//! Leitura e gravação das planilhas.
//!
//! As linhas viram registros tipados (`CellValue`) para que a coluna de
//! código continue texto (zeros à esquerda importam) e a coerção de
//! estoque fique explícita, sem depender da biblioteca de planilha.

use crate::error::{Result, VerificaFotosError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, XlsxError};
use std::path::Path;

/// Valor de uma célula.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Texto exibível da célula; números inteiros saem sem casa decimal.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Coerção numérica: números passam direto, texto é aparado e
    /// interpretado; o que não converte devolve `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }
}

/// Tabela em memória: cabeçalhos e linhas alinhadas a eles.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lê a primeira aba de um `.xlsx`.
///
/// A primeira linha é o cabeçalho. A coluna de código é sempre convertida
/// para texto (um código numérico na planilha vira a string equivalente);
/// as demais colunas mantêm o tipo natural.
pub fn read_xlsx(path: &Path, code_column: &str) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| VerificaFotosError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| VerificaFotosError::ExcelRead("a planilha não tem nenhuma aba".into()))?
        .map_err(|e| VerificaFotosError::ExcelRead(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header_row = rows_iter
        .next()
        .ok_or_else(|| VerificaFotosError::ExcelRead("a planilha está vazia".into()))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let code_idx = headers
        .iter()
        .position(|h| h == code_column)
        .ok_or_else(|| VerificaFotosError::MissingColumn(code_column.to_string()))?;

    let rows = rows_iter
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(idx, cell)| {
                    if idx == code_idx {
                        code_cell(cell)
                    } else {
                        data_cell(cell)
                    }
                })
                .collect()
        })
        .collect();

    Ok(Table { headers, rows })
}

/// Célula da coluna de código: sempre texto, preservando zeros à esquerda
/// quando a planilha já traz o código como texto.
fn code_cell(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Text(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 => CellValue::Text(format!("{}", *f as i64)),
        Data::Float(f) => CellValue::Text(f.to_string()),
        Data::Empty => CellValue::Text(String::new()),
        other => CellValue::Text(other.to_string()),
    }
}

fn data_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Grava a tabela em um `.xlsx` novo, com as mesmas colunas.
///
/// A data de criação do documento é fixa: duas execuções sobre a mesma
/// entrada geram arquivos byte a byte idênticos.
pub fn write_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(write_err)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .map_err(write_err)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                CellValue::Text(s) => {
                    worksheet
                        .write_string(excel_row, col as u16, s)
                        .map_err(write_err)?;
                }
                CellValue::Number(n) => {
                    worksheet
                        .write_number(excel_row, col as u16, *n)
                        .map_err(write_err)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    workbook
        .save(path)
        .map_err(|e| VerificaFotosError::ExcelWrite(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

fn write_err(e: XlsxError) -> VerificaFotosError {
    VerificaFotosError::ExcelWrite(e.to_string())
}
