//! verifica-fotos: cruza o relatório de produtos com a pasta de fotos e
//! aponta quais produtos estão sem imagem.

pub mod cli;
pub mod config;
pub mod error;
pub mod locator;
pub mod report;
pub mod table;
