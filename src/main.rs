use clap::Parser;
use verifica_fotos::{cli::Cli, report};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    println!("📦 verifica-fotos - produtos sem foto\n");

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            println!("ERRO ao carregar a configuração. Detalhe: {}", e);
            return;
        }
    };

    // Erros fatais são reportados e o processo termina normalmente
    match report::run(&config, verbose) {
        Ok(_) => {}
        Err(e) if e.is_load_failure() => {
            println!(
                "ERRO ao ler o Excel. Verifique o caminho ou nome das colunas. Detalhe: {}",
                e
            );
        }
        Err(e) => {
            println!("ERRO ao salvar o arquivo Excel de saída: {}", e);
        }
    }
}
