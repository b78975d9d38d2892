//! ontocheck CLI main entry point

use clap::Parser;
use ontocheck_cli::commands::{Cli, CommandExecutor};

#[tokio::main]
async fn main() {
    // ログは stderr へ (レポートは stdout)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let executor = CommandExecutor::new();
    match executor.execute(cli.command).await {
        Ok(result) if result.success => std::process::exit(0),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
