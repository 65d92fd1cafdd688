//! Sightline binary.

use clap::error::ErrorKind;
use tracing::debug;

use sight_cli::{logging, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if cli.images.is_empty() {
        let program = std::env::args().next().unwrap_or_else(|| "sightline".to_string());
        eprintln!("usage of {}:", program);
        eprintln!("{}", Cli::usage());
        std::process::exit(1);
    }

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("failed to initialize logging: {:#}", e);
    }

    match run(&cli).await {
        Ok(body) => println!("{}", body),
        Err(e) => {
            eprintln!("{}", e);
            debug!(stage = ?e.stage, exit_code = e.exit_code(), "Invocation failed");
            std::process::exit(e.exit_code());
        }
    }
}
