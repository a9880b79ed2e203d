//! Report whether the storage account is configured for TLS 1.3.

use clap::Parser;

use cloudcheck::cli;

/// Check AZURE_STORAGE_TLS_VERSION against TLS1_3.
#[derive(Parser)]
#[command(name = "scan-azure", version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);
    cli::tls::execute();
}
