//! Report whether each AWS KMS key is used for ENCRYPT_DECRYPT.

use clap::Parser;

use cloudcheck::cli::{self, output};

/// Check every KMS key visible to the current AWS credentials.
#[derive(Parser)]
#[command(name = "scan-aws", version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = cli::kms::execute() {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
