use clap::Parser;
use tracing_subscriber::EnvFilter;

use substrscan::cli::{Cli, Output};

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the scan output on stdout stays exact
    let default_filter = if cli.verbose {
        "substrscan=debug"
    } else {
        "substrscan=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.verbose, cli.quiet);
    if let Err(err) = cli.run(&output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
