use clap::Parser;
use tracing_subscriber::EnvFilter;

use archive_guard::cli::{Cli, Commands};
use archive_guard::commands::{run_check, run_config, run_init};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Developer diagnostics on stderr, silent unless `RUST_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
