use clap::Parser;
use icomp_cli::{commands, Cli, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use std::process;

fn init_tracing(cli: &Cli) {
    // Silent unless --verbose; RUST_LOG refines the level when verbose.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
        Err(e) => {
            // --help / --version
            let _ = e.print();
            process::exit(EXIT_SUCCESS);
        }
    };

    init_tracing(&cli);

    if let Err(e) = commands::run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(EXIT_ERROR);
    }
}
