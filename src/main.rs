use clap::Parser;
use miette::Result;
use pxon::cli::{Cli, Commands};
use pxon::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();
    let defaults = cli.defaults()?;

    match cli.command {
        Commands::New(args) => pxon::cli::new::run(args, &defaults, &printer)?,
        Commands::Info(args) => pxon::cli::info::run(args, &defaults, &printer)?,
        Commands::Paint(args) => pxon::cli::paint::run(args, &defaults, &printer)?,
        Commands::Fmt(args) => pxon::cli::fmt::run(args, &defaults, &printer)?,
        Commands::Play(args) => pxon::cli::play::run(args, &defaults, &printer)?,
        Commands::Completions(args) => Cli::write_completions(args.shell, &mut std::io::stdout()),
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pxon={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
