use clap::Parser;
use tracing_subscriber::EnvFilter;

use rlfs_finder::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag; request monitoring needs info
    let monitoring = matches!(&cli.command, cli::Commands::Serve(args) if args.monitor);
    let filter = if cli.verbose {
        EnvFilter::new("rlfs_finder=debug,info")
    } else if monitoring {
        EnvFilter::new("rlfs_finder=info")
    } else {
        EnvFilter::new("rlfs_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Find(args) => {
            cli::find::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
