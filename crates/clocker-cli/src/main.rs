use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clocker_cli::commands::{notify, remove, show, start, stop, track};
use clocker_cli::{Cli, Commands, Config};
use clocker_core::{Clock, SystemClock, Tracker};
use clocker_db::Database;

/// Open the configured database, ensuring the parent directory exists.
fn open_database(config: &Config) -> Result<Database> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    Database::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut db = open_database(&config)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Start => start::run(&mut stdout, &mut Tracker::new(&config, &mut db))?,
        Commands::Stop => stop::run(&mut stdout, &mut Tracker::new(&config, &mut db))?,
        Commands::Track {
            date,
            begin,
            end,
            pause,
        } => track::run(
            &mut stdout,
            &mut Tracker::new(&config, &mut db),
            track::TrackArgs {
                date: date.as_deref(),
                begin: begin.as_deref(),
                end: end.as_deref(),
                pause: pause.as_deref(),
            },
        )?,
        Commands::Remove { date } => {
            remove::run(&mut stdout, &mut Tracker::new(&config, &mut db), date)?;
        }
        Commands::Notify { date, absence } => notify::run(
            &mut stdout,
            &mut Tracker::new(&config, &mut db),
            date,
            *absence,
        )?,
        Commands::Show { from, to, json } => show::run(
            &mut stdout,
            &db,
            SystemClock.now().date(),
            from.as_deref(),
            to.as_deref(),
            *json,
        )?,
    }

    Ok(())
}
