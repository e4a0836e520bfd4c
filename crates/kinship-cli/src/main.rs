//! Kinship CLI - Command-line interface for recording family trees.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::repl;
use kinship_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kinship_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read config, using defaults");
        Config::default()
    });

    // Override tree if specified
    if let Some(tree_name) = cli.tree {
        config.switch_tree(tree_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Some(Command::Tree(args)) => {
            commands::execute_tree(args, &mut config, &formatter)?;
        }
        None | Some(Command::Repl) => {
            let mut session = Session::open(config.active_tree()?)?;
            repl::run_repl(&mut session, &config, &formatter)?;
        }
        Some(cmd) => {
            // Commands that require an open tree
            let mut session = Session::open(config.active_tree()?)?;
            commands::execute(cmd, &mut session, &formatter)?;
            if session.is_dirty() {
                session.save()?;
            }
        }
    }

    Ok(())
}
