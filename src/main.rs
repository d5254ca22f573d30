mod cli;
mod config;
mod db;
mod models;
mod progress;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::SqliteStore;
use models::PlanConfig;
use progress::{AppClock, Clock, ProgressModel};

/// The model as wired for the binary: SQLite-backed, live or pinned clock.
pub type AppModel = ProgressModel<SqliteStore, AppClock>;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    if let Some(Commands::Config { write }) = cli.command {
        return handlers::handle_config(&config, write);
    }
    if let (Some(at), Some(command)) = (cli.at, &cli.command) {
        if command.mutates() {
            anyhow::bail!("--at {} only previews progress; run the command without it to save changes", at);
        }
    }

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    let clock = AppClock::from_override(cli.at);
    let mut model: AppModel =
        ProgressModel::open(PlanConfig::study_plan(), SqliteStore::new(conn), clock);
    if clock.is_pinned() {
        log::info!("Previewing progress at {}", clock.now());
        model = model.preview();
    }

    match cli.command {
        Some(Commands::Status) => handlers::handle_status(&mut model, &config)?,
        Some(Commands::Add { days }) => handlers::handle_add(&mut model, days)?,
        Some(Commands::Week) => handlers::handle_week(&mut model)?,
        Some(Commands::Rest) => handlers::handle_rest(&mut model)?,
        Some(Commands::Reset) => handlers::handle_reset(&mut model)?,
        Some(Commands::Complete) => handlers::handle_complete(&mut model, &config)?,
        Some(Commands::Track { day }) => handlers::handle_track(&mut model, &day)?,
        Some(Commands::Export) => handlers::handle_export(&model)?,
        Some(Commands::Config { write }) => handlers::handle_config(&config, write)?,

        // No subcommand → launch TUI
        None => tui::app::run(model, config)?,
    }

    Ok(())
}
