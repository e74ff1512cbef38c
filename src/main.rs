use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};

mod api;
mod commands;
mod config;
mod console;
mod datetime;
mod entry_manager;
mod error;
mod screen;
mod time_entry;

use api::TimeEntryClient;
use commands::{create_command, delete_command, edit_command, CreateArgs, DeleteArgs, EditArgs};
use config::Config;
use console::ConsoleView;
use entry_manager::EntryManager;

/// 時間記録APIのtime entryを操作するためのCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- list
/// $ cargo run -- create -p project -t task -s 2024-01-01T09:00 -e 2024-01-01T10:30
/// $ cargo run -- report
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        long = "api-url",
        help = "Base URL of the time tracking API (overrides TIMELOG_API_URL)"
    )]
    api_url: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        parse(from_occurrences),
        help = "Increase log verbosity (-v: info, -vv: debug)"
    )]
    verbose: u8,

    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    /// List all time entries
    List,
    /// Add a new time entry
    Create(CreateArgs),
    /// Edit an existing time entry
    Edit(EditArgs),
    /// Delete a time entry
    Delete(DeleteArgs),
    /// Show time spent per task
    Report,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logger(args.verbose).context("Failed to set up logger")?;

    let config = Config::load(args.api_url);
    info!("API URL: {}", config.api_url);

    let client = TimeEntryClient::new(&config.api_url);
    let mut stdout = io::stdout();
    let mut manager = EntryManager::new(client, ConsoleView::new(&mut stdout));

    match args.subcommand {
        SubCommands::List => manager.list_entries().await?,
        SubCommands::Create(create) => create_command(&mut manager, create).await?,
        SubCommands::Edit(edit) => edit_command(&mut manager, edit).await?,
        SubCommands::Delete(delete) => delete_command(&mut manager, delete).await?,
        SubCommands::Report => manager.generate_report().await?,
    }

    Ok(())
}

/// ログの出力先を標準エラー出力に設定する。
///
/// 標準出力は表と通知の表示に利用する。
fn setup_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("hyper", LevelFilter::Warn)
        .chain(io::stderr())
        .apply()
        .context("Failed to apply logger")?;

    Ok(())
}
