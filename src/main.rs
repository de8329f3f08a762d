// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use plant_monitor::app::AppModel;
use plant_monitor::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "plant-monitor")]
#[command(about = "Plant monitoring dashboard for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Server base URL, overriding the saved configuration
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether background capture is running
    Status,

    /// Toggle background capture on the server
    Toggle,

    /// Print the URL of the newest capture
    LatestImage,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=plant_monitor=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Status) => cli::show_status(cli.server),
        Some(Commands::Toggle) => cli::toggle_capture(cli.server),
        Some(Commands::LatestImage) => cli::show_latest_image(cli.server),
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
