// Quotidian - Quotes & Facts for your terminal
//
// A small TUI client for the API Ninjas quotes and facts endpoints.
//
// Architecture:
// - API client (reqwest): Fetches quotes and facts over HTTPS
// - TUI (ratatui): Two side-by-side panels with copy/share/favorite actions
// - App state: Per-panel fetch state machines with stale-response guards
// - Event system: an mpsc channel carries fetch outcomes back to the UI

mod api;
mod cli;
mod config;
mod error;
mod events;
mod favorites;
mod logging;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --reset, --edit, --path)
    // If a subcommand was handled, exit early
    let Some(cli_args) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();

    // --category on the command line beats env and file
    if let Some(category) = cli_args.category {
        config.category = category;
    }

    // Log buffer the TUI status bar reads from
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs always go to the in-memory buffer (writing
    // to stdout would garble the alternate screen); file logging is an
    // optional extra layer.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("quotidian={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to
    // ensure buffered file writes flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    );
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();

                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Startup banner goes out before the alternate screen takes over
    startup::print_startup(&config);
    startup::log_startup(&config);

    tracing::info!("Starting TUI");
    if let Err(e) = tui::run_tui(config, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
