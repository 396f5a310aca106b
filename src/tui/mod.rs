// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Receiving fetch outcomes and updating the display

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod share;
pub mod views;

use crate::api::content::{self, ContentKind};
use crate::api::ApiClient;
use crate::config::Config;
use crate::events::{FetchOutcome, FetchedItem};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, FetchRequest, Modal};
use components::toast::ToastLevel;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use share::ShareOutcome;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything the event loop needs besides the app state: the shared
/// HTTP client for spawned fetch tasks, the channel their outcomes come
/// back on, and the configured share command.
struct Runtime {
    client: Option<Arc<ApiClient>>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    share_command: Option<String>,
}

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The event loop handles keyboard input, timer ticks, and
/// fetch outcomes arriving from spawned tasks.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // The client is only built once the key passes validation; without it
    // the app stays usable but never dispatches a fetch
    let client = match config.validate_api_key() {
        Ok(()) => Some(Arc::new(
            ApiClient::new(&config.api_url, &config.api_key)
                .context("Failed to create API client")?,
        )),
        Err(_) => None,
    };

    let (outcome_tx, outcome_rx) = mpsc::channel::<FetchOutcome>(16);

    let runtime = Runtime {
        client,
        outcome_tx,
        share_command: config.share_command.clone(),
    };

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &runtime, outcome_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (for actions and navigation)
/// 2. Timer ticks (for expiry of toasts/banner and spinner frames)
/// 3. Fetch outcomes (for settling panel state)
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Runtime,
    mut outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    // Both panels load on startup (no-op when the key is unconfigured)
    let initial = app.begin_refresh();
    dispatch_fetches(runtime, &app.category, initial);

    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, runtime, key_event);
                    }
                }
            } => {}

            // Periodic tick: toast/banner expiry, spinner animation
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Settled fetches from spawned tasks
            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn one fetch task per request; each task always sends an outcome,
/// success or failure, so no panel is left in Loading.
fn dispatch_fetches(runtime: &Runtime, category: &str, requests: Vec<FetchRequest>) {
    let Some(client) = runtime.client.as_ref() else {
        return;
    };

    for request in requests {
        let client = Arc::clone(client);
        let tx = runtime.outcome_tx.clone();
        let category = category.to_string();

        tokio::spawn(async move {
            let fetch = tokio::spawn(async move {
                match request.kind {
                    ContentKind::Quote => fetch_quote_item(&client, &category).await,
                    ContentKind::Fact => content::fetch_fact(&client).await.map(FetchedItem::Fact),
                }
            });

            // Join guard: a panicked fetch task still settles its panel
            let result = match fetch.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("{} fetch task died: {}", request.kind.label(), e);
                    Err(crate::error::Error::Internal(e.to_string()))
                }
            };

            let _ = tx
                .send(FetchOutcome {
                    kind: request.kind,
                    request_id: request.request_id,
                    result,
                })
                .await;
        });
    }
}

async fn fetch_quote_item(client: &ApiClient, category: &str) -> crate::error::Result<FetchedItem> {
    content::fetch_quote(client, category)
        .await
        .map(FetchedItem::Quote)
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Panel actions
fn handle_key_event(app: &mut App, runtime: &Runtime, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when open
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, runtime, &key_event) {
        return;
    }

    // Layer 3: Actions on the focused panel
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            match key {
                KeyCode::Char('c') => {
                    if app.handle_key_press(key) {
                        copy_focused(app);
                    }
                }
                KeyCode::Char('s') => {
                    if app.handle_key_press(key) {
                        share_focused(app, runtime);
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if app.handle_key_press(key) {
                        app.toggle_favorite_focused();
                    }
                }
                KeyCode::Tab => {
                    if app.handle_key_press(key) {
                        app.focus_next();
                    }
                }
                _ => {
                    app.handle_key_press(key);
                }
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if the modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // CRITICAL: Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let key = key_event.code;
    match key {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('f') | KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.close_modal();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.handle_key_press(key) {
                app.modal_scroll = app.modal_scroll.saturating_sub(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.handle_key_press(key) {
                app.modal_scroll = app.modal_scroll.saturating_add(1);
            }
        }
        _ => {
            app.handle_key_press(key);
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, runtime: &Runtime, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    // Ctrl/Alt chords belong to the terminal, not to us
    if key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if app.handle_key_press(key) {
                let requests = app.begin_refresh();
                if !requests.is_empty() {
                    app.notify("Content refreshed! 🔄", ToastLevel::Info);
                    dispatch_fetches(runtime, &app.category, requests);
                }
            }
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            if app.handle_key_press(key) {
                if let Some(request) = app.cycle_category() {
                    dispatch_fetches(runtime, &app.category, vec![request]);
                }
            }
            true
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            if app.handle_key_press(key) {
                app.open_modal(Modal::Favorites);
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.open_modal(Modal::Help);
            }
            true
        }
        _ => false,
    }
}

/// The payload the copy action writes: the exact fetched text, never
/// the share formatting
fn copy_payload(item: &FetchedItem) -> String {
    item.text().to_string()
}

/// Copy the focused panel's content to the clipboard
fn copy_focused(app: &mut App) {
    let Some(item) = app.panel(app.focused).displayed() else {
        return;
    };
    let text = copy_payload(item);

    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.notify("Copied to clipboard! 📋", ToastLevel::Success),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {}", e);
            app.notify("Failed to copy", ToastLevel::Error);
        }
    }
}

/// Share the focused panel's content, falling back to the clipboard
fn share_focused(app: &mut App, runtime: &Runtime) {
    let Some(item) = app.panel(app.focused).displayed() else {
        return;
    };
    let text = item.share_text();

    match share::share(runtime.share_command.as_deref(), &text) {
        Ok(ShareOutcome::Shared) => app.notify("Shared! 🎉", ToastLevel::Success),
        // Non-zero exit means the user backed out; stay silent
        Ok(ShareOutcome::Cancelled) => {}
        Ok(ShareOutcome::CopiedFallback) => {
            app.notify("Copied to clipboard! 📋", ToastLevel::Info);
        }
        Err(e) => {
            tracing::warn!("Share failed: {}", e);
            app.notify("Failed to share", ToastLevel::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::content::Quote;
    use app::PanelState;

    fn ready_config() -> Config {
        Config {
            api_key: "valid-key-0123456789".to_string(),
            ..Config::default()
        }
    }

    fn runtime() -> Runtime {
        let (outcome_tx, _rx) = mpsc::channel(4);
        Runtime {
            client: None,
            outcome_tx,
            share_command: None,
        }
    }

    fn quote_item(text: &str, author: &str) -> FetchedItem {
        FetchedItem::Quote(Quote {
            text: text.to_string(),
            author: author.to_string(),
        })
    }

    #[test]
    fn copy_payload_is_the_exact_fetched_text() {
        let item = quote_item("Be yourself.", "Oscar Wilde");

        // Copy writes the bare text; only share gets the formatting
        assert_eq!(copy_payload(&item), "Be yourself.");
        assert_eq!(item.share_text(), "\"Be yourself.\" \u{2014} Oscar Wilde");
    }

    #[test]
    fn modified_refresh_key_is_ignored() {
        let mut app = App::new(&ready_config(), LogBuffer::new());
        let runtime = runtime();

        for modifier in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let key = KeyEvent::new(KeyCode::Char('r'), modifier);
            handle_key_event(&mut app, &runtime, key);
        }
        let key = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        handle_key_event(&mut app, &runtime, key);

        assert_eq!(app.quote_panel.state, PanelState::Idle);
        assert_eq!(app.fact_panel.state, PanelState::Idle);
        assert!(app.modal.is_none());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn plain_refresh_key_starts_loading_and_toasts() {
        let mut app = App::new(&ready_config(), LogBuffer::new());
        let runtime = runtime();

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        handle_key_event(&mut app, &runtime, key);

        assert!(app.quote_panel.is_loading());
        assert!(app.fact_panel.is_loading());
        assert!(app.toasts.iter().any(|t| t.message.contains("refreshed")));
    }
}
