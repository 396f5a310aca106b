// TUI application state
//
// This module manages the state of the application: the two content panels
// and their fetch state machines, the favorites store, toasts, the error
// banner, focus, and the active modal.

use super::components::banner::Banner;
use super::components::toast::{Toast, ToastLevel};
use super::input::InputHandler;
use crate::api::content::ContentKind;
use crate::config::Config;
use crate::error::Error;
use crate::events::{FetchOutcome, FetchedItem};
use crate::favorites::{FavoritesStore, ToggleAction};
use crate::logging::LogBuffer;
use crate::theme::Theme;

/// Spinner animation frames for loading panels
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Quote categories the `n` key cycles through
const CATEGORIES: &[&str] = &[
    "inspirational",
    "happiness",
    "life",
    "love",
    "success",
    "wisdom",
];

/// Per-panel display state machine: Idle -> Loading -> {Displayed, Errored}
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Loading,
    Displayed(FetchedItem),
    Errored(String),
}

/// One content panel (quote or fact) with its fetch bookkeeping
#[derive(Debug)]
pub struct Panel {
    pub state: PanelState,
    /// Id assigned to the most recently dispatched fetch; outcomes
    /// carrying an older id are stale and dropped
    latest_request_id: u64,
    /// Monotonic id source, never reset
    next_request_id: u64,
}

impl Panel {
    fn new() -> Self {
        Self {
            state: PanelState::Idle,
            latest_request_id: 0,
            next_request_id: 0,
        }
    }

    /// Enter Loading and return the id the new fetch must carry
    fn begin_fetch(&mut self) -> u64 {
        self.next_request_id += 1;
        self.latest_request_id = self.next_request_id;
        self.state = PanelState::Loading;
        self.latest_request_id
    }

    /// Whether an outcome with `request_id` is still current
    fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest_request_id
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }

    /// The displayed item, if the panel is in Displayed state
    pub fn displayed(&self) -> Option<&FetchedItem> {
        match &self.state {
            PanelState::Displayed(item) => Some(item),
            _ => None,
        }
    }
}

/// A fetch the event loop must dispatch: panel kind plus the id the
/// resulting outcome has to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: ContentKind,
    pub request_id: u64,
}

/// Which overlay is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Favorites,
    Help,
}

/// Main application state for the TUI
pub struct App {
    pub quote_panel: Panel,
    pub fact_panel: Panel,

    pub favorites: FavoritesStore,

    /// Active transient notifications, independently timed
    pub toasts: Vec<Toast>,

    /// Single-slot persistent error banner
    pub banner: Option<Banner>,

    /// Which panel the action keys (copy/share/save) apply to
    pub focused: ContentKind,

    pub modal: Option<Modal>,

    /// Scroll offset inside the favorites modal
    pub modal_scroll: usize,

    pub should_quit: bool,

    /// Quote category sent with every quote fetch
    pub category: String,

    pub theme: Theme,

    /// False when the API key failed validation; no fetch is ever
    /// dispatched in that state
    api_ready: bool,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Log buffer for the status bar readout
    pub log_buffer: LogBuffer,

    /// Animation frame for the loading spinner
    spinner_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let mut app = Self {
            quote_panel: Panel::new(),
            fact_panel: Panel::new(),
            favorites: FavoritesStore::new(),
            toasts: Vec::new(),
            banner: None,
            focused: ContentKind::Quote,
            modal: None,
            modal_scroll: 0,
            should_quit: false,
            category: config.category.clone(),
            theme: Theme::by_name(&config.theme),
            api_ready: config.validate_api_key().is_ok(),
            input_handler: InputHandler::default(),
            log_buffer,
            spinner_frame: 0,
        };

        if let Err(Error::Config(msg)) = config.validate_api_key() {
            app.show_banner(msg);
        }

        app
    }

    /// Whether fetches may be dispatched (API key validated)
    pub fn api_ready(&self) -> bool {
        self.api_ready
    }

    pub fn panel(&self, kind: ContentKind) -> &Panel {
        match kind {
            ContentKind::Quote => &self.quote_panel,
            ContentKind::Fact => &self.fact_panel,
        }
    }

    fn panel_mut(&mut self, kind: ContentKind) -> &mut Panel {
        match kind {
            ContentKind::Quote => &mut self.quote_panel,
            ContentKind::Fact => &mut self.fact_panel,
        }
    }

    /// Start a combined refresh of both panels
    ///
    /// Returns the fetches to dispatch, or an empty list when the API key
    /// is not configured (the banner reminds the user instead).
    pub fn begin_refresh(&mut self) -> Vec<FetchRequest> {
        if !self.api_ready {
            self.show_banner("Please set your API Ninjas key (QUOTIDIAN_API_KEY or config file)");
            return Vec::new();
        }

        [ContentKind::Quote, ContentKind::Fact]
            .into_iter()
            .map(|kind| FetchRequest {
                kind,
                request_id: self.panel_mut(kind).begin_fetch(),
            })
            .collect()
    }

    /// Start a refresh of a single panel
    pub fn begin_single_refresh(&mut self, kind: ContentKind) -> Option<FetchRequest> {
        if !self.api_ready {
            return None;
        }
        Some(FetchRequest {
            kind,
            request_id: self.panel_mut(kind).begin_fetch(),
        })
    }

    /// Advance to the next quote category and reload only the quote panel,
    /// mirroring a category change in the source
    pub fn cycle_category(&mut self) -> Option<FetchRequest> {
        let next = CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .map(|i| CATEGORIES[(i + 1) % CATEGORIES.len()])
            .unwrap_or(CATEGORIES[0]);
        self.category = next.to_string();

        self.begin_single_refresh(ContentKind::Quote)
    }

    /// Apply a settled fetch; stale outcomes are dropped
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.panel(outcome.kind).is_current(outcome.request_id) {
            tracing::debug!(
                "Dropping stale {} response (id {})",
                outcome.kind.label(),
                outcome.request_id
            );
            return;
        }

        let state = match outcome.result {
            Ok(item) => PanelState::Displayed(item),
            // Internal failures (panicked task) get the banner with a
            // generic message on top of the inline panel state
            Err(Error::Internal(msg)) => {
                tracing::error!("{} fetch died unexpectedly: {}", outcome.kind.label(), msg);
                self.show_banner("Something went wrong. Please try again.");
                PanelState::Errored("Something went wrong".to_string())
            }
            Err(err) => {
                tracing::warn!("{} fetch failed: {}", outcome.kind.label(), err);
                PanelState::Errored(err.panel_message())
            }
        };
        self.panel_mut(outcome.kind).state = state;
    }

    /// Toggle the focused panel's item in the favorites store
    ///
    /// No-op unless the panel is in Displayed state. Surfaces the result
    /// as a toast, matching the source behavior.
    pub fn toggle_favorite_focused(&mut self) {
        let Some(item) = self.panel(self.focused).displayed().cloned() else {
            return;
        };

        let result = self
            .favorites
            .toggle(item.kind(), item.text(), item.author());

        match result.action {
            ToggleAction::Added => self.notify("Added to favorites! ⭐", ToastLevel::Success),
            ToggleAction::Removed => self.notify("Removed from favorites", ToastLevel::Info),
        }
    }

    /// Switch action focus to the other panel
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            ContentKind::Quote => ContentKind::Fact,
            ContentKind::Fact => ContentKind::Quote,
        };
    }

    /// Push a transient notification; each call is independently timed
    pub fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast::new(message, level));
    }

    /// Show (or replace) the persistent error banner
    pub fn show_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::new(message));
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
        self.modal_scroll = 0;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.modal_scroll = 0;
    }

    /// Periodic tick: expire toasts and the banner, advance the spinner
    pub fn tick(&mut self) {
        self.toasts.retain(|t| !t.is_expired());

        if self.banner.as_ref().is_some_and(|b| b.is_expired()) {
            self.banner = None;
        }

        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Current spinner glyph for loading panels
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::content::{Fact, Quote};

    fn ready_config() -> Config {
        Config {
            api_key: "valid-key-0123456789".to_string(),
            ..Config::default()
        }
    }

    fn ready_app() -> App {
        App::new(&ready_config(), LogBuffer::new())
    }

    fn quote_item(text: &str, author: &str) -> FetchedItem {
        FetchedItem::Quote(Quote {
            text: text.to_string(),
            author: author.to_string(),
        })
    }

    fn outcome(kind: ContentKind, id: u64, result: Result<FetchedItem, Error>) -> FetchOutcome {
        FetchOutcome {
            kind,
            request_id: id,
            result,
        }
    }

    #[test]
    fn test_refresh_sets_both_panels_loading() {
        let mut app = ready_app();

        let requests = app.begin_refresh();

        assert_eq!(requests.len(), 2);
        assert!(app.quote_panel.is_loading());
        assert!(app.fact_panel.is_loading());
    }

    #[test]
    fn test_success_transitions_to_displayed() {
        let mut app = ready_app();
        let requests = app.begin_refresh();

        let id = requests[0].request_id;
        app.apply_outcome(outcome(
            ContentKind::Quote,
            id,
            Ok(quote_item("Be yourself.", "Oscar Wilde")),
        ));

        let item = app.quote_panel.displayed().unwrap();
        assert_eq!(item.text(), "Be yourself.");
        assert_eq!(item.author(), "Oscar Wilde");
        assert!(!app.quote_panel.is_loading());
    }

    #[test]
    fn test_failure_transitions_to_errored_and_clears_loading() {
        let mut app = ready_app();
        let requests = app.begin_refresh();
        let fact_id = requests[1].request_id;

        app.apply_outcome(outcome(
            ContentKind::Fact,
            fact_id,
            Err(Error::EmptyResult(ContentKind::Fact)),
        ));

        assert!(!app.fact_panel.is_loading());
        match &app.fact_panel.state {
            PanelState::Errored(msg) => assert!(msg.contains("No facts available")),
            other => panic!("expected Errored, got {:?}", other),
        }
    }

    #[test]
    fn test_panels_settle_independently() {
        let mut app = ready_app();
        let requests = app.begin_refresh();

        // Quote fails; fact still reaches Displayed
        app.apply_outcome(outcome(
            ContentKind::Quote,
            requests[0].request_id,
            Err(Error::Network("connection refused".to_string())),
        ));
        app.apply_outcome(outcome(
            ContentKind::Fact,
            requests[1].request_id,
            Ok(FetchedItem::Fact(Fact {
                text: "Honey never spoils.".to_string(),
            })),
        ));

        assert!(matches!(app.quote_panel.state, PanelState::Errored(_)));
        assert!(app.fact_panel.displayed().is_some());
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut app = ready_app();

        let first = app.begin_refresh();
        let second = app.begin_refresh();

        // The older response arrives last but must not overwrite
        app.apply_outcome(outcome(
            ContentKind::Quote,
            second[0].request_id,
            Ok(quote_item("fresh", "B")),
        ));
        app.apply_outcome(outcome(
            ContentKind::Quote,
            first[0].request_id,
            Ok(quote_item("stale", "A")),
        ));

        assert_eq!(app.quote_panel.displayed().unwrap().text(), "fresh");
    }

    #[test]
    fn test_invalid_key_shows_banner_and_blocks_refresh() {
        let config = Config::default(); // placeholder key
        let mut app = App::new(&config, LogBuffer::new());

        assert!(!app.api_ready());
        assert!(app.banner.is_some());

        let requests = app.begin_refresh();
        assert!(requests.is_empty());
        assert_eq!(app.quote_panel.state, PanelState::Idle);
        assert_eq!(app.fact_panel.state, PanelState::Idle);
    }

    #[test]
    fn test_toggle_favorite_is_inverse() {
        let mut app = ready_app();
        let requests = app.begin_refresh();
        app.apply_outcome(outcome(
            ContentKind::Quote,
            requests[0].request_id,
            Ok(quote_item("X", "Y")),
        ));

        let before = app.favorites.count();

        app.toggle_favorite_focused();
        assert_eq!(app.favorites.count(), before + 1);
        assert!(app.favorites.contains(ContentKind::Quote, "X"));

        app.toggle_favorite_focused();
        assert_eq!(app.favorites.count(), before);
    }

    #[test]
    fn test_toggle_favorite_noop_while_loading() {
        let mut app = ready_app();
        app.begin_refresh();

        app.toggle_favorite_focused();
        assert_eq!(app.favorites.count(), 0);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_internal_failure_shows_banner_and_settles_panel() {
        let mut app = ready_app();
        let requests = app.begin_refresh();

        app.apply_outcome(outcome(
            ContentKind::Quote,
            requests[0].request_id,
            Err(Error::Internal("task panicked".to_string())),
        ));

        assert!(!app.quote_panel.is_loading());
        assert!(matches!(app.quote_panel.state, PanelState::Errored(_)));
        let banner = app.banner.as_ref().unwrap();
        assert!(banner.message.contains("Something went wrong"));
    }

    #[test]
    fn test_banner_is_single_slot() {
        let mut app = ready_app();
        app.show_banner("first");
        app.show_banner("second");

        assert_eq!(app.banner.as_ref().unwrap().message, "second");
    }

    #[test]
    fn test_toasts_stack_without_dedup() {
        let mut app = ready_app();
        app.notify("same", ToastLevel::Info);
        app.notify("same", ToastLevel::Info);
        assert_eq!(app.toasts.len(), 2);
    }

    #[test]
    fn test_cycle_category_reloads_only_quote_panel() {
        let mut app = ready_app();
        assert_eq!(app.category, "inspirational");

        let request = app.cycle_category().unwrap();
        assert_eq!(app.category, "happiness");
        assert_eq!(request.kind, ContentKind::Quote);
        assert!(app.quote_panel.is_loading());
        assert_eq!(app.fact_panel.state, PanelState::Idle);
    }

    #[test]
    fn test_cycle_category_wraps_and_handles_unknown() {
        let mut app = ready_app();
        app.category = "wisdom".to_string();
        app.cycle_category();
        assert_eq!(app.category, "inspirational");

        app.category = "custom-from-config".to_string();
        app.cycle_category();
        assert_eq!(app.category, "inspirational");
    }

    #[test]
    fn test_cycle_category_without_key_changes_category_only() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let request = app.cycle_category();
        assert!(request.is_none());
        assert_eq!(app.category, "happiness");
        assert_eq!(app.quote_panel.state, PanelState::Idle);
    }

    #[test]
    fn test_focus_cycles_between_panels() {
        let mut app = ready_app();
        assert_eq!(app.focused, ContentKind::Quote);
        app.focus_next();
        assert_eq!(app.focused, ContentKind::Fact);
        app.focus_next();
        assert_eq!(app.focused, ContentKind::Quote);
    }
}
