// Startup module - displays banner and component status
//
// Prints a short banner before the TUI takes over the screen:
// - Version info
// - Config file status
// - Component status with checkmarks (API key, clipboard, share, logging)

use crate::config::Config;
use crate::config::VERSION;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Component status line for display
pub struct ComponentStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and component status
/// This runs before the TUI takes over the screen
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Quotidian{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Daily quotes & facts in your terminal{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}\u{2713}{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for component in component_status(config) {
        print_component_status(&component);
    }

    if config.validate_api_key().is_err() {
        println!();
        println!(
            "  {YELLOW}\u{25b8}{RESET} {YELLOW}API key not configured{RESET} \
             {DIM}(set QUOTIDIAN_API_KEY or edit the config file){RESET}"
        );
    }
    println!();
}

/// Status of all components based on config
fn component_status(config: &Config) -> Vec<ComponentStatus> {
    vec![
        ComponentStatus {
            name: "api",
            enabled: config.validate_api_key().is_ok(),
            description: "Quotes & facts fetching",
        },
        ComponentStatus {
            name: "favorites",
            enabled: true, // Core, always on
            description: "Session favorites",
        },
        ComponentStatus {
            name: "clipboard",
            enabled: true,
            description: "Copy actions",
        },
        ComponentStatus {
            name: "share",
            enabled: config.share_command.is_some(),
            description: "External share command",
        },
        ComponentStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "Rotating log files",
        },
    ]
}

/// Print a single component's status
fn print_component_status(component: &ComponentStatus) {
    use colors::*;

    let (icon, style) = if component.enabled {
        (format!("{GREEN}\u{2713}{RESET}"), "")
    } else {
        (format!("{DIM}\u{25cb}{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        component.name, component.description
    );
}

/// Log the boot sequence to the TUI log buffer
pub fn log_startup(config: &Config) {
    tracing::info!("Quotidian v{}", VERSION);

    for component in component_status(config) {
        let icon = if component.enabled { "\u{2713}" } else { "\u{25cb}" };
        tracing::info!("  {} {} - {}", icon, component.name, component.description);
    }

    tracing::info!("API base: {}", config.api_url);
    tracing::info!("Category: {}", config.category);
}
