// Components module - reusable UI building blocks
//
// - Panel: quote/fact display region with its four states
// - Toast: transient auto-dismissing notifications
// - Banner: single-slot persistent error banner
// - Favorites bar: saved-count indicator
// - Status bar: keyboard hints + latest warning
//
// Each component is a focused, single-responsibility module.

pub mod banner;
pub mod favorites_bar;
pub mod panel;
pub mod status_bar;
pub mod toast;
