// API module - HTTP client and content fetchers for API Ninjas
//
// The client issues parameterized GET requests with the X-Api-Key header
// and normalizes failures; the content module wraps it with the two
// domain fetchers (quote by category, random fact).

pub mod client;
pub mod content;

pub use client::ApiClient;
