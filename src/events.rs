// Events that flow from the fetch tasks to the TUI
//
// Each refresh spawns one fetch task per panel; the task always delivers
// exactly one FetchOutcome, on success and on failure alike, so the panel
// is guaranteed to leave its loading state on every exit path.

use crate::api::content::{ContentKind, Fact, Quote};
use crate::error::Error;

/// The payload of a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedItem {
    Quote(Quote),
    Fact(Fact),
}

impl FetchedItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            FetchedItem::Quote(_) => ContentKind::Quote,
            FetchedItem::Fact(_) => ContentKind::Fact,
        }
    }

    /// The exact text the actions (copy/share/favorite) bind to
    pub fn text(&self) -> &str {
        match self {
            FetchedItem::Quote(q) => &q.text,
            FetchedItem::Fact(f) => &f.text,
        }
    }

    /// Author for quotes, empty for facts
    pub fn author(&self) -> &str {
        match self {
            FetchedItem::Quote(q) => &q.author,
            FetchedItem::Fact(_) => "",
        }
    }

    /// Share formatting: `"{text}" — {author}` for quotes, raw text for facts
    pub fn share_text(&self) -> String {
        match self {
            FetchedItem::Quote(q) => format!("\"{}\" \u{2014} {}", q.text, q.author),
            FetchedItem::Fact(f) => f.text.clone(),
        }
    }
}

/// One settled fetch, tagged so stale responses can be dropped
#[derive(Debug)]
pub struct FetchOutcome {
    /// Which panel this outcome belongs to
    pub kind: ContentKind,
    /// The request id assigned when the fetch was dispatched; the panel
    /// ignores outcomes older than its latest id
    pub request_id: u64,
    pub result: Result<FetchedItem, Error>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_share_text_is_quoted_and_attributed() {
        let item = FetchedItem::Quote(Quote {
            text: "Be yourself.".to_string(),
            author: "Oscar Wilde".to_string(),
        });
        assert_eq!(item.share_text(), "\"Be yourself.\" \u{2014} Oscar Wilde");
    }

    #[test]
    fn fact_share_text_is_raw() {
        let item = FetchedItem::Fact(Fact {
            text: "Honey never spoils.".to_string(),
        });
        assert_eq!(item.share_text(), "Honey never spoils.");
    }
}
