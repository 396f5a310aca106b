//! Content fetchers - quote by category and random fact
//!
//! Both endpoints return a JSON array; only the first element is consumed.
//! An empty array is a domain error (`EmptyResult`), and any client error
//! is wrapped into a fetcher-level `FetchFailed` carrying the original
//! message.

use crate::api::ApiClient;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Which kind of content a panel or favorite holds
///
/// Quotes and facts are separate namespaces everywhere: panels, favorites,
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Quote,
    Fact,
}

impl ContentKind {
    /// Display label ("Quote" / "Fact")
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Quote => "Quote",
            ContentKind::Fact => "Fact",
        }
    }
}

/// A fetched quote, immutable once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// A fetched fact, immutable once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub text: String,
}

/// Wire shape of a single element of the quotes endpoint response
#[derive(Debug, Deserialize)]
struct QuoteRow {
    quote: String,
    author: String,
}

/// Wire shape of a single element of the facts endpoint response
#[derive(Debug, Deserialize)]
struct FactRow {
    fact: String,
}

/// Fetch one quote for `category`
pub async fn fetch_quote(client: &ApiClient, category: &str) -> Result<Quote> {
    let data = client
        .request("quotes", &[("category", category)])
        .await
        .map_err(|e| e.into_fetch_failed(ContentKind::Quote))?;

    first_quote(&data).map_err(|e| e.into_fetch_failed(ContentKind::Quote))
}

/// Fetch one random fact
pub async fn fetch_fact(client: &ApiClient) -> Result<Fact> {
    let data = client
        .request("facts", &[])
        .await
        .map_err(|e| e.into_fetch_failed(ContentKind::Fact))?;

    first_fact(&data).map_err(|e| e.into_fetch_failed(ContentKind::Fact))
}

/// Reshape the first element of the quotes response into a `Quote`
fn first_quote(data: &serde_json::Value) -> Result<Quote> {
    let rows: Vec<QuoteRow> = parse_rows(data, ContentKind::Quote)?;
    let row = rows
        .into_iter()
        .next()
        .ok_or(Error::EmptyResult(ContentKind::Quote))?;

    Ok(Quote {
        text: row.quote,
        author: row.author,
    })
}

/// Reshape the first element of the facts response into a `Fact`
fn first_fact(data: &serde_json::Value) -> Result<Fact> {
    let rows: Vec<FactRow> = parse_rows(data, ContentKind::Fact)?;
    let row = rows
        .into_iter()
        .next()
        .ok_or(Error::EmptyResult(ContentKind::Fact))?;

    Ok(Fact { text: row.fact })
}

/// Deserialize the response array; a non-array body counts as empty
fn parse_rows<T: serde::de::DeserializeOwned>(
    data: &serde_json::Value,
    kind: ContentKind,
) -> Result<Vec<T>> {
    serde_json::from_value(data.clone()).map_err(|_| Error::EmptyResult(kind))
}
