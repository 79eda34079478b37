//! Generic consumer for paginated list endpoints.
//!
//! YouTube list calls return at most one page per request together with an
//! opaque continuation token. [`fetch_all`] drives such a call until the
//! token runs out and concatenates the results.

use std::fmt::Display;

use crate::{types::Page, warning};

/// Fetches every page of a paginated list operation.
///
/// Calls `next_page` with `None` first, then with each continuation token the
/// previous page returned, until a page carries no token. Items are collected
/// in received order.
///
/// A failed page request is logged (using `what` for context) and ends the
/// loop; whatever was accumulated up to that point is returned. Callers must
/// treat a short result as possibly incomplete, but a partial fetch never
/// fails the run. Each page is requested exactly once, no retries.
///
/// # Example
///
/// ```
/// let playlists = pager::fetch_all("playlists", async |token| {
///     client.playlists_page(token).await
/// })
/// .await;
/// ```
pub async fn fetch_all<T, E, F>(what: &str, mut next_page: F) -> Vec<T>
where
    F: AsyncFnMut(Option<String>) -> Result<Page<T>, E>,
    E: Display,
{
    let mut collected = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        match next_page(page_token.take()).await {
            Ok(page) => {
                collected.extend(page.items);
                match page.next_page_token {
                    Some(token) => page_token = Some(token),
                    None => break,
                }
            }
            Err(e) => {
                warning!("Failed to fetch {}: {}", what, e);
                break;
            }
        }
    }

    collected
}
