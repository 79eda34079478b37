//! # YouTube Integration Module
//!
//! This module provides the interface to the YouTube Data API v3, implementing
//! authentication, playlist retrieval, and playlist-item position updates. It
//! is the only layer that performs HTTP communication; everything above it
//! works against the [`PlaylistService`] capability.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Reconciliation)
//!          |
//! YouTube Integration Layer
//!     |- Authentication (OAuth 2.0 PKCE)
//!     |- Playlist Listing (paginated)
//!     |- Item Listing (paginated)
//!     `- Position Updates (single item)
//!          |
//! HTTP Layer (reqwest, JSON)
//!          |
//! YouTube Data API v3
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow with PKCE: verifier and
//!   challenge generation, browser launch, local callback server, code
//!   exchange, and token persistence.
//! - [`playlists`] - [`YouTubeClient`], the [`PlaylistService`] implementation
//!   backed by the `playlists` and `playlistItems` endpoints.
//!
//! ## API Coverage
//!
//! - `GET /playlists?part=snippet&mine=true` - the authenticated user's
//!   playlists with pagination
//! - `GET /playlistItems?part=snippet&playlistId=...` - a playlist's items
//!   with pagination
//! - `PUT /playlistItems?part=snippet` - move one item to a new position
//! - `POST` to the OAuth token endpoint - code exchange and token refresh
//!
//! ## Error Handling Philosophy
//!
//! Every call is a single attempt. Failures surface as [`ApiError`] and the
//! caller decides what to do; throughout this application that decision is
//! "log and continue" (partial page results, skipped moves), never an
//! automatic retry. Only a failed startup authentication is fatal.

pub mod auth;
pub mod playlists;

pub use playlists::YouTubeClient;

use std::fmt;

use reqwest::StatusCode;

use crate::types::{Page, Playlist, PlaylistItem};

/// Error returned by remote catalog calls.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, body decoding).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status(StatusCode),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "http error: {}", e),
            ApiError::Status(status) => write!(f, "unexpected status {}", status),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

/// The remote catalog capability the sorting pipeline is written against.
///
/// [`YouTubeClient`] implements it against the real service; tests substitute
/// a scripted fake.
#[allow(async_fn_in_trait)]
pub trait PlaylistService {
    /// One page of the authenticated user's playlists.
    async fn playlists_page(
        &mut self,
        page_token: Option<String>,
    ) -> Result<Page<Playlist>, ApiError>;

    /// One page of a playlist's items, in remote order.
    async fn playlist_items_page(
        &mut self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<PlaylistItem>, ApiError>;

    /// Moves `item` to `position` within its playlist. The remote service
    /// renumbers only the moved record; all other items keep their relative
    /// order.
    async fn update_item_position(
        &mut self,
        item: &PlaylistItem,
        position: u32,
    ) -> Result<(), ApiError>;
}
