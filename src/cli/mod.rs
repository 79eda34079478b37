//! # CLI Module
//!
//! This module provides the command-line interface layer for ytsortcli. It
//! implements the user-facing commands and coordinates between the YouTube
//! API client, the sort policies and the reconciliation engine.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Google OAuth authentication flow with PKCE
//!
//! ### Playlist Queries
//!
//! - [`playlists`] - Lists the authenticated user's playlists, optionally
//!   filtered by a search term, or displays the items of one playlist
//!
//! ### Sorting
//!
//! - [`sort`] - Fetches every playlist, computes the target order and
//!   reconciles the remote order to match
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     |
//! Sorting Layer (sort keys, reconciliation)
//!     |
//! API Layer (YouTube integration)
//!     |
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the appropriate modules while handling user
//! interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! Failures are contained at the smallest useful scope: a failed page fetch
//! yields a partial list, a failed move skips one item, a failed playlist
//! skips one playlist. Only missing credentials abort a command, with a hint
//! to run `ytsortcli auth`.
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! ytsortcli auth                   # Authenticate with Google
//! ytsortcli playlists              # Check what would be touched
//! ```
//!
//! ### Regular Usage
//! ```bash
//! ytsortcli sort                   # Sort all playlists by artist, then title
//! ytsortcli sort --by-title        # Sort by title alone
//! ytsortcli sort --playlist <ID>   # Restrict to a single playlist
//! ytsortcli playlists --items <ID> # Show a playlist's current order
//! ```

mod auth;
mod playlists;
mod sort;

pub use auth::auth;
pub use playlists::playlists;
pub use sort::sort;
