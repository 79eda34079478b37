//! YouTube Playlist Sorter CLI Library
//!
//! This library provides functionality for sorting the playlists of an
//! authenticated YouTube account remotely. It fetches every playlist, computes
//! a locally sorted target order (by artist and title, or by title alone) and
//! reconciles the remote ordering to match through single-item position
//! updates.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token persistence and refresh
//! - `pager` - Generic consumer for paginated list endpoints
//! - `reconcile` - Order reconciliation against the remote playlist
//! - `server` - Local HTTP server for OAuth callbacks
//! - `sort` - Sort key policies for playlist items
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube Data API client implementation
//!
//! # Example
//!
//! ```
//! use ytsortcli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> ytsortcli::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod pager;
pub mod reconcile;
pub mod server;
pub mod sort;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use ytsortcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination, such as a failed startup
/// authentication.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues - a failed page fetch, a skipped position update -
/// that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Failed to fetch playlists: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
