//! Configuration management for the YouTube Playlist Sorter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Google OAuth credentials,
//! YouTube Data API endpoints, and the local callback server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `ytsortcli/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/ytsortcli/.env`
/// - macOS: `~/Library/Application Support/ytsortcli/.env`
/// - Windows: `%LOCALAPPDATA%/ytsortcli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use ytsortcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ytsortcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Google OAuth client ID for authentication.
///
/// Retrieves the `YOUTUBE_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application in the
/// Google Cloud console.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn youtube_client_id() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_ID").expect("YOUTUBE_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Google OAuth client secret for authentication.
///
/// Retrieves the `YOUTUBE_API_AUTH_CLIENT_SECRET` environment variable.
/// Google's token endpoint requires the client secret for installed
/// applications on both code exchange and token refresh.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn youtube_client_secret() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_SECRET").expect("YOUTUBE_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI.
///
/// Retrieves the `YOUTUBE_API_REDIRECT_URI` environment variable which
/// specifies the callback URL that Google should redirect to after user
/// authorization. This must match a redirect URI registered for the OAuth
/// client.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_REDIRECT_URI` environment variable is not set.
pub fn youtube_redirect_uri() -> String {
    env::var("YOUTUBE_API_REDIRECT_URI").expect("YOUTUBE_API_REDIRECT_URI must be set")
}

/// Returns the OAuth scope permissions.
///
/// Retrieves the `YOUTUBE_API_AUTH_SCOPE` environment variable which defines
/// the scope requested during authentication. Reordering playlist items
/// requires the full `https://www.googleapis.com/auth/youtube` scope.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_SCOPE` environment variable is not set.
pub fn youtube_scope() -> String {
    env::var("YOUTUBE_API_AUTH_SCOPE").expect("YOUTUBE_API_AUTH_SCOPE must be set")
}

/// Returns the Google OAuth authorization URL.
///
/// Retrieves the `YOUTUBE_API_AUTH_URL` environment variable which contains
/// the base URL for Google's OAuth authorization endpoint. This is where
/// users are redirected to grant permissions to the application.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = youtube_auth_url(); // e.g., "https://accounts.google.com/o/oauth2/v2/auth"
/// ```
pub fn youtube_auth_url() -> String {
    env::var("YOUTUBE_API_AUTH_URL").expect("YOUTUBE_API_AUTH_URL must be set")
}

/// Returns the Google OAuth token exchange URL.
///
/// Retrieves the `YOUTUBE_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes for access tokens and for
/// refreshing expired tokens.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_TOKEN_URL` environment variable is not set.
pub fn youtube_token_url() -> String {
    env::var("YOUTUBE_API_TOKEN_URL").expect("YOUTUBE_API_TOKEN_URL must be set")
}

/// Returns the YouTube Data API base URL.
///
/// Retrieves the `YOUTUBE_API_URL` environment variable which contains the
/// base URL for YouTube Data API v3 endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = youtube_api_url(); // e.g., "https://www.googleapis.com/youtube/v3"
/// ```
pub fn youtube_api_url() -> String {
    env::var("YOUTUBE_API_URL").expect("YOUTUBE_API_URL must be set")
}
