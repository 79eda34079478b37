use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
    youtube::ApiError,
};

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Google.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating PKCE code verifier and challenge
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback
/// 5. Persisting the obtained token for future use
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state for storing PKCE information
///   and the resulting token between the auth flow and callback handler
///
/// # Authentication Flow
///
/// 1. **PKCE Setup**: Generates a random code verifier and derives the
///    corresponding code challenge using SHA256
/// 2. **Server Start**: Launches a local HTTP server to handle the OAuth
///    callback
/// 3. **Browser Launch**: Opens the Google consent URL in the default browser
/// 4. **User Authorization**: User grants the YouTube scope in their browser
/// 5. **Callback Handling**: Local server receives the authorization code and
///    exchanges it for an access token
/// 6. **Token Persistence**: Token is saved for future API requests
///
/// The consent URL requests `access_type=offline` and `prompt=consent` so
/// Google issues a refresh token alongside the access token.
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{youtube_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}&access_type=offline&prompt=consent",
        youtube_auth_url = &config::youtube_auth_url(),
        client_id = &config::youtube_client_id(),
        redirect_uri = &config::youtube_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::youtube_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            // initialize token manager with token
            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed authentication token with a
/// 60-second timeout. This function runs concurrently with the callback
/// handler that populates the token after successful code exchange.
///
/// # Returns
///
/// Returns `Some(Token)` if authentication completes within the timeout
/// period, or `None` if the timeout is reached without a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the OAuth 2.0 PKCE flow by exchanging the authorization code
/// received from the callback for an access token. Google's token endpoint
/// requires the client secret in addition to the PKCE verifier for installed
/// applications.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback
/// * `verifier` - PKCE code verifier that was generated at the start of the
///   flow
///
/// # Returns
///
/// Returns the complete token with access token, refresh token, scope and
/// expiration metadata, or an [`ApiError`] on transport failures or a
/// non-success response.
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly. The exchange
/// should happen immediately after receiving the code.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, ApiError> {
    let client = Client::new();
    let res = client
        .post(&config::youtube_token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &config::youtube_client_id()),
            ("client_secret", &config::youtube_client_secret()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", &config::youtube_redirect_uri()),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }

    let json = res.json::<TokenResponse>().await?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json.refresh_token.unwrap_or_default(),
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
