//! # API Module
//!
//! This module provides the HTTP endpoints served by the temporary local
//! server that runs during authentication.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth callback from Google's authorization
//!   server. Completes the PKCE flow by exchanging the authorization code for
//!   an access token and storing it in the shared auth state.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version, useful to verify the callback server came up before the
//!   browser redirect lands.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework. Each endpoint is
//! an async function wired into the router in [`crate::server`]; the callback
//! receives the shared PKCE state through an axum `Extension` layer.
//!
//! ## Security Considerations
//!
//! - Uses the OAuth 2.0 PKCE flow; the authorization code is only usable
//!   together with the verifier held in process memory
//! - The server binds to a loopback address and only lives for the duration
//!   of the auth flow

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
