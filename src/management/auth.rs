use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    types::{Token, TokenResponse},
    warning,
};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token that is valid for at least a few minutes.
    ///
    /// Refreshes through the token endpoint when the stored token is within
    /// the expiry buffer. Exactly one refresh attempt is made; on failure the
    /// stale token is returned and the next remote call surfaces the
    /// authorization error.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            match self.refresh_token().await {
                Ok(new_token) => {
                    self.token = new_token;
                    let _ = self.persist().await;
                }
                Err(e) => warning!("Failed to refresh access token: {}", e),
            }
        }

        self.token.access_token.clone()
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    async fn refresh_token(&self) -> Result<Token, String> {
        let client = Client::new();
        let res = client
            .post(&config::youtube_token_url())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", &self.token.refresh_token),
                ("client_id", &config::youtube_client_id()),
                ("client_secret", &config::youtube_client_secret()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = res.status();
        if !status.is_success() {
            return Err(format!("token endpoint answered {}", status));
        }

        let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;

        // Google omits the refresh token and scope on refresh responses.
        Ok(Token {
            access_token: json.access_token,
            refresh_token: json
                .refresh_token
                .unwrap_or_else(|| self.token.refresh_token.clone()),
            scope: json.scope.unwrap_or_else(|| self.token.scope.clone()),
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ytsortcli/cache/token.json");
        path
    }
}
