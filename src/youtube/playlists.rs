use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    management::TokenManager,
    types::{
        Page, Playlist, PlaylistItem, PlaylistItemListResponse, PlaylistItemUpdate,
        PlaylistItemUpdateSnippet, PlaylistListResponse,
    },
    youtube::{ApiError, PlaylistService},
};

/// Items per list request, the maximum the API allows.
const PAGE_SIZE: u32 = 50;

/// YouTube Data API client for playlist operations.
///
/// Wraps an HTTP client and the token manager; every request is made with a
/// freshly validated bearer token. Calls are single attempts: transport
/// failures and non-success statuses are returned as [`ApiError`] without
/// retrying.
pub struct YouTubeClient {
    http: Client,
    tokens: TokenManager,
}

impl YouTubeClient {
    pub fn new(tokens: TokenManager) -> Self {
        Self {
            http: Client::new(),
            tokens,
        }
    }

    async fn get_json<T: DeserializeOwned>(&mut self, api_url: &str) -> Result<T, ApiError> {
        let token = self.tokens.get_valid_token().await;
        let response = self.http.get(api_url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

impl PlaylistService for YouTubeClient {
    /// Fetches one page of the authenticated user's playlists.
    ///
    /// # API Endpoint
    ///
    /// Uses `GET /playlists` with `part=snippet&mine=true` and the maximum
    /// page size; the continuation token is appended when present.
    async fn playlists_page(
        &mut self,
        page_token: Option<String>,
    ) -> Result<Page<Playlist>, ApiError> {
        let mut api_url = format!(
            "{uri}/playlists?part=snippet&mine=true&maxResults={limit}",
            uri = &config::youtube_api_url(),
            limit = PAGE_SIZE
        );
        if let Some(token_val) = &page_token {
            api_url.push_str(&format!("&pageToken={}", token_val));
        }

        let res = self.get_json::<PlaylistListResponse>(&api_url).await?;

        Ok(Page {
            items: res.items,
            next_page_token: res.next_page_token,
        })
    }

    /// Fetches one page of a playlist's items in remote order.
    async fn playlist_items_page(
        &mut self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<Page<PlaylistItem>, ApiError> {
        let mut api_url = format!(
            "{uri}/playlistItems?part=snippet&playlistId={id}&maxResults={limit}",
            uri = &config::youtube_api_url(),
            id = playlist_id,
            limit = PAGE_SIZE
        );
        if let Some(token_val) = &page_token {
            api_url.push_str(&format!("&pageToken={}", token_val));
        }

        let res = self.get_json::<PlaylistItemListResponse>(&api_url).await?;

        Ok(Page {
            items: res.items,
            next_page_token: res.next_page_token,
        })
    }

    /// Moves one playlist item to a new position.
    ///
    /// # API Endpoint
    ///
    /// Uses `PUT /playlistItems` with `part=snippet`. The update body carries
    /// the item's id, its playlist id, its resource id and the new position;
    /// the service renumbers only this record.
    async fn update_item_position(
        &mut self,
        item: &PlaylistItem,
        position: u32,
    ) -> Result<(), ApiError> {
        let api_url = format!(
            "{uri}/playlistItems?part=snippet",
            uri = &config::youtube_api_url()
        );

        let body = PlaylistItemUpdate {
            id: item.id.clone(),
            snippet: PlaylistItemUpdateSnippet {
                playlist_id: item.snippet.playlist_id.clone(),
                resource_id: item.snippet.resource_id.clone(),
                position,
            },
        };

        let token = self.tokens.get_valid_token().await;
        let response = self
            .http
            .put(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(())
    }
}
