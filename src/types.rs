use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Wire shape of Google's token endpoint responses. Refresh responses omit
/// `refresh_token`; the stored one is carried forward.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One page of a paginated list call.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistListResponse {
    pub items: Vec<Playlist>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub playlist_id: String,
    pub title: String,
    pub position: u32,
    pub resource_id: ResourceId,
    /// Channel that added the item to the playlist.
    pub channel_title: Option<String>,
    /// Channel that owns the underlying video; absent for deleted or private
    /// videos.
    pub video_owner_channel_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

/// Request body for `PUT /playlistItems`. Only the fields the update endpoint
/// requires are sent; everything else stays untouched on the remote record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemUpdate {
    pub id: String,
    pub snippet: PlaylistItemUpdateSnippet,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemUpdateSnippet {
    pub playlist_id: String,
    pub resource_id: ResourceId,
    pub position: u32,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub title: String,
    pub id: String,
}
