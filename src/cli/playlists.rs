use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::TokenManager,
    pager, sort,
    types::PlaylistTableRow,
    youtube::{PlaylistService, YouTubeClient},
};

pub async fn playlists(search: Option<String>, items: Option<String>) {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run ytsortcli auth\n Error: {}",
                e
            );
        }
    };
    let mut client = YouTubeClient::new(token_mgr);

    if let Some(playlist_id) = items {
        display_items(&mut client, &playlist_id).await;
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut playlists = pager::fetch_all("playlists", async |token| {
        client.playlists_page(token).await
    })
    .await;

    pb.finish_and_clear();

    // sort playlists by title
    playlists.sort_by(|a, b| {
        a.snippet
            .title
            .to_lowercase()
            .cmp(&b.snippet.title.to_lowercase())
    });

    if let Some(playlist_search) = search {
        let search_term = playlist_search.to_lowercase();
        playlists.retain(|p| p.snippet.title.to_lowercase().contains(&search_term));
    }

    // convert playlists to table rows
    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            title: p.snippet.title,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

async fn display_items(client: &mut YouTubeClient, playlist_id: &str) {
    let items = pager::fetch_all(
        &format!("items for playlist {}", playlist_id),
        async |token| client.playlist_items_page(playlist_id, token).await,
    )
    .await;

    if items.is_empty() {
        info!("No items found in playlist {}.", playlist_id);
        return;
    }

    info!("Items in playlist {}:", playlist_id);
    for item in &items {
        info!(
            "{} by {} (ID: {})",
            item.snippet.title,
            sort::artist_of(item),
            item.id
        );
    }
}
