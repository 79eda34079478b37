use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, error, info,
    management::TokenManager,
    pager,
    reconcile::{ReconcileSummary, Reconciler},
    sort::{SortOrder, sorted_by},
    success,
    types::Playlist,
    warning,
    youtube::{PlaylistService, YouTubeClient},
};

/// Sorts every playlist of the authenticated user remotely.
///
/// Fetches all playlists, then runs fetch -> sort -> reconcile for each one.
/// A failure while processing one playlist is logged and does not stop the
/// others; only missing credentials abort the command.
pub async fn sort(by_title: bool, playlist: Option<String>) {
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

    let order = if by_title {
        SortOrder::Title
    } else {
        SortOrder::ArtistTitle
    };

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

    if let Some(only_id) = playlist {
        playlists.retain(|p| p.id == only_id);
        if playlists.is_empty() {
            warning!("No playlist with ID {} found.", only_id);
            return;
        }
    }

    info!("Found {} playlists.", playlists.len());

    let mut total_moved = 0;
    let mut total_skipped = 0;
    for pl in &playlists {
        info!("{} (ID: {})", pl.snippet.title, pl.id);

        match sort_playlist(&mut client, pl, order).await {
            Ok(summary) => {
                total_moved += summary.moved;
                total_skipped += summary.skipped;
            }
            Err(e) => warning!("Error sorting playlist {}: {}", pl.id, e),
        }
    }

    success!(
        "Finished sorting {} playlists ({} items moved, {} skipped).",
        playlists.len(),
        total_moved,
        total_skipped
    );
}

/// Fetch, sort and reconcile a single playlist.
async fn sort_playlist(
    client: &mut YouTubeClient,
    playlist: &Playlist,
    order: SortOrder,
) -> Res<ReconcileSummary> {
    let items = pager::fetch_all(
        &format!("items for playlist {}", playlist.id),
        async |token| client.playlist_items_page(&playlist.id, token).await,
    )
    .await;

    if items.is_empty() {
        info!("No items found in playlist {}.", playlist.snippet.title);
        return Ok(ReconcileSummary::default());
    }

    let target = sorted_by(&items, order);
    let mut reconciler = Reconciler::new(items);
    Ok(reconciler.apply(client, &target).await)
}
