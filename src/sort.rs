//! Sort key policies for playlist items.
//!
//! Keys are lowercased and compared in plain code-point order, so the
//! resulting order is locale-independent. Sorting is stable: items with equal
//! keys keep their relative order from the fetched playlist.

use crate::{types::PlaylistItem, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort by artist, then by title.
    ArtistTitle,
    /// Sort by title alone.
    Title,
}

/// Returns the artist name of a playlist item.
///
/// Prefers the channel that owns the underlying video; falls back to the
/// channel that added the item when no owner title is available (deleted or
/// private videos).
pub fn artist_of(item: &PlaylistItem) -> &str {
    match item.snippet.video_owner_channel_title.as_deref() {
        Some(owner) if !owner.is_empty() => owner,
        _ => item.snippet.channel_title.as_deref().unwrap_or(""),
    }
}

/// Computes the comparison key for one item.
///
/// For [`SortOrder::ArtistTitle`] a missing owner-channel title is reported
/// once per item before falling back to the uploader channel.
pub fn sort_key(item: &PlaylistItem, order: SortOrder) -> (String, String) {
    match order {
        SortOrder::ArtistTitle => {
            let missing_owner = item
                .snippet
                .video_owner_channel_title
                .as_deref()
                .map_or(true, str::is_empty);
            if missing_owner {
                warning!(
                    "Missing artist for item '{}', using channel title instead.",
                    item.snippet.title
                );
            }
            (
                artist_of(item).to_lowercase(),
                item.snippet.title.to_lowercase(),
            )
        }
        SortOrder::Title => (item.snippet.title.to_lowercase(), String::new()),
    }
}

/// Returns the items sorted by the given order.
///
/// Keys are computed once per item (so fallback warnings fire once per item,
/// not per comparison) and the sort itself is stable.
pub fn sorted_by(items: &[PlaylistItem], order: SortOrder) -> Vec<PlaylistItem> {
    let mut keyed: Vec<((String, String), PlaylistItem)> = items
        .iter()
        .map(|item| (sort_key(item, order), item.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}
