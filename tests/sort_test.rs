use ytsortcli::sort::{SortOrder, artist_of, sort_key, sorted_by};
use ytsortcli::types::{PlaylistItem, PlaylistItemSnippet, ResourceId};

// Helper function to create a test playlist item
fn create_test_item(id: &str, title: &str, owner: Option<&str>, position: u32) -> PlaylistItem {
    PlaylistItem {
        id: id.to_string(),
        snippet: PlaylistItemSnippet {
            playlist_id: "PL_test".to_string(),
            title: title.to_string(),
            position,
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: format!("{}_video", id),
            },
            channel_title: Some("Uploader Channel".to_string()),
            video_owner_channel_title: owner.map(str::to_string),
        },
    }
}

fn ids(items: &[PlaylistItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_artist_prefers_video_owner_channel() {
    let item = create_test_item("id1", "Song", Some("Artist Topic"), 0);
    assert_eq!(artist_of(&item), "Artist Topic");
}

#[test]
fn test_artist_falls_back_to_channel_title() {
    // Missing owner channel
    let item = create_test_item("id1", "Song", None, 0);
    assert_eq!(artist_of(&item), "Uploader Channel");

    // Empty owner channel counts as missing
    let item = create_test_item("id2", "Song", Some(""), 0);
    assert_eq!(artist_of(&item), "Uploader Channel");
}

#[test]
fn test_sort_key_is_lowercased() {
    let item = create_test_item("id1", "Some TITLE", Some("Some ARTIST"), 0);

    let key = sort_key(&item, SortOrder::ArtistTitle);
    assert_eq!(key, ("some artist".to_string(), "some title".to_string()));

    let key = sort_key(&item, SortOrder::Title);
    assert_eq!(key, ("some title".to_string(), String::new()));
}

#[test]
fn test_sorted_by_artist_then_title() {
    let items = vec![
        create_test_item("id1", "Zebra", Some("Beta"), 0),
        create_test_item("id2", "Alpha", Some("beta"), 1),
        create_test_item("id3", "Middle", Some("Acme"), 2),
    ];

    let sorted = sorted_by(&items, SortOrder::ArtistTitle);

    // Artist first (case-insensitive), then title within the same artist
    assert_eq!(ids(&sorted), vec!["id3", "id2", "id1"]);
}

#[test]
fn test_sorted_by_title_ignores_artist() {
    let items = vec![
        create_test_item("id1", "Banana", Some("Zeta"), 0),
        create_test_item("id2", "apple", Some("Alpha"), 1),
    ];

    let sorted = sorted_by(&items, SortOrder::Title);
    assert_eq!(ids(&sorted), vec!["id2", "id1"]);
}

#[test]
fn test_sorting_already_sorted_list_is_idempotent() {
    let items = vec![
        create_test_item("id1", "Charlie", None, 0),
        create_test_item("id2", "alpha", None, 1),
        create_test_item("id3", "Bravo", None, 2),
    ];

    let once = sorted_by(&items, SortOrder::Title);
    let twice = sorted_by(&once, SortOrder::Title);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    // Same title and artist everywhere, only identity differs
    let items = vec![
        create_test_item("id1", "Same", Some("Artist"), 0),
        create_test_item("id2", "Same", Some("Artist"), 1),
        create_test_item("id3", "Same", Some("Artist"), 2),
    ];

    let sorted = sorted_by(&items, SortOrder::ArtistTitle);

    // Equal keys keep their relative input order
    assert_eq!(ids(&sorted), vec!["id1", "id2", "id3"]);
}

#[test]
fn test_fallback_key_uses_channel_title() {
    // Owner channel absent: the uploader channel becomes the artist key
    let items = vec![
        create_test_item("id1", "Song", None, 0),
        create_test_item("id2", "Song", Some("Aardvark"), 1),
    ];

    let sorted = sorted_by(&items, SortOrder::ArtistTitle);

    // "Aardvark" < "Uploader Channel"
    assert_eq!(ids(&sorted), vec!["id2", "id1"]);
}
