use std::collections::HashSet;

use reqwest::StatusCode;
use ytsortcli::reconcile::{ReconcileSummary, Reconciler};
use ytsortcli::types::{Page, Playlist, PlaylistItem, PlaylistItemSnippet, ResourceId};
use ytsortcli::youtube::{ApiError, PlaylistService};

// Scripted stand-in for the remote catalog: records every position update
// and fails the ones whose item id was marked as failing.
struct FakeService {
    update_calls: Vec<(String, u32)>,
    fail_ids: HashSet<String>,
}

impl FakeService {
    fn new() -> Self {
        Self {
            update_calls: Vec::new(),
            fail_ids: HashSet::new(),
        }
    }

    fn failing(ids: &[&str]) -> Self {
        Self {
            update_calls: Vec::new(),
            fail_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl PlaylistService for FakeService {
    async fn playlists_page(
        &mut self,
        _page_token: Option<String>,
    ) -> Result<Page<Playlist>, ApiError> {
        Ok(Page {
            items: Vec::new(),
            next_page_token: None,
        })
    }

    async fn playlist_items_page(
        &mut self,
        _playlist_id: &str,
        _page_token: Option<String>,
    ) -> Result<Page<PlaylistItem>, ApiError> {
        Ok(Page {
            items: Vec::new(),
            next_page_token: None,
        })
    }

    async fn update_item_position(
        &mut self,
        item: &PlaylistItem,
        position: u32,
    ) -> Result<(), ApiError> {
        self.update_calls.push((item.id.clone(), position));
        if self.fail_ids.contains(&item.id) {
            return Err(ApiError::Status(StatusCode::FORBIDDEN));
        }
        Ok(())
    }
}

// Helper function to create a test playlist item
fn create_test_item(id: &str, position: u32) -> PlaylistItem {
    PlaylistItem {
        id: id.to_string(),
        snippet: PlaylistItemSnippet {
            playlist_id: "PL_test".to_string(),
            title: format!("{} title", id),
            position,
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: format!("{}_video", id),
            },
            channel_title: Some("Uploader Channel".to_string()),
            video_owner_channel_title: Some("Artist".to_string()),
        },
    }
}

fn playlist(ids: &[&str]) -> Vec<PlaylistItem> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| create_test_item(id, i as u32))
        .collect()
}

fn reorder(items: &[PlaylistItem], ids: &[&str]) -> Vec<PlaylistItem> {
    ids.iter()
        .map(|id| items.iter().find(|item| item.id == *id).unwrap().clone())
        .collect()
}

fn ids(items: &[PlaylistItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[tokio::test]
async fn test_already_sorted_playlist_issues_no_calls() {
    let current = playlist(&["a1", "b1", "c1"]);
    let target = current.clone();
    let mut service = FakeService::new();

    let mut reconciler = Reconciler::new(current);
    let summary = reconciler.apply(&mut service, &target).await;

    assert_eq!(summary, ReconcileSummary::default());
    assert!(service.update_calls.is_empty());
    assert_eq!(ids(reconciler.items()), vec!["a1", "b1", "c1"]);
}

#[tokio::test]
async fn test_mirror_reaches_target_order() {
    let current = playlist(&["a1", "b1", "c1", "d1", "e1"]);
    let target = reorder(&current, &["d1", "b1", "e1", "a1", "c1"]);
    let mut service = FakeService::new();

    let mut reconciler = Reconciler::new(current);
    let summary = reconciler.apply(&mut service, &target).await;

    assert_eq!(ids(reconciler.items()), vec!["d1", "b1", "e1", "a1", "c1"]);
    assert_eq!(
        summary,
        ReconcileSummary {
            moved: 3,
            skipped: 0
        }
    );
    assert_eq!(
        service.update_calls,
        vec![
            ("d1".to_string(), 0),
            ("b1".to_string(), 1),
            ("e1".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn test_moving_head_item_shifts_the_rest_into_place() {
    let current = playlist(&["a1", "b1", "c1"]);
    let target = reorder(&current, &["c1", "a1", "b1"]);
    let mut service = FakeService::new();

    let mut reconciler = Reconciler::new(current);
    let summary = reconciler.apply(&mut service, &target).await;

    // Moving c1 to the front shifts a1 and b1 down one position each, so
    // they already sit at their target index and need no update of their own.
    assert_eq!(service.update_calls, vec![("c1".to_string(), 0)]);
    assert_eq!(
        summary,
        ReconcileSummary {
            moved: 1,
            skipped: 0
        }
    );
    assert_eq!(ids(reconciler.items()), vec!["c1", "a1", "b1"]);
    assert_eq!(reconciler.items()[0].snippet.position, 0);
}

#[tokio::test]
async fn test_failed_update_skips_item_and_continues() {
    let current = playlist(&["a1", "b1", "c1"]);
    let target = reorder(&current, &["c1", "b1", "a1"]);
    let mut service = FakeService::failing(&["c1"]);

    let mut reconciler = Reconciler::new(current);
    let summary = reconciler.apply(&mut service, &target).await;

    // c1's move failed and was not applied to the mirror; a1's move still
    // went through afterwards.
    assert_eq!(
        service.update_calls,
        vec![("c1".to_string(), 0), ("a1".to_string(), 2)]
    );
    assert_eq!(
        summary,
        ReconcileSummary {
            moved: 1,
            skipped: 1
        }
    );
    assert_eq!(ids(reconciler.items()), vec!["b1", "c1", "a1"]);

    // The skipped item kept its fetched position field
    let c1 = reconciler
        .items()
        .iter()
        .find(|item| item.id == "c1")
        .unwrap();
    assert_eq!(c1.snippet.position, 2);
}
