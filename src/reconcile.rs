//! Order reconciliation against the remote playlist.
//!
//! Given the order a playlist was fetched in and a target order over the same
//! items, [`Reconciler`] issues single-item position updates left to right
//! until the remote order matches the target. The remote service renumbers
//! only the moved record on each update, so replaying every successful move
//! on the in-process mirror keeps mirror and remote order in sync without
//! re-fetching between moves.

use crate::{info, types::PlaylistItem, warning, youtube::PlaylistService};

/// Result of reconciling one target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The item already sits at its target position.
    AlreadyCorrect,
    /// The remote update succeeded and the mirror was reordered to match.
    Applied,
    /// The position was left as-is; reconciliation continues with the next one.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The remote position update failed.
    UpdateFailed,
    /// The target identity was not present in the mirror. Current and target
    /// order hold the same items, so this indicates a broken invariant.
    MissingFromMirror,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub moved: usize,
    pub skipped: usize,
}

/// Reconciles a playlist's remote order with a target order.
///
/// Owns the mirror: an ordered copy of the playlist as fetched, mutated in
/// lockstep with every successful remote move. After [`Reconciler::apply`]
/// the mirror reflects the assumed remote state, including items whose moves
/// were skipped.
pub struct Reconciler {
    mirror: Vec<PlaylistItem>,
}

impl Reconciler {
    pub fn new(current: Vec<PlaylistItem>) -> Self {
        Self { mirror: current }
    }

    /// The mirror in its current order.
    pub fn items(&self) -> &[PlaylistItem] {
        &self.mirror
    }

    /// Applies the moves needed to bring the remote playlist into target
    /// order.
    ///
    /// If the mirror already matches the target no update call is made at
    /// all. Otherwise each position is processed left to right; failures are
    /// logged and skipped, never propagated.
    pub async fn apply<S: PlaylistService>(
        &mut self,
        service: &mut S,
        target: &[PlaylistItem],
    ) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        if self.matches(target) {
            info!("Playlist is already sorted. Skipping.");
            return summary;
        }

        for (index, wanted) in target.iter().enumerate() {
            match self.step(service, wanted, index).await {
                StepOutcome::Applied => summary.moved += 1,
                StepOutcome::Skipped(_) => summary.skipped += 1,
                StepOutcome::AlreadyCorrect => {}
            }
        }

        summary
    }

    fn matches(&self, target: &[PlaylistItem]) -> bool {
        self.mirror.len() == target.len()
            && self
                .mirror
                .iter()
                .zip(target)
                .all(|(current, wanted)| current.id == wanted.id)
    }

    async fn step<S: PlaylistService>(
        &mut self,
        service: &mut S,
        wanted: &PlaylistItem,
        index: usize,
    ) -> StepOutcome {
        if self
            .mirror
            .get(index)
            .is_some_and(|item| item.id == wanted.id)
        {
            return StepOutcome::AlreadyCorrect;
        }

        // Earlier moves shift the positions of not-yet-processed items, so the
        // item has to be located by identity rather than by its fetched index.
        let Some(found) = self.mirror.iter().position(|item| item.id == wanted.id) else {
            warning!("Could not find item ID {} in current playlist.", wanted.id);
            return StepOutcome::Skipped(SkipReason::MissingFromMirror);
        };

        let position = index as u32;
        if let Err(e) = service
            .update_item_position(&self.mirror[found], position)
            .await
        {
            warning!(
                "Failed to update item '{}' to position {}: {}",
                wanted.snippet.title, index, e
            );
            return StepOutcome::Skipped(SkipReason::UpdateFailed);
        }

        // Replay the remote effect locally: pop the item and reinsert it at
        // its new position.
        let mut moved = self.mirror.remove(found);
        moved.snippet.position = position;
        info!(
            "{}. Moved '{}' to position {}",
            index + 1,
            moved.snippet.title,
            index
        );
        self.mirror.insert(index, moved);

        StepOutcome::Applied
    }
}
