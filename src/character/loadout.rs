//! Loadout capacity rules and card movement between the active loadout
//! and the vault.
//!
//! Everything here is pure and synchronous. The sheet module owns the
//! transient swap-selection state and calls into these operations from
//! its message handlers; capacities are passed in by the caller so the
//! rules stay independent of where the thresholds are configured.

use serde::{Deserialize, Serialize};

use super::card::DomainCard;

/// Capacity flags derived from the creation-complete flag and the current
/// loadout count. Recomputed on every frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadoutLimits {
    /// Cards the loadout may hold right now
    pub max_allowed: usize,
    /// The loadout already exceeds the creation cap (e.g. via an imported
    /// character). Renders a warning banner; never truncates or blocks saving.
    pub over_hard_limit: bool,
    /// Further additions are blocked
    pub disable_add: bool,
}

/// Compute the loadout capacity flags.
///
/// During creation the starting limit is a hard cap on additions. Once
/// creation is complete the soft limit takes over and is advisory: it
/// bounds move destinations but never disables adding.
pub fn compute_limits(
    creation_complete: bool,
    loadout_count: usize,
    starting_limit: usize,
    soft_limit: usize,
) -> LoadoutLimits {
    let max_allowed = if creation_complete {
        soft_limit
    } else {
        starting_limit
    };

    LoadoutLimits {
        max_allowed,
        over_hard_limit: !creation_complete && loadout_count > max_allowed,
        disable_add: !creation_complete && loadout_count >= starting_limit,
    }
}

/// The two places a held card can live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardZone {
    Active,
    Vault,
}

impl CardZone {
    pub fn other(self) -> CardZone {
        match self {
            CardZone::Active => CardZone::Vault,
            CardZone::Vault => CardZone::Active,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CardZone::Active => "Loadout",
            CardZone::Vault => "Vault",
        }
    }
}

/// A move request that could not complete because the destination was full.
/// Held by the UI until the user picks a card to swap with or cancels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSwap {
    pub source: CardZone,
    pub card_name: String,
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card moved to the other zone
    Moved,
    /// Destination is full; the caller should enter swap selection
    NeedsSwap,
    /// The named card is not in the source zone; nothing happened
    NotFound,
}

/// A character's held domain cards, split between the active loadout
/// and the vault.
///
/// Invariant: a card name appears in at most one zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    #[serde(default)]
    pub active: Vec<DomainCard>,
    #[serde(default)]
    pub vault: Vec<DomainCard>,
}

impl Loadout {
    pub fn zone(&self, zone: CardZone) -> &[DomainCard] {
        match zone {
            CardZone::Active => &self.active,
            CardZone::Vault => &self.vault,
        }
    }

    fn zone_mut(&mut self, zone: CardZone) -> &mut Vec<DomainCard> {
        match zone {
            CardZone::Active => &mut self.active,
            CardZone::Vault => &mut self.vault,
        }
    }

    /// Which zone holds the named card, if any
    pub fn zone_of(&self, name: &str) -> Option<CardZone> {
        if self.active.iter().any(|c| c.name == name) {
            Some(CardZone::Active)
        } else if self.vault.iter().any(|c| c.name == name) {
            Some(CardZone::Vault)
        } else {
            None
        }
    }

    /// Add a card to the active loadout. Returns false if a card with the
    /// same name is already held in either zone.
    pub fn add_to_active(&mut self, card: DomainCard) -> bool {
        if self.zone_of(&card.name).is_some() {
            return false;
        }
        self.active.push(card);
        true
    }

    /// Remove the named card from a zone, returning it to the compendium
    pub fn remove(&mut self, name: &str, zone: CardZone) -> Option<DomainCard> {
        let cards = self.zone_mut(zone);
        let idx = cards.iter().position(|c| c.name == name)?;
        Some(cards.remove(idx))
    }

    /// Move the named card out of `from` into the other zone.
    ///
    /// Only the destination's fullness matters: a move out of a full zone
    /// succeeds as long as the other side has room.
    pub fn request_move(&mut self, name: &str, from: CardZone, dest_capacity: usize) -> MoveOutcome {
        let Some(idx) = self.zone(from).iter().position(|c| c.name == name) else {
            return MoveOutcome::NotFound;
        };

        if self.zone(from.other()).len() >= dest_capacity {
            return MoveOutcome::NeedsSwap;
        }

        let card = self.zone_mut(from).remove(idx);
        self.zone_mut(from.other()).push(card);
        MoveOutcome::Moved
    }

    /// Exchange the pending card with `target_name` from the opposite zone.
    ///
    /// Atomic: either both cards change zones or neither does. Returns false
    /// (and changes nothing) when either card is no longer where the pending
    /// request expects it.
    pub fn resolve_swap(&mut self, pending: &PendingSwap, target_name: &str) -> bool {
        let (source_cards, dest_cards) = match pending.source {
            CardZone::Active => (&mut self.active, &mut self.vault),
            CardZone::Vault => (&mut self.vault, &mut self.active),
        };

        let Some(src_idx) = source_cards
            .iter()
            .position(|c| c.name == pending.card_name)
        else {
            return false;
        };
        let Some(dst_idx) = dest_cards.iter().position(|c| c.name == target_name) else {
            return false;
        };

        std::mem::swap(&mut source_cards[src_idx], &mut dest_cards[dst_idx]);
        true
    }

    /// Total Hope cost to recall everything currently in the loadout
    pub fn recall_cost_total(&self) -> u32 {
        self.active.iter().map(|c| c.recall_cost as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::card::{CardType, Domain};

    fn card(name: &str) -> DomainCard {
        DomainCard {
            name: name.to_string(),
            domain: Domain::Arcana,
            level: 1,
            card_type: CardType::Spell,
            recall_cost: 1,
        }
    }

    fn loadout(active: &[&str], vault: &[&str]) -> Loadout {
        Loadout {
            active: active.iter().map(|n| card(n)).collect(),
            vault: vault.iter().map(|n| card(n)).collect(),
        }
    }

    // compute_limits tests

    #[test]
    fn test_limits_during_creation_use_starting_limit() {
        let limits = compute_limits(false, 0, 2, 5);
        assert_eq!(limits.max_allowed, 2);
        assert!(!limits.disable_add);
        assert!(!limits.over_hard_limit);
    }

    #[test]
    fn test_limits_after_creation_use_soft_limit() {
        let limits = compute_limits(true, 0, 2, 5);
        assert_eq!(limits.max_allowed, 5);
    }

    #[test]
    fn test_disable_add_at_starting_limit() {
        assert!(!compute_limits(false, 1, 2, 5).disable_add);
        assert!(compute_limits(false, 2, 2, 5).disable_add);
        assert!(compute_limits(false, 3, 2, 5).disable_add);
    }

    #[test]
    fn test_add_never_disabled_after_creation() {
        // The soft limit is advisory; it never blocks additions
        assert!(!compute_limits(true, 5, 2, 5).disable_add);
        assert!(!compute_limits(true, 99, 2, 5).disable_add);
    }

    #[test]
    fn test_over_hard_limit_only_during_creation() {
        assert!(compute_limits(false, 6, 5, 8).over_hard_limit);
        assert!(!compute_limits(true, 6, 5, 8).over_hard_limit);
    }

    #[test]
    fn test_over_hard_limit_requires_exceeding_cap() {
        assert!(!compute_limits(false, 5, 5, 8).over_hard_limit);
        assert!(compute_limits(false, 6, 5, 8).over_hard_limit);
    }

    // Move and swap tests

    #[test]
    fn test_move_with_room_succeeds() {
        let mut loadout = loadout(&["A"], &["C"]);
        let outcome = loadout.request_move("A", CardZone::Active, 2);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(loadout.active.is_empty());
        assert_eq!(loadout.zone_of("A"), Some(CardZone::Vault));
    }

    #[test]
    fn test_move_into_full_zone_needs_swap() {
        let mut loadout = loadout(&["A", "B"], &["C", "D"]);
        let outcome = loadout.request_move("A", CardZone::Active, 2);
        assert_eq!(outcome, MoveOutcome::NeedsSwap);
        // Nothing moved
        assert_eq!(loadout.zone_of("A"), Some(CardZone::Active));
        assert_eq!(loadout.active.len(), 2);
        assert_eq!(loadout.vault.len(), 2);
    }

    #[test]
    fn test_move_unknown_card_is_noop() {
        let mut loadout = loadout(&["A"], &[]);
        assert_eq!(
            loadout.request_move("Z", CardZone::Active, 5),
            MoveOutcome::NotFound
        );
        assert_eq!(loadout.request_move("A", CardZone::Vault, 5), MoveOutcome::NotFound);
        assert_eq!(loadout.active.len(), 1);
    }

    #[test]
    fn test_move_checks_destination_only() {
        // Source zone over its own cap does not matter; only the destination
        // fullness is checked
        let mut loadout = loadout(&["A", "B", "C"], &[]);
        let outcome = loadout.request_move("A", CardZone::Active, 1);
        assert_eq!(outcome, MoveOutcome::Moved);
    }

    #[test]
    fn test_swap_exchanges_zone_membership() {
        let mut loadout = loadout(&["A", "B"], &["C", "D"]);
        let pending = PendingSwap {
            source: CardZone::Active,
            card_name: "A".to_string(),
        };

        assert!(loadout.resolve_swap(&pending, "C"));
        assert_eq!(loadout.zone_of("A"), Some(CardZone::Vault));
        assert_eq!(loadout.zone_of("C"), Some(CardZone::Active));
        // Both zones keep their exact counts
        assert_eq!(loadout.active.len(), 2);
        assert_eq!(loadout.vault.len(), 2);
    }

    #[test]
    fn test_swap_with_stale_pending_changes_nothing() {
        let mut loadout = loadout(&["B"], &["C"]);
        let pending = PendingSwap {
            source: CardZone::Active,
            card_name: "A".to_string(),
        };

        assert!(!loadout.resolve_swap(&pending, "C"));
        assert_eq!(loadout.active.len(), 1);
        assert_eq!(loadout.vault.len(), 1);
        assert_eq!(loadout.zone_of("C"), Some(CardZone::Vault));
    }

    #[test]
    fn test_swap_with_missing_target_changes_nothing() {
        let mut loadout = loadout(&["A"], &["C"]);
        let pending = PendingSwap {
            source: CardZone::Active,
            card_name: "A".to_string(),
        };

        assert!(!loadout.resolve_swap(&pending, "Z"));
        assert_eq!(loadout.zone_of("A"), Some(CardZone::Active));
    }

    // Add/remove tests

    #[test]
    fn test_add_rejects_duplicate_names() {
        let mut loadout = loadout(&["A"], &["B"]);
        assert!(!loadout.add_to_active(card("A")));
        assert!(!loadout.add_to_active(card("B")));
        assert!(loadout.add_to_active(card("C")));
        assert_eq!(loadout.active.len(), 2);
    }

    #[test]
    fn test_remove_returns_card() {
        let mut loadout = loadout(&["A"], &[]);
        let removed = loadout.remove("A", CardZone::Active);
        assert_eq!(removed.map(|c| c.name), Some("A".to_string()));
        assert!(loadout.active.is_empty());
        assert!(loadout.remove("A", CardZone::Active).is_none());
    }

    #[test]
    fn test_recall_cost_total_counts_active_only() {
        let loadout = loadout(&["A", "B"], &["C"]);
        assert_eq!(loadout.recall_cost_total(), 2);
    }
}
