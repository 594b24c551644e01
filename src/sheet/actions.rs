//! Message handlers for loadout mutations.
//!
//! UI panels only write request messages; the systems here apply the
//! loadout rules, drive the swap-selection state, and commit labeled
//! edits into history.

use bevy::prelude::*;

use crate::catalog::CardCatalog;
use crate::character::loadout::{compute_limits, CardZone, MoveOutcome, PendingSwap};
use crate::character::CharacterData;
use crate::constants::{LOADOUT_SOFT_LIMIT, MAX_VAULT_CARDS, STARTING_LOADOUT_LIMIT};

use super::history::CommitEdit;

/// Swap selection in progress: a move request hit a full destination and
/// waits for the user to pick a card to exchange, or to cancel.
/// Transient UI state, never serialized.
#[derive(Resource, Default)]
pub struct SwapState {
    pub pending: Option<PendingSwap>,
}

/// Take a card from the compendium into the active loadout
#[derive(Message)]
pub struct AddCardRequest {
    pub name: String,
}

/// Move a held card to the other zone
#[derive(Message)]
pub struct MoveCardRequest {
    pub name: String,
    pub from: CardZone,
}

/// Complete a pending swap by naming the card to exchange with
#[derive(Message)]
pub struct SwapTargetRequest {
    pub target_name: String,
}

/// Abandon the pending swap
#[derive(Message)]
pub struct CancelSwapRequest;

/// Return a held card to the compendium
#[derive(Message)]
pub struct RemoveCardRequest {
    pub name: String,
    pub zone: CardZone,
}

/// Capacity of a move destination. The active loadout is bounded by the
/// current limits; the vault by its fixed size.
fn destination_capacity(dest: CardZone, character: &CharacterData) -> usize {
    match dest {
        CardZone::Active => {
            compute_limits(
                character.creation_complete,
                character.loadout.active.len(),
                STARTING_LOADOUT_LIMIT,
                LOADOUT_SOFT_LIMIT,
            )
            .max_allowed
        }
        CardZone::Vault => MAX_VAULT_CARDS,
    }
}

pub fn handle_add_card(
    mut events: MessageReader<AddCardRequest>,
    catalog: Res<CardCatalog>,
    mut character: ResMut<CharacterData>,
    mut commits: MessageWriter<CommitEdit>,
) {
    for event in events.read() {
        let limits = compute_limits(
            character.creation_complete,
            character.loadout.active.len(),
            STARTING_LOADOUT_LIMIT,
            LOADOUT_SOFT_LIMIT,
        );
        if limits.disable_add {
            warn!("Loadout is at its creation cap; not adding {}", event.name);
            continue;
        }

        let Some(card) = catalog.get(&event.name) else {
            warn!("Unknown card: {}", event.name);
            continue;
        };

        if character.loadout.add_to_active(card.clone()) {
            commits.write(CommitEdit::new(format!("Add {}", event.name)));
        }
    }
}

pub fn handle_move_card(
    mut events: MessageReader<MoveCardRequest>,
    mut character: ResMut<CharacterData>,
    mut swap_state: ResMut<SwapState>,
    mut commits: MessageWriter<CommitEdit>,
) {
    for event in events.read() {
        // One swap selection at a time; each resolves before the next starts
        if swap_state.pending.is_some() {
            continue;
        }

        let dest = event.from.other();
        let capacity = destination_capacity(dest, &character);

        match character.loadout.request_move(&event.name, event.from, capacity) {
            MoveOutcome::Moved => {
                commits.write(CommitEdit::new(format!(
                    "Move {} to {}",
                    event.name,
                    dest.display_name()
                )));
            }
            MoveOutcome::NeedsSwap => {
                debug!("{} is full; waiting for a swap target", dest.display_name());
                swap_state.pending = Some(PendingSwap {
                    source: event.from,
                    card_name: event.name.clone(),
                });
            }
            MoveOutcome::NotFound => {}
        }
    }
}

pub fn handle_swap_target(
    mut events: MessageReader<SwapTargetRequest>,
    mut character: ResMut<CharacterData>,
    mut swap_state: ResMut<SwapState>,
    mut commits: MessageWriter<CommitEdit>,
) {
    for event in events.read() {
        // Picking a target always leaves swap selection, even on a stale
        // request that no longer matches the loadout
        let Some(pending) = swap_state.pending.take() else {
            continue;
        };

        if character.loadout.resolve_swap(&pending, &event.target_name) {
            commits.write(CommitEdit::new(format!(
                "Swap {} with {}",
                pending.card_name, event.target_name
            )));
        }
    }
}

pub fn handle_cancel_swap(
    mut events: MessageReader<CancelSwapRequest>,
    mut swap_state: ResMut<SwapState>,
) {
    for _ in events.read() {
        swap_state.pending = None;
    }
}

pub fn handle_remove_card(
    mut events: MessageReader<RemoveCardRequest>,
    mut character: ResMut<CharacterData>,
    mut swap_state: ResMut<SwapState>,
    mut commits: MessageWriter<CommitEdit>,
) {
    for event in events.read() {
        if character.loadout.remove(&event.name, event.zone).is_some() {
            // A removed card can no longer be a swap participant
            if swap_state
                .pending
                .as_ref()
                .is_some_and(|p| p.card_name == event.name)
            {
                swap_state.pending = None;
            }
            commits.write(CommitEdit::new(format!("Remove {}", event.name)));
        }
    }
}
