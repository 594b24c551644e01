pub mod actions;
pub mod history;

pub use actions::{
    AddCardRequest, CancelSwapRequest, MoveCardRequest, RemoveCardRequest, SwapState,
    SwapTargetRequest,
};
pub use history::{CharacterHistory, CommitEdit};

use bevy::prelude::*;

pub struct SheetPlugin;

impl Plugin for SheetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwapState>()
            .init_resource::<CharacterHistory>()
            .add_message::<CommitEdit>()
            .add_message::<AddCardRequest>()
            .add_message::<MoveCardRequest>()
            .add_message::<SwapTargetRequest>()
            .add_message::<CancelSwapRequest>()
            .add_message::<RemoveCardRequest>()
            .add_systems(
                Update,
                (
                    actions::handle_add_card.run_if(on_message::<AddCardRequest>),
                    actions::handle_move_card.run_if(on_message::<MoveCardRequest>),
                    actions::handle_swap_target.run_if(on_message::<SwapTargetRequest>),
                    actions::handle_cancel_swap.run_if(on_message::<CancelSwapRequest>),
                    actions::handle_remove_card.run_if(on_message::<RemoveCardRequest>),
                    // Collect commits after the action handlers so same-frame
                    // mutations are captured with their labels
                    history::record_commits,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (history::handle_undo_shortcut, history::handle_redo_shortcut),
            );
    }
}
