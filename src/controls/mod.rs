//! Controls domain: plugin wiring and public exports.

mod components;
mod events;
mod systems;
mod ui;

pub use components::{ControlButton, Direction};
pub use events::ControlCommand;

use bevy::prelude::*;

use crate::controls::systems::{handle_pad_interactions, read_key_commands};
use crate::controls::ui::{cleanup_control_pad, spawn_control_pad};
use crate::core::AppState;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlCommand>()
            .add_systems(OnEnter(AppState::Flying), spawn_control_pad)
            .add_systems(OnExit(AppState::Flying), cleanup_control_pad)
            .add_systems(
                Update,
                (handle_pad_interactions, read_key_commands)
                    .run_if(in_state(AppState::Flying)),
            );
    }
}
