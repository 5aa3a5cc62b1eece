//! Core domain: app flow states and the placement step.

mod events;
mod state;
mod systems;
mod ui;

pub use events::PlaceAircraftEvent;
pub use state::AppState;

use bevy::prelude::*;

use crate::core::systems::handle_placement_click;
use crate::core::ui::{cleanup_placement_hint, spawn_placement_hint};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_message::<PlaceAircraftEvent>()
            .add_systems(OnEnter(AppState::Placing), spawn_placement_hint)
            .add_systems(OnExit(AppState::Placing), cleanup_placement_hint)
            .add_systems(
                Update,
                handle_placement_click.run_if(in_state(AppState::Placing)),
            );
    }
}
