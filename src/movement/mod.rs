//! Movement domain: plugin wiring and public exports.
//!
//! Converts discrete hold/release commands into a continuous position
//! animation: an input latch debounces releases, and a phase state
//! machine (Idle -> Starting -> Moving* -> Ending -> Idle) drives one
//! animation leg at a time with per-phase easing.

mod components;
mod config;
mod curves;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{InputLatch, MoveLeg, MovementController, MovementPhase};
pub use curves::MoveEasing;
pub use events::LegFinishedEvent;
pub use resources::{MovementTuning, PhaseTiming};

use bevy::prelude::*;

use crate::core::AppState;
use crate::movement::config::setup_movement_tuning;
use crate::movement::systems::{
    advance_legs, apply_control_commands, begin_held_movement, settle_finished_legs,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<LegFinishedEvent>()
            .add_systems(Startup, setup_movement_tuning)
            .add_systems(
                Update,
                (
                    apply_control_commands,
                    begin_held_movement,
                    advance_legs,
                    settle_finished_legs,
                )
                    .chain()
                    .run_if(in_state(AppState::Flying)),
            );
    }
}
