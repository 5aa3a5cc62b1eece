//! Core domain: app flow states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum AppState {
    /// Waiting for the user to pick a spot for the aircraft.
    #[default]
    Placing,
    /// Aircraft placed; the control pad is live.
    Flying,
}
