//! Movement domain: tuning resource for step size and phase timing.

use bevy::prelude::*;

use crate::movement::curves::MoveEasing;

/// (duration, easing) pair for one phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTiming {
    pub duration: f32,
    pub easing: MoveEasing,
}

/// Tunable movement parameters. `assets/data/movement.ron` overrides the
/// built-in values at startup.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Multiplier applied to every movement step.
    pub movement_ratio: f32,
    /// Base distance covered by one animation leg per active axis.
    pub base_step: f32,
    pub starting: PhaseTiming,
    pub moving: PhaseTiming,
    pub ending: PhaseTiming,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_ratio: 1.0,
            base_step: 0.1,
            starting: PhaseTiming {
                duration: 0.2,
                easing: MoveEasing::AccelerateIn,
            },
            moving: PhaseTiming {
                duration: 0.2,
                easing: MoveEasing::Linear,
            },
            ending: PhaseTiming {
                duration: 0.2,
                easing: MoveEasing::DecelerateOut,
            },
        }
    }
}

impl MovementTuning {
    /// Effective distance per leg per active axis.
    pub fn movement_step(&self) -> f32 {
        self.base_step * self.movement_ratio
    }
}
