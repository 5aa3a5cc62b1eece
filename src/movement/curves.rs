//! Movement domain: easing policy for the three animation phases.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Easing applied to one animation leg.
///
/// `AccelerateIn` and `DecelerateOut` are the quadratic ease-in/ease-out
/// pair; `Linear` is constant velocity for the sustained phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEasing {
    AccelerateIn,
    Linear,
    DecelerateOut,
}

impl MoveEasing {
    fn ease_function(self) -> EaseFunction {
        match self {
            MoveEasing::AccelerateIn => EaseFunction::QuadraticIn,
            MoveEasing::Linear => EaseFunction::Linear,
            MoveEasing::DecelerateOut => EaseFunction::QuadraticOut,
        }
    }

    /// Eased progress for a normalized time `t` in `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        EasingCurve::new(0.0, 1.0, self.ease_function()).sample_clamped(t)
    }
}
