//! Movement domain: the input latch and the phase state machine.

use bevy::prelude::*;

use crate::controls::Direction;
use crate::movement::curves::MoveEasing;
use crate::movement::resources::PhaseTiming;

/// Held/released state of the six nudge directions.
///
/// Opposite directions on one axis are mutually exclusive. A release is
/// not applied immediately: the direction moves to a pending queue and
/// keeps contributing motion until the controller drains the queue at the
/// end of a deceleration, so releasing mid-animation never snaps.
#[derive(Component, Debug, Default)]
pub struct InputLatch {
    held: [bool; 6],
    pending_release: Vec<Direction>,
}

impl InputLatch {
    /// Latch `direction` as held. Ignored while the opposite direction is
    /// still active (held or pending release). Re-pressing a direction
    /// whose release is queued cancels that release.
    pub fn hold(&mut self, direction: Direction) {
        if self.is_active(direction.opposite()) {
            return;
        }
        self.pending_release.retain(|&d| d != direction);
        self.held[direction as usize] = true;
        debug_assert!(
            !self.is_active(direction.opposite()),
            "both members of an axis pair active"
        );
    }

    /// Queue `direction` for release at the next drain point. Directions
    /// that are not held (never latched, or already queued) are ignored,
    /// which makes double releases idempotent.
    pub fn release(&mut self, direction: Direction) {
        if !self.held[direction as usize] {
            return;
        }
        self.held[direction as usize] = false;
        self.pending_release.push(direction);
    }

    /// True iff no direction is held. Pending releases do not count: they
    /// are on their way out and only owe one more increment of motion.
    pub fn is_idle(&self) -> bool {
        !self.held.iter().any(|&h| h)
    }

    /// Whether `direction` still influences motion.
    pub fn is_active(&self, direction: Direction) -> bool {
        self.held[direction as usize] || self.pending_release.contains(&direction)
    }

    /// Directions that currently influence motion: the held set plus any
    /// queued releases that have not been drained yet.
    pub fn active_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_active(d))
            .collect()
    }

    /// The held set alone, without pending releases.
    pub fn held_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.held[d as usize])
            .collect()
    }

    /// Apply every queued release and clear the queue. Called by the
    /// controller only when an Ending leg completes.
    pub fn drain_releases(&mut self) {
        for direction in self.pending_release.drain(..) {
            self.held[direction as usize] = false;
        }
    }
}

/// Animation phase of the movement controller. The phase doubles as the
/// in-flight marker: a leg is running iff the phase is not `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementPhase {
    #[default]
    Idle,
    Starting,
    Moving,
    Ending,
}

/// Phase-based animator for one movable entity.
#[derive(Component, Debug, Default)]
pub struct MovementController {
    pub phase: MovementPhase,
}

impl MovementController {
    /// Sum of per-axis steps for every active direction. Axes with no
    /// active direction contribute nothing; opposite directions can never
    /// both be active, so the sum is well-defined.
    pub fn step_delta(active: &[Direction], step: f32) -> Vec3 {
        active
            .iter()
            .fold(Vec3::ZERO, |acc, d| acc + d.offset() * step)
    }
}

/// One in-flight animation leg.
///
/// `from` is captured at the moment the leg is issued so consecutive legs
/// compose from the actual position, not a stale anchor.
#[derive(Component, Debug)]
pub struct MoveLeg {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub easing: MoveEasing,
    pub elapsed: f32,
}

impl MoveLeg {
    pub fn new(from: Vec3, delta: Vec3, timing: PhaseTiming) -> Self {
        Self {
            from,
            to: from + delta,
            duration: timing.duration,
            easing: timing.easing,
            elapsed: 0.0,
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
