//! Controls domain: direction values and control pad components.

use bevy::prelude::*;

/// One of the six nudge directions on the three movement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// All six directions, pair-ordered by axis.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// The other member of this direction's axis pair.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Unit offset in world space. Bevy frame: +Y up, +X right, -Z forward.
    pub fn offset(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::Y,
            Direction::Down => Vec3::NEG_Y,
            Direction::Right => Vec3::X,
            Direction::Left => Vec3::NEG_X,
            Direction::Forward => Vec3::NEG_Z,
            Direction::Backward => Vec3::Z,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Forward => "Fwd",
            Direction::Backward => "Back",
        }
    }
}

/// Button on the control pad that latches one direction while pressed.
#[derive(Component, Debug)]
pub struct ControlButton {
    pub direction: Direction,
    /// Whether the last observed interaction was a press, so the matching
    /// release fires when the cursor lifts or leaves.
    pub engaged: bool,
}
