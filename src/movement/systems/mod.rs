//! Movement domain: system modules for the animation loop.

pub(crate) mod animate;
pub(crate) mod input;
pub(crate) mod phases;

pub(crate) use animate::advance_legs;
pub(crate) use input::apply_control_commands;
pub(crate) use phases::{begin_held_movement, settle_finished_legs};
