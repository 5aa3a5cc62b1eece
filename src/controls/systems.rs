//! Controls domain: press/release sampling from pad buttons and keys.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::controls::ui::{HOVERED_BUTTON_COLOR, IDLE_BUTTON_COLOR, PRESSED_BUTTON_COLOR};
use crate::controls::{ControlButton, ControlCommand, Direction};

/// Keyboard bindings for the six directions.
const KEY_BINDINGS: [(KeyCode, Direction); 6] = [
    (KeyCode::Space, Direction::Up),
    (KeyCode::ShiftLeft, Direction::Down),
    (KeyCode::KeyA, Direction::Left),
    (KeyCode::KeyD, Direction::Right),
    (KeyCode::KeyW, Direction::Forward),
    (KeyCode::KeyS, Direction::Backward),
];

/// Emit one Hold on press and one Release when the press ends.
/// `Interaction` alone does not say whether the previous state was a
/// press, so each button tracks its own engagement.
pub(crate) fn handle_pad_interactions(
    mut buttons: Query<
        (&mut ControlButton, &Interaction, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut control_events: MessageWriter<ControlCommand>,
) {
    for (mut button, interaction, mut bg_color) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                if !button.engaged {
                    button.engaged = true;
                    control_events.write(ControlCommand::Hold(button.direction));
                }
                *bg_color = BackgroundColor(PRESSED_BUTTON_COLOR);
            }
            Interaction::Hovered => {
                if button.engaged {
                    button.engaged = false;
                    control_events.write(ControlCommand::Release(button.direction));
                }
                *bg_color = BackgroundColor(HOVERED_BUTTON_COLOR);
            }
            Interaction::None => {
                if button.engaged {
                    button.engaged = false;
                    control_events.write(ControlCommand::Release(button.direction));
                }
                *bg_color = BackgroundColor(IDLE_BUTTON_COLOR);
            }
        }
    }
}

/// Keyboard equivalents of the pad: just-pressed latches, just-released
/// queues the release.
pub(crate) fn read_key_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut control_events: MessageWriter<ControlCommand>,
) {
    for (key, direction) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            control_events.write(ControlCommand::Hold(direction));
        }
        if keyboard.just_released(key) {
            control_events.write(ControlCommand::Release(direction));
        }
    }
}
