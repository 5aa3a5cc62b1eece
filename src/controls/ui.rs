//! Controls domain: the on-screen six-direction control pad.

use bevy::prelude::*;

use crate::controls::{ControlButton, Direction};

/// Marker for the control pad root.
#[derive(Component, Debug)]
pub struct ControlPadUI;

pub(crate) const IDLE_BUTTON_COLOR: Color = Color::srgb(0.12, 0.12, 0.18);
pub(crate) const HOVERED_BUTTON_COLOR: Color = Color::srgb(0.18, 0.18, 0.25);
pub(crate) const PRESSED_BUTTON_COLOR: Color = Color::srgb(0.22, 0.38, 0.25);

pub(crate) fn spawn_control_pad(mut commands: Commands) {
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    commands
        .spawn((
            ControlPadUI,
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                padding: UiRect::horizontal(Val::Px(40.0)),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexEnd,
                ..default()
            },
        ))
        .with_children(|parent| {
            // Altitude pair on the left
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|column| {
                    spawn_pad_button(column, Direction::Up, text_color);
                    spawn_pad_button(column, Direction::Down, text_color);
                });

            // Planar pad on the right
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|pad| {
                    spawn_pad_button(pad, Direction::Forward, text_color);
                    pad.spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(72.0),
                        ..default()
                    })
                    .with_children(|row| {
                        spawn_pad_button(row, Direction::Left, text_color);
                        spawn_pad_button(row, Direction::Right, text_color);
                    });
                    spawn_pad_button(pad, Direction::Backward, text_color);
                });
        });

    info!("Control pad shown");
}

fn spawn_pad_button(parent: &mut ChildSpawnerCommands, direction: Direction, text_color: Color) {
    parent
        .spawn((
            ControlButton {
                direction,
                engaged: false,
            },
            Button,
            Node {
                width: Val::Px(84.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
            BackgroundColor(IDLE_BUTTON_COLOR),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(direction.label()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}

pub(crate) fn cleanup_control_pad(
    mut commands: Commands,
    query: Query<Entity, With<ControlPadUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
