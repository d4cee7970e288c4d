//! UI module - score and game-over labels

use bevy::prelude::*;
use bevy::sprite::Anchor;

use breakout::render::{DrawCommand, TextAlign};
use breakout::Frame;

use crate::game::visuals::{depth, to_color, to_world};
use crate::game::{CurrentFrame, FrameSet};

/// Descender depth below the baseline, relative to font size
const DESCENT: f32 = 0.2;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            present_text
                .in_set(FrameSet::Present)
                .run_if(resource_exists_and_changed::<CurrentFrame>),
        );
    }
}

/// Marker for label entities
#[derive(Component)]
struct FrameText;

/// Anchor matching the frame's alignment, measured from the bottom of the text box.
fn text_anchor(align: TextAlign) -> Anchor {
    match align {
        TextAlign::Left => Anchor::BottomLeft,
        TextAlign::Center => Anchor::BottomCenter,
    }
}

/// Text commands with their index in the frame.
fn text_commands(frame: &Frame) -> Vec<(usize, DrawCommand)> {
    frame
        .commands()
        .iter()
        .enumerate()
        .filter(|(_, command)| matches!(command, DrawCommand::Text { .. }))
        .map(|(index, command)| (index, command.clone()))
        .collect()
}

/// Label placement: text box bottom under the baseline, at the command's depth.
fn label_translation(index: usize, position: breakout::Vec2, size: f32, frame: &Frame) -> Vec3 {
    text_origin(position, size, frame).extend(depth(index))
}

/// World position of the text box bottom for a baseline at `position`.
fn text_origin(position: breakout::Vec2, size: f32, frame: &Frame) -> Vec2 {
    to_world(breakout::Vec2::new(position.x, position.y + size * DESCENT), frame)
}

/// Respawn labels when the frame's text commands change.
fn present_text(
    mut commands: Commands,
    frame: Res<CurrentFrame>,
    mut shown: Local<Vec<(usize, DrawCommand)>>,
    labels: Query<Entity, With<FrameText>>,
) {
    let frame = &frame.0;
    let wanted = text_commands(frame);

    if *shown == wanted {
        return;
    }

    for entity in labels.iter() {
        commands.entity(entity).despawn();
    }

    for (index, command) in &wanted {
        let DrawCommand::Text { text, position, size, color, align } = command else {
            continue;
        };

        commands.spawn((
            FrameText,
            Text2d::new(text.clone()),
            TextFont {
                font_size: *size,
                ..default()
            },
            TextColor(to_color(*color)),
            text_anchor(*align),
            Transform::from_translation(label_translation(*index, *position, *size, frame)),
        ));
    }

    *shown = wanted;
}
