//! Visuals - frame shapes to sprites and meshes
//!
//! Every command is placed at a depth taken from its position in the frame,
//! so the screen keeps the frame's back-to-front order.

use std::collections::HashMap;

use bevy::prelude::*;

use breakout::render::{DrawCommand, Fill, Rgb};
use breakout::{Frame, Rect};

use super::CurrentFrame;

/// Depth between consecutive draw commands
pub const Z_STEP: f32 = 0.01;

/// Outline thickness in pixels
const STROKE: f32 = 1.0;

/// Radius of the inner disc of a radially shaded circle, relative to the full radius
const RADIAL_CORE: f32 = 0.6;

// ============================================================================
// COMPONENTS & RESOURCES
// ============================================================================

/// Marker for entities spawned from the current frame
#[derive(Component)]
pub struct FrameShape;

/// Shared mesh and per-color materials for circles
#[derive(Resource)]
pub struct ShapeAssets {
    circle: Handle<Mesh>,
    materials: HashMap<Rgb, Handle<ColorMaterial>>,
}

impl ShapeAssets {
    fn material(
        &mut self,
        color: Rgb,
        materials: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color)
            .or_insert_with(|| materials.add(ColorMaterial::from(to_color(color))))
            .clone()
    }
}

pub fn setup_shape_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(ShapeAssets {
        circle: meshes.add(Circle::new(1.0)),
        materials: HashMap::new(),
    });
}

// ============================================================================
// CONVERSIONS
// ============================================================================

pub fn to_color(color: Rgb) -> Color {
    let [r, g, b] = color.to_unit();
    Color::srgb(r, g, b)
}

/// Depth of the command at `index` in a frame.
pub fn depth(index: usize) -> f32 {
    index as f32 * Z_STEP
}

/// Screen point (top-left origin, Y down) to world point (centered, Y up).
pub fn to_world(point: breakout::Vec2, frame: &Frame) -> Vec2 {
    Vec2::new(point.x - frame.width / 2.0, frame.height / 2.0 - point.y)
}

/// Discs approximating a circle fill: (color, radius, depth offset), back to front.
pub fn circle_layers(fill: &Fill, radius: f32) -> Vec<(Rgb, f32, f32)> {
    match *fill {
        Fill::RadialGradient { inner, outer } => vec![
            (outer, radius, 0.0),
            (inner, radius * RADIAL_CORE, Z_STEP / 2.0),
        ],
        _ => vec![(fill.average(), radius, 0.0)],
    }
}

/// Four one-pixel bands tracing the inside of `rect`: top, bottom, left, right.
pub fn outline_edges(rect: &Rect) -> [Rect; 4] {
    [
        Rect::new(rect.x, rect.y, rect.w, STROKE),
        Rect::new(rect.x, rect.bottom() - STROKE, rect.w, STROKE),
        Rect::new(rect.x, rect.y, STROKE, rect.h),
        Rect::new(rect.right() - STROKE, rect.y, STROKE, rect.h),
    ]
}

// ============================================================================
// PRESENTATION
// ============================================================================

fn spawn_rect(commands: &mut Commands, rect: &Rect, color: Rgb, z: f32, frame: &Frame) {
    commands.spawn((
        FrameShape,
        Sprite {
            color: to_color(color),
            custom_size: Some(Vec2::new(rect.w, rect.h)),
            ..default()
        },
        Transform::from_translation(to_world(rect.center(), frame).extend(z)),
    ));
}

/// Replace the previous frame's shapes with the current frame's.
pub fn present_shapes(
    mut commands: Commands,
    frame: Res<CurrentFrame>,
    mut assets: ResMut<ShapeAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    shapes: Query<Entity, With<FrameShape>>,
) {
    for entity in shapes.iter() {
        commands.entity(entity).despawn();
    }

    let frame = &frame.0;
    for (index, command) in frame.commands().iter().enumerate() {
        let z = depth(index);

        match command {
            DrawCommand::FillRect { rect, fill } => {
                spawn_rect(&mut commands, rect, fill.average(), z, frame);
            }
            DrawCommand::StrokeRect { rect, color } => {
                for edge in outline_edges(rect) {
                    spawn_rect(&mut commands, &edge, *color, z, frame);
                }
            }
            DrawCommand::FillCircle { center, radius, fill } => {
                let position = to_world(*center, frame);
                for (color, layer_radius, dz) in circle_layers(fill, *radius) {
                    commands.spawn((
                        FrameShape,
                        Mesh2d(assets.circle.clone()),
                        MeshMaterial2d(assets.material(color, &mut materials)),
                        Transform::from_translation(position.extend(z + dz))
                            .with_scale(Vec3::splat(layer_radius)),
                    ));
                }
            }
            // Labels belong to the UI
            DrawCommand::Text { .. } => {}
        }
    }
}
