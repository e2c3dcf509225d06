//! Movement domain: the practice room the character spawns into.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Debug, Clone, Copy)]
enum BlockKind {
    Floor,
    Platform,
    Wall,
}

impl BlockKind {
    fn color(self) -> Color {
        match self {
            BlockKind::Floor => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::Platform => Color::srgb(0.5, 0.4, 0.3),
            BlockKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        }
    }
}

fn spawn_block(commands: &mut Commands, kind: BlockKind, size: Vec2, position: Vec2) {
    let mut block = commands.spawn((
        Sprite {
            color: kind.color(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));

    match kind {
        BlockKind::Floor | BlockKind::Platform => {
            block.insert((
                Ground,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
            ));
        }
        BlockKind::Wall => {
            block.insert((
                Wall,
                CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
            ));
        }
    }
}

/// Floor, ledges to walk off, and walls tall enough to slide down.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Ground
    spawn_block(
        &mut commands,
        BlockKind::Floor,
        Vec2::new(800.0, 40.0),
        Vec2::new(0.0, -200.0),
    );

    // Side walls
    for x in [-420.0, 420.0] {
        spawn_block(
            &mut commands,
            BlockKind::Wall,
            Vec2::new(40.0, 500.0),
            Vec2::new(x, 50.0),
        );
    }

    // Ledges for coyote-time practice
    spawn_block(
        &mut commands,
        BlockKind::Platform,
        Vec2::new(150.0, 20.0),
        Vec2::new(-250.0, -90.0),
    );
    spawn_block(
        &mut commands,
        BlockKind::Platform,
        Vec2::new(150.0, 20.0),
        Vec2::new(250.0, 0.0),
    );

    // Pillar for wall slides and wall jumps
    spawn_block(
        &mut commands,
        BlockKind::Wall,
        Vec2::new(30.0, 220.0),
        Vec2::new(-100.0, -70.0),
    );
}
