//! Movement domain: floor, wall and probe detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::PLAYER_SIZE;
use crate::movement::{
    BodyContacts, CharacterController, GameLayer, Player, RayProbe, WallProbes,
};

const CONTACT_DISTANCE: f32 = 4.0;

/// Ray origins assume a box body; anything else falls back to the player box.
pub(crate) fn half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => {
            warn_once!("Player collider is not a box; contact rays use the default player size");
            PLAYER_SIZE * 0.5
        }
    }
}

pub(crate) fn detect_floor(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut BodyContacts), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contacts) in &mut query {
        let was_on_floor = contacts.on_floor;
        let half = half_extents(collider);

        // Cast a short ray downward from the feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half.y);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            CONTACT_DISTANCE,
            true,
            &ground_filter,
        );

        contacts.on_floor = hit.is_some();

        if contacts.on_floor != was_on_floor {
            debug!("Floor contact: {}", contacts.on_floor);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut BodyContacts), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut contacts) in &mut query {
        let half = half_extents(collider);
        let origin = transform.translation.truncate();
        let distance = half.x + CONTACT_DISTANCE;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, distance, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, distance, true, &wall_filter);

        // Normal points away from the wall
        let (on_wall, normal) = match (left_hit.is_some(), right_hit.is_some()) {
            (true, false) => (true, Vec2::X),
            (false, true) => (true, Vec2::NEG_X),
            _ => (false, Vec2::ZERO),
        };

        contacts.on_wall = on_wall;
        contacts.wall_normal = normal;
    }
}

/// Recompute hand and foot probes along the current facing.
pub(crate) fn detect_wall_probes(
    spatial_query: SpatialQuery,
    mut query: Query<
        (&Transform, &Collider, &CharacterController, &mut WallProbes),
        With<Player>,
    >,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, controller, mut probes) in &mut query {
        let half = half_extents(collider);
        let center = transform.translation.truncate();
        let direction = if controller.facing().sign() < 0.0 {
            Dir2::NEG_X
        } else {
            Dir2::X
        };

        let cast = |probe: &RayProbe| {
            spatial_query
                .cast_ray(
                    center + Vec2::new(0.0, probe.offset_y),
                    direction,
                    half.x + probe.reach,
                    true,
                    &wall_filter,
                )
                .is_some()
        };

        let hand = cast(&probes.hand);
        let foot = cast(&probes.foot);
        probes.hand.hit = hand;
        probes.foot.hit = foot;
    }
}
