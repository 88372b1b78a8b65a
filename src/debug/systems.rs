//! Debug domain: toggles, gizmos and the info panel.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::state::DebugState;
use super::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::gameplay::GameplaySession;
use crate::movement::{AnimatorFlags, GameLayer, MovementController, Player};

const PROBE_CLEAR: Color = Color::srgb(0.3, 0.9, 0.4);
const PROBE_BLOCKED: Color = Color::srgb(0.9, 0.3, 0.3);
const NORMAL_COLOR: Color = Color::srgb(0.3, 0.6, 1.0);
const NORMAL_LENGTH: f32 = 40.0;

/// F3 toggles gizmos, F4 toggles the info panel
pub(crate) fn toggle_debug_overlays(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("Debug gizmos: {}", debug_state.show_gizmos);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info: {}", debug_state.show_info);
    }
}

/// Draw every teleport sample the controller would try, colored by whether
/// it is clear, plus the sampled ground normal.
pub(crate) fn draw_controller_gizmos(
    mut gizmos: Gizmos,
    spatial_query: SpatialQuery,
    player_query: Query<(Entity, &Transform, &MovementController), With<Player>>,
) {
    for (entity, transform, controller) in &player_query {
        let origin = transform.translation.truncate();
        let tuning = controller.tuning();
        let direction = controller.teleport_direction();
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);
        let probe = Collider::circle(tuning.teleport_clear_radius);

        for fraction in std::iter::once(1.0).chain(tuning.teleport_backoff_fractions()) {
            let center = origin + direction * (tuning.teleport_distance * fraction);
            let blocked = !spatial_query
                .shape_intersections(&probe, center, 0.0, &filter)
                .is_empty();
            let color = if blocked { PROBE_BLOCKED } else { PROBE_CLEAR };
            gizmos.circle_2d(center, tuning.teleport_clear_radius, color);
        }

        if let Some(normal) = controller.ground_normal() {
            gizmos.arrow_2d(origin, origin + normal * NORMAL_LENGTH, NORMAL_COLOR);
        }
    }
}

/// Update the info panel with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    session: Res<GameplaySession>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &MovementController,
            Option<&AnimatorFlags>,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, velocity, controller, animator)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let walking = animator.is_some_and(|a| a.get("isWalking"));
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nAbility: {:?} Walking: {}\nGrounded: {} Jumping: {} Stuck: {} Rolling: {}\nJump buffer: {:.2}\nMove speed: {:.0}\nTeleport cooldown: {:.2}\nScore: {} Dead: {} ({:.2}s)",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            controller.ability(),
            walking,
            controller.is_grounded(),
            controller.is_jumping(),
            controller.is_stuck_to_ground(),
            controller.is_rolling(),
            controller.jump_state().buffer_remaining,
            controller.tuning().move_speed,
            controller.teleport_cooldown(),
            session.score(),
            session.is_dead(),
            session.death_timer()
        );
    }
}
