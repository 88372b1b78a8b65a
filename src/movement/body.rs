//! Movement domain: rigid-body seam between the controller and the physics engine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// The slice of a physics body the movement controller needs.
///
/// The controller never owns the body; it borrows one for the duration of a
/// call. Ray and overlap queries are answered by whoever implements this.
pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);

    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);

    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    /// Rotation around Z in radians.
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, radians: f32);

    /// Normal of the surface directly below, if any is in reach.
    fn ground_normal(&self) -> Option<Vec2>;

    /// Whether a circle at `center` overlaps an obstacle.
    fn is_obstructed(&self, center: Vec2, radius: f32) -> bool;
}

/// Extra reach below the collider's bottom edge when probing for ground.
const GROUND_PROBE_DISTANCE: f32 = 8.0;

/// `CharacterBody` backed by avian2d components of one entity.
pub(crate) struct AvianBody<'a, 'w, 's> {
    pub entity: Entity,
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub transform: &'a mut Transform,
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub half_height: f32,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub fn new(
        entity: Entity,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        transform: &'a mut Transform,
        spatial_query: &'a SpatialQuery<'w, 's>,
        collider: &Collider,
    ) -> Self {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 16.0,
        };

        Self {
            entity,
            velocity,
            gravity_scale,
            transform,
            spatial_query,
            half_height,
        }
    }

    fn obstacle_filter(&self) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([self.entity])
    }
}

impl CharacterBody for AvianBody<'_, '_, '_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn rotation(&self) -> f32 {
        self.transform.rotation.to_euler(EulerRot::XYZ).2
    }

    fn set_rotation(&mut self, radians: f32) {
        self.transform.rotation = Quat::from_rotation_z(radians);
    }

    fn ground_normal(&self) -> Option<Vec2> {
        self.spatial_query
            .cast_ray(
                self.position(),
                Dir2::NEG_Y,
                self.half_height + GROUND_PROBE_DISTANCE,
                true,
                &self.obstacle_filter(),
            )
            .map(|hit| hit.normal)
    }

    fn is_obstructed(&self, center: Vec2, radius: f32) -> bool {
        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &self.obstacle_filter())
            .is_empty()
    }
}
