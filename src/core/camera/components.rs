use bevy::prelude::*;

#[derive(Component, Reflect)]
pub struct MainCamera;

/// Distance-only orbit around the origin. Rotation is applied to the globe,
/// not to the camera.
#[derive(Component, Reflect)]
pub struct OrbitCamera {
    pub distance: f32,
    pub target_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub zoom_enabled: bool,
}

#[derive(Component)]
pub struct SceneLight;
