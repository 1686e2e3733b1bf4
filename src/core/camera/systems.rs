use crate::core::camera::components::{MainCamera, OrbitCamera, SceneLight};
use crate::core::camera::logic::damp_distance;
use bevy::camera::{PerspectiveProjection, Projection};
use bevy::light::{DirectionalLight, PointLight};
use bevy::log::info;
use bevy::math::{EulerRot, Quat, Vec3};
use bevy::prelude::*;
use std::f32::consts::PI;

const GLOBE_LIGHT_BLUE: Color = Color::srgb(0.290, 0.565, 0.886);

pub fn spawn_camera(mut commands: Commands) {
    let globes = ecogen::get_config().globes;
    let distance = globes.home_camera_distance;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        OrbitCamera {
            distance,
            target_distance: distance,
            min_distance: globes.min_camera_distance,
            max_distance: globes.max_camera_distance,
            damping: globes.damping,
            zoom_enabled: false,
        },
    ));

    commands.spawn((
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -PI / 4.)),
        DirectionalLight {
            illuminance: 2_000.0,
            ..default()
        },
        SceneLight,
    ));
    commands.spawn((
        Transform::from_xyz(10.0, 10.0, 10.0),
        PointLight {
            intensity: 2_000_000.0,
            range: 40.0,
            ..default()
        },
        SceneLight,
    ));
    commands.spawn((
        Transform::from_xyz(-10.0, -10.0, -10.0),
        PointLight {
            color: GLOBE_LIGHT_BLUE,
            intensity: 750_000.0,
            range: 40.0,
            ..default()
        },
        SceneLight,
    ));

    info!("Camera spawned");
}

fn apply_preset(
    camera_q: &mut Query<(&mut OrbitCamera, &mut Projection, &mut Transform), With<MainCamera>>,
    distance: f32,
    fov_degrees: f32,
    zoom_enabled: bool,
) {
    let Ok((mut orbit, mut projection, mut transform)) = camera_q.single_mut() else {
        return;
    };
    orbit.distance = distance;
    orbit.target_distance = distance;
    orbit.zoom_enabled = zoom_enabled;
    if let Projection::Perspective(perspective) = projection.as_mut() {
        perspective.fov = fov_degrees.to_radians();
    }
    *transform = Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y);
}

pub fn apply_home_preset(
    mut camera_q: Query<(&mut OrbitCamera, &mut Projection, &mut Transform), With<MainCamera>>,
) {
    let distance = ecogen::get_config().globes.home_camera_distance;
    apply_preset(&mut camera_q, distance, 60.0, false);
}

pub fn apply_interactive_preset(
    mut camera_q: Query<(&mut OrbitCamera, &mut Projection, &mut Transform), With<MainCamera>>,
) {
    let distance = ecogen::get_config().globes.interactive_camera_distance;
    apply_preset(&mut camera_q, distance, 75.0, true);
}

pub fn smooth_orbit_distance(
    time: Res<Time>,
    mut camera_q: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };
    if orbit.distance == orbit.target_distance {
        return;
    }

    let dt = time.delta_secs();
    orbit.distance = damp_distance(orbit.distance, orbit.target_distance, orbit.damping, dt);
    let dir = transform.translation.normalize_or(Vec3::Z);
    transform.translation = dir * orbit.distance;
}
