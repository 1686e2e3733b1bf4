use crate::globe::components::*;
use crate::helpers::mesh::{point_cloud_mesh, positions_of};
use bevy::asset::RenderAssetUsages;
use bevy::input::mouse::MouseMotion;
use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, Face, TextureDimension, TextureFormat};
use ecogen::constants::*;
use ecogen::config::GlobeConfig;
use ecogen::globe::{GlobeParams, SurfaceDistortion, advance_pose, star_positions};
use ecogen::texture::{GlobeTexture, TextureGenerator};
use ecogen::tools::generate_seed8;

/// Flat ocean tone used when the texture cannot be produced
const FALLBACK_COLOR: Color = Color::srgb(0.176, 0.353, 0.627);
const DRAG_SENSITIVITY: f32 = 0.005;

fn globe_image(texture: &GlobeTexture) -> Image {
    let (width, height) = texture.image.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        texture.image.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn globe_material(
    texture: ecogen::Result<GlobeTexture>,
    images: &mut Assets<Image>,
) -> StandardMaterial {
    match texture {
        Ok(texture) => StandardMaterial {
            base_color_texture: Some(images.add(globe_image(&texture))),
            perceptual_roughness: 0.8,
            ..default()
        },
        Err(e) => {
            warn!("Globe texture unavailable, using flat material: {e}");
            StandardMaterial {
                base_color: FALLBACK_COLOR,
                perceptual_roughness: 0.8,
                ..default()
            }
        }
    }
}

/// Re-reads the config file so edits show up on the next globe.
pub fn reload_globe_config() -> GlobeConfig {
    if let Err(e) = ecogen::reload_config() {
        debug!("Keeping cached config: {e}");
    }
    ecogen::get_config().globes
}

/// Spawns the globe, its atmosphere and the starfield for one page.
pub fn spawn_globe(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    params: GlobeParams,
) -> Entity {
    let texture = TextureGenerator::from_config().generate();
    let surface_material = materials.add(globe_material(texture, images));

    let sphere = Sphere::new(1.0).mesh().uv(64, 64);
    let base_positions = positions_of(&sphere);
    let distortion = SurfaceDistortion::new(generate_seed8(), &params);

    let [r, g, b, a] = ATMOSPHERE_COLOR;
    let atmosphere_material = materials.add(StandardMaterial {
        base_color: Color::srgba(r, g, b, a),
        alpha_mode: AlphaMode::Blend,
        cull_mode: Some(Face::Front),
        unlit: true,
        ..default()
    });

    let globe = commands
        .spawn((
            Transform::from_scale(Vec3::splat(params.scale)),
            Visibility::Visible,
            EcoGlobe { params, yaw: 0.0 },
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(sphere)),
                MeshMaterial3d(surface_material),
                Transform::default(),
                GlobeSurface {
                    base_positions,
                    distortion,
                },
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(ATMOSPHERE_RADIUS).mesh().uv(32, 32))),
                MeshMaterial3d(atmosphere_material),
                Transform::default(),
                Atmosphere,
            ));
        })
        .id();

    let stars = star_positions(&mut rand::rng(), STAR_COUNT, STAR_FIELD_EXTENT);
    commands.spawn((
        Mesh3d(meshes.add(point_cloud_mesh(&stars))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, STAR_OPACITY),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
    ));

    info!(
        "Globe spawned (interactive: {}, scale: {})",
        params.is_interactive, params.scale
    );
    globe
}

pub fn animate_globe(time: Res<Time>, mut globe_q: Query<(&mut Transform, &mut EcoGlobe)>) {
    let elapsed = time.elapsed_secs();
    for (mut transform, mut globe) in globe_q.iter_mut() {
        let pose = advance_pose(&globe.params, globe.yaw, elapsed);
        globe.yaw = pose.yaw;
        transform.rotation = Quat::from_rotation_y(pose.yaw);
        transform.translation.y = pose.float_offset;
    }
}

pub fn distort_globe_surface(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    surface_q: Query<(&Mesh3d, &GlobeSurface)>,
) {
    let elapsed = time.elapsed_secs();
    for (mesh3d, surface) in surface_q.iter() {
        let Some(mesh) = meshes.get_mut(&mesh3d.0) else {
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        else {
            continue;
        };
        surface
            .distortion
            .displace(&surface.base_positions, elapsed, positions);
        mesh.compute_smooth_normals();
    }
}

/// Left drag spins the interactive globe around its vertical axis.
pub fn drag_rotate_globe(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut globe_q: Query<&mut EcoGlobe>,
) {
    let dragged: f32 = mouse_motion.read().map(|motion| motion.delta.x).sum();
    if !mouse_input.pressed(MouseButton::Left) || dragged == 0.0 {
        return;
    }
    for mut globe in globe_q.iter_mut() {
        if globe.params.is_interactive {
            globe.yaw += dragged * DRAG_SENSITIVITY;
        }
    }
}

pub fn despawn_globes(
    mut commands: Commands,
    globe_q: Query<Entity, Or<(With<EcoGlobe>, With<Starfield>)>>,
) {
    for entity in globe_q.iter() {
        commands.entity(entity).despawn();
    }
}
