use bevy::prelude::*;
use ecogen::globe::{GlobeParams, SurfaceDistortion};

/// Root of one EcoGlobe. Children hold the surface and atmosphere meshes.
#[derive(Component)]
pub struct EcoGlobe {
    pub params: GlobeParams,
    pub yaw: f32,
}

/// Undistorted unit-sphere vertices, rewritten every frame through the
/// distortion field.
#[derive(Component)]
pub struct GlobeSurface {
    pub base_positions: Vec<[f32; 3]>,
    pub distortion: SurfaceDistortion,
}

#[derive(Component)]
pub struct Atmosphere;

#[derive(Component)]
pub struct Starfield;
