use crate::constants::*;
use glam::Vec3;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spatial frequency of the surface wobble on the unit sphere
pub const DISTORT_FREQUENCY: f32 = 1.5;

/// Parameters handed to the rendering layer for one globe instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobeParams {
    pub is_interactive: bool,
    pub scale: f32,
    /// Surface noise amplitude, relative to the unit radius
    pub distort: f32,
    /// Animation rate of the surface noise
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobePose {
    pub yaw: f32,
    pub float_offset: f32,
}

/// Per-frame motion: passive spin unless the user is steering the globe,
/// plus a slow vertical bob.
pub fn advance_pose(params: &GlobeParams, yaw: f32, elapsed_secs: f32) -> GlobePose {
    let yaw = if params.is_interactive {
        yaw
    } else {
        yaw + PASSIVE_ROTATION_PER_FRAME
    };
    GlobePose {
        yaw,
        float_offset: (elapsed_secs * FLOAT_FREQUENCY).sin() * FLOAT_AMPLITUDE,
    }
}

#[derive(Debug, Clone)]
pub struct SurfaceDistortion {
    perlin: Perlin,
    frequency: f32,
    amplitude: f32,
    speed: f32,
}

impl SurfaceDistortion {
    pub fn new(seed: u32, params: &GlobeParams) -> Self {
        Self {
            perlin: Perlin::new(seed),
            frequency: DISTORT_FREQUENCY,
            amplitude: params.distort,
            speed: params.speed,
        }
    }

    /// Radius of the unit sphere along `dir` at time `elapsed_secs`.
    pub fn radius_at(&self, dir: Vec3, elapsed_secs: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 1.0;
        }
        let p = dir * self.frequency;
        let t = elapsed_secs * self.speed;
        let n = self
            .perlin
            .get([p.x as f64, p.y as f64, (p.z + t) as f64]) as f32;
        1.0 + n.clamp(-1.0, 1.0) * self.amplitude
    }

    /// Writes the displaced copy of `base` (unit-sphere vertices) into `out`.
    pub fn displace(&self, base: &[[f32; 3]], elapsed_secs: f32, out: &mut [[f32; 3]]) {
        for (src, dst) in base.iter().zip(out.iter_mut()) {
            let v = Vec3::from_array(*src);
            let dir = v.normalize_or_zero();
            *dst = (dir * self.radius_at(dir, elapsed_secs) * v.length()).to_array();
        }
    }
}

/// Dust/star points scattered uniformly in a cube of edge `extent`.
pub fn star_positions<R: Rng>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * extent,
                (rng.random::<f32>() - 0.5) * extent,
                (rng.random::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}
