use crate::texture::Circle;

pub const QUESTION_COUNT: usize = 4;
pub const MAX_OPTION_VALUE: u8 = 4;

// Impact tiers, lower bounds inclusive
pub const HIGH_IMPACT_PERCENT: u32 = 75;
pub const MEDIUM_IMPACT_PERCENT: u32 = 50;

pub const HIGH_SAVINGS: &str = "40-60%";
pub const MEDIUM_SAVINGS: &str = "25-40%";
pub const STARTER_SAVINGS: &str = "10-25%";
pub const WASTE_REDUCTION: &str = "85%";

// Globe texture layout, in canvas pixels
pub const LANDMASSES: [Circle; 3] = [
    Circle { x: 150.0, y: 200.0, radius: 80.0 },
    Circle { x: 350.0, y: 180.0, radius: 60.0 },
    Circle { x: 250.0, y: 350.0, radius: 70.0 },
];
pub const VEGETATION_COUNT: usize = 20;
/// Vegetation radius range, upper bound exclusive
pub const VEGETATION_RADIUS_MIN: f32 = 5.0;
pub const VEGETATION_RADIUS_MAX: f32 = 20.0;

pub const SKIP_DELAY_SECS: f32 = 3.0;
/// Scrolled fraction of the globe page that must be exceeded to open the quiz
pub const SCROLL_THRESHOLD: f32 = 0.7;

/// Opaque identifier handed to the external video player
pub const VIDEO_REFERENCE: &str = "cTjVj2nIBJf";

pub const PASSIVE_ROTATION_PER_FRAME: f32 = 0.003;
pub const FLOAT_FREQUENCY: f32 = 0.5;
pub const FLOAT_AMPLITUDE: f32 = 0.1;

pub const ATMOSPHERE_RADIUS: f32 = 1.1;
pub const ATMOSPHERE_COLOR: [f32; 4] = [0.529, 0.808, 0.922, 0.1]; // #87ceeb

pub const STAR_COUNT: usize = 1000;
pub const STAR_FIELD_EXTENT: f32 = 10.0;
pub const STAR_OPACITY: f32 = 0.6;
