use crate::config::TextureConfig;
use crate::constants::{LANDMASSES, VEGETATION_COUNT, VEGETATION_RADIUS_MAX, VEGETATION_RADIUS_MIN};
use crate::error::{EcoError, Result};
use crate::tools::{expand_seed64, generate_seed8};
use image::{Rgba, RgbaImage};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, 255])
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("`{value}` is not a #rrggbb color"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A filled circle painted onto the texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl Patch {
    pub fn from_circle(circle: Circle, color: Rgb) -> Self {
        Self {
            x: circle.x,
            y: circle.y,
            radius: circle.radius,
            color,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: (f32, f32),
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Color at `distance` from the center. Past the radius the last stop is
    /// repeated, before the first offset the first stop is.
    pub fn color_at(&self, distance: f32) -> Rgb {
        let Some(first) = self.stops.first() else {
            return Rgb::new(0, 0, 0);
        };
        let t = if self.radius > 0.0 {
            (distance / self.radius).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let mut previous = first;
        for stop in &self.stops {
            if t <= stop.offset {
                let span = stop.offset - previous.offset;
                if span <= f32::EPSILON {
                    return stop.color;
                }
                return previous.color.lerp(stop.color, (t - previous.offset) / span);
            }
            previous = stop;
        }
        previous.color
    }
}

/// Everything that gets painted, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureLayout {
    pub width: u32,
    pub height: u32,
    pub gradient: RadialGradient,
    pub landmasses: Vec<Patch>,
    pub vegetation: Vec<Patch>,
}

impl TextureLayout {
    pub fn patches(&self) -> impl Iterator<Item = &Patch> {
        self.landmasses.iter().chain(self.vegetation.iter())
    }
}

pub struct GlobeTexture {
    /// Seed the vegetation was drawn from, if it came from [`TextureGenerator::generate`]
    pub seed: Option<u32>,
    pub layout: TextureLayout,
    pub image: RgbaImage,
}

/// Procedural "earth-like" sphere map: ocean gradient, three fixed
/// landmasses and randomly scattered vegetation.
///
/// Output is not deterministic across calls unless the caller supplies a
/// seeded rng through [`TextureGenerator::generate_with`].
#[derive(Debug, Clone)]
pub struct TextureGenerator {
    config: TextureConfig,
}

impl TextureGenerator {
    pub fn new(config: TextureConfig) -> Self {
        Self { config }
    }

    pub fn from_config() -> Self {
        Self::new(crate::get_config().texture)
    }

    pub fn generate(&self) -> Result<GlobeTexture> {
        let seed = generate_seed8();
        debug!("Generating globe texture with seed {seed}");
        let mut rng = StdRng::seed_from_u64(expand_seed64(seed));
        let mut texture = self.generate_with(&mut rng)?;
        texture.seed = Some(seed);
        Ok(texture)
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<GlobeTexture> {
        let layout = self.plan_layout(rng)?;
        let image = paint(&layout)?;
        debug!(
            "Painted {}x{} globe texture with {} landmasses and {} vegetation patches",
            layout.width,
            layout.height,
            layout.landmasses.len(),
            layout.vegetation.len()
        );
        Ok(GlobeTexture {
            seed: None,
            layout,
            image,
        })
    }

    pub fn plan_layout<R: Rng>(&self, rng: &mut R) -> Result<TextureLayout> {
        let size = self.config.resolution;
        if size == 0 {
            return Err(EcoError::ResourceUnavailable(
                "texture resolution is zero".to_string(),
            ));
        }
        let extent = size as f32;

        let gradient = RadialGradient {
            center: (extent / 2.0, extent / 2.0),
            radius: extent / 2.0,
            stops: self.config.gradient.clone(),
        };

        let landmasses = LANDMASSES
            .iter()
            .map(|circle| Patch::from_circle(*circle, self.config.landmass_color))
            .collect();

        let vegetation = (0..VEGETATION_COUNT)
            .map(|_| Patch {
                x: rng.random_range(0.0..extent),
                y: rng.random_range(0.0..extent),
                radius: rng.random_range(VEGETATION_RADIUS_MIN..VEGETATION_RADIUS_MAX),
                color: self.config.vegetation_color,
            })
            .collect();

        Ok(TextureLayout {
            width: size,
            height: size,
            gradient,
            landmasses,
            vegetation,
        })
    }
}

/// Rasterises a layout. Pixels are sampled at their centers.
pub fn paint(layout: &TextureLayout) -> Result<RgbaImage> {
    let mut image = allocate_canvas(layout.width, layout.height)?;

    let (cx, cy) = layout.gradient.center;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        *pixel = layout
            .gradient
            .color_at((dx * dx + dy * dy).sqrt())
            .to_rgba();
    }

    for patch in layout.patches() {
        fill_patch(&mut image, patch);
    }

    Ok(image)
}

fn allocate_canvas(width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(EcoError::ResourceUnavailable(format!(
            "{width}x{height} canvas has no pixels"
        )));
    }
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| {
            EcoError::ResourceUnavailable(format!("{width}x{height} canvas is too large"))
        })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| EcoError::ResourceUnavailable(e.to_string()))?;
    buffer.resize(len, 0);

    RgbaImage::from_raw(width, height, buffer).ok_or_else(|| {
        EcoError::ResourceUnavailable(format!("{width}x{height} canvas buffer mismatch"))
    })
}

fn fill_patch(image: &mut RgbaImage, patch: &Patch) {
    let (width, height) = image.dimensions();
    let x0 = (patch.x - patch.radius).floor().max(0.0) as u32;
    let y0 = (patch.y - patch.radius).floor().max(0.0) as u32;
    let x1 = ((patch.x + patch.radius).ceil().max(0.0) as u32).min(width);
    let y1 = ((patch.y + patch.radius).ceil().max(0.0) as u32).min(height);

    let color = patch.color.to_rgba();
    for y in y0..y1 {
        for x in x0..x1 {
            if patch.contains(x as f32 + 0.5, y as f32 + 0.5) {
                image.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcoGenConfig;
    use rstest::rstest;

    fn generator() -> TextureGenerator {
        TextureGenerator::new(EcoGenConfig::default().texture)
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(123_456)]
    fn layout_has_fixed_landmasses_and_bounded_vegetation(#[case] seed: u64) {
        let texture = generator().generate_with(&mut seeded(seed)).unwrap();
        let layout = &texture.layout;

        assert_eq!(texture.image.dimensions(), (512, 512));
        assert_eq!(layout.landmasses.len(), 3);
        let centers: Vec<_> = layout
            .landmasses
            .iter()
            .map(|p| (p.x, p.y, p.radius))
            .collect();
        assert_eq!(
            centers,
            vec![(150.0, 200.0, 80.0), (350.0, 180.0, 60.0), (250.0, 350.0, 70.0)]
        );

        assert_eq!(layout.vegetation.len(), 20);
        for patch in &layout.vegetation {
            assert!((0.0..512.0).contains(&patch.x), "x was {}", patch.x);
            assert!((0.0..512.0).contains(&patch.y), "y was {}", patch.y);
            assert!((5.0..=20.0).contains(&patch.radius), "radius was {}", patch.radius);
            assert_eq!(patch.color, Rgb::new(0x4a, 0x7c, 0x59));
        }
    }

    #[test]
    fn config_file_cannot_change_the_layout_counts() {
        let mut text = toml::to_string_pretty(&EcoGenConfig::default()).unwrap();
        text = text.replacen(
            "[texture]\n",
            "[texture]\nvegetation_count = 2\nvegetation_radius_min = 30.0\nvegetation_radius_max = 90.0\n",
            1,
        );
        text.push_str("\n[[texture.landmasses]]\nx = 1.0\ny = 1.0\nradius = 1.0\n");
        let config: EcoGenConfig = toml::from_str(&text).unwrap();

        let layout = TextureGenerator::new(config.texture)
            .plan_layout(&mut seeded(11))
            .unwrap();

        assert_eq!(layout.landmasses.len(), LANDMASSES.len());
        assert_eq!(layout.vegetation.len(), VEGETATION_COUNT);
        assert!(layout
            .vegetation
            .iter()
            .all(|p| (VEGETATION_RADIUS_MIN..=VEGETATION_RADIUS_MAX).contains(&p.radius)));
    }

    #[test]
    fn landmass_centers_are_painted_with_the_palette() {
        let texture = generator().generate_with(&mut seeded(3)).unwrap();
        let land = Rgb::new(0x2d, 0x50, 0x16).to_rgba();
        let green = Rgb::new(0x4a, 0x7c, 0x59).to_rgba();

        for (x, y) in [(150, 200), (350, 180), (250, 350)] {
            let pixel = *texture.image.get_pixel(x, y);
            assert!(pixel == land || pixel == green, "pixel at ({x}, {y}) was {pixel:?}");
        }
    }

    #[test]
    fn corners_fall_back_to_the_outer_ocean_stop() {
        let mut layout = generator().plan_layout(&mut seeded(0)).unwrap();
        layout.vegetation.clear();
        let image = paint(&layout).unwrap();

        let deep = Rgb::new(0x1e, 0x3a, 0x5f).to_rgba();
        assert_eq!(*image.get_pixel(0, 0), deep);
        assert_eq!(*image.get_pixel(511, 511), deep);
    }

    #[test]
    fn same_seed_paints_the_same_image() {
        let a = generator().generate_with(&mut seeded(99)).unwrap();
        let b = generator().generate_with(&mut seeded(99)).unwrap();
        let c = generator().generate_with(&mut seeded(100)).unwrap();

        assert_eq!(a.image, b.image);
        assert_ne!(a.layout.vegetation, c.layout.vegetation);
    }

    #[test]
    fn unseeded_generation_records_its_seed() {
        let texture = generator().generate().unwrap();
        assert!(texture.seed.is_some());
        assert_eq!(texture.layout.vegetation.len(), 20);
    }

    #[test]
    fn zero_resolution_is_resource_unavailable() {
        let mut config = EcoGenConfig::default().texture;
        config.resolution = 0;
        let result = TextureGenerator::new(config).generate_with(&mut seeded(1));
        assert!(matches!(result, Err(EcoError::ResourceUnavailable(_))));
    }

    #[rstest]
    #[case(0.0, Rgb::new(0x4a, 0x90, 0xe2))]
    #[case(0.7 * 256.0, Rgb::new(0x2d, 0x5a, 0xa0))]
    #[case(256.0, Rgb::new(0x1e, 0x3a, 0x5f))]
    #[case(400.0, Rgb::new(0x1e, 0x3a, 0x5f))]
    fn gradient_hits_its_stops(#[case] distance: f32, #[case] expected: Rgb) {
        let layout = generator().plan_layout(&mut seeded(1)).unwrap();
        assert_eq!(layout.gradient.color_at(distance), expected);
    }

    #[test]
    fn gradient_interpolates_between_stops() {
        let layout = generator().plan_layout(&mut seeded(1)).unwrap();
        let halfway = layout.gradient.color_at(0.35 * 256.0);
        // #4a90e2 -> #2d5aa0 at t = 0.5, rounding may land on either neighbour
        for (got, expected) in halfway.0.iter().zip([59.5_f32, 117.0, 193.0]) {
            assert!((*got as f32 - expected).abs() <= 1.0, "{halfway:?}");
        }
    }

    #[rstest]
    #[case("#4a90e2", Some(Rgb::new(0x4a, 0x90, 0xe2)))]
    #[case("#FFFFFF", Some(Rgb::new(255, 255, 255)))]
    #[case("4a90e2", None)]
    #[case("#4a90e", None)]
    #[case("#zzzzzz", None)]
    fn parses_hex_colors(#[case] input: &str, #[case] expected: Option<Rgb>) {
        assert_eq!(Rgb::from_hex(input), expected);
    }

    #[test]
    fn patch_clipped_at_canvas_edge_does_not_panic() {
        let mut image = allocate_canvas(16, 16).unwrap();
        let patch = Patch {
            x: 15.5,
            y: -3.0,
            radius: 6.0,
            color: Rgb::new(1, 2, 3),
        };
        fill_patch(&mut image, &patch);
        assert_eq!(*image.get_pixel(15, 0), Rgb::new(1, 2, 3).to_rgba());
    }
}
