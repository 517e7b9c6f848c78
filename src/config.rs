//! Cloth configuration.

use crate::collider::Pole;
use crate::float::Float;
use crate::material::MaterialConfig;
use crate::vec::Vec3;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// Everything needed to mount a cloth.
///
/// Numeric values are trusted: `particle_mass` must be positive, `damping`
/// must lie in `(0, 1)`, both segment counts must be at least 1 and the
/// timestep must be positive. None of this is checked or clamped.
///
/// # Builder Pattern
/// ```
/// use clothy::config::ClothConfig;
/// use clothy::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_segments(12, 20)
///     .with_initial_position(Vec3::new(0.0, 120.0, 0.0))
///     .with_wind_range(10.0, 80.0);
/// ```
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    /// World width of the cloth. Default: 250.
    pub cloth_width: F,
    /// Columns of cells. Default: 9.
    pub width_segments: usize,
    /// Rows of cells. Default: 16.
    pub height_segments: usize,
    /// Fraction of implied velocity lost per step. Default: 0.005.
    pub damping: F,
    /// Mass of every particle. Default: 0.1.
    pub particle_mass: F,
    /// Gravitational acceleration. Default: 100.
    pub gravity: F,
    /// Fixed step length in seconds. Default: 0.018.
    pub timestep: F,
    /// Weakest wind. Default: 24.
    pub min_wind: F,
    /// Strongest wind. Default: 228.
    pub max_wind: F,
    /// Where the top-centre of the cloth hangs. Default: origin.
    pub initial_position: Vec3<F>,
    /// Explicit pins. Default: one per row along the pole-side edge.
    pub pin_indices: Option<AllocVec<usize>>,
    /// Pole radius. Default: 2.5.
    pub obstacle_radius: F,
    /// Sideways offset of the pinned edge. Default: the pole radius.
    pub pin_standoff: Option<F>,
    /// Pole length beyond the cloth's height. Default: 400.
    pub pole_extra_height: F,
    /// Pole cross-section. Default: the pole diameter.
    pub pole_thickness: Option<F>,
    /// Texture for the cloth. Default: none (flat white).
    pub texture_source: Option<String>,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            cloth_width: F::from_f32(250.0),
            width_segments: 9,
            height_segments: 16,
            damping: F::from_f32(0.005),
            particle_mass: F::from_f32(0.1),
            gravity: F::from_f32(100.0),
            timestep: F::from_f32(0.018),
            min_wind: F::from_f32(24.0),
            max_wind: F::from_f32(228.0),
            initial_position: Vec3::new(F::zero(), F::zero(), F::zero()),
            pin_indices: None,
            obstacle_radius: F::from_f32(2.5),
            pin_standoff: None,
            pole_extra_height: F::from_f32(400.0),
            pole_thickness: None,
            texture_source: None,
        }
    }

    pub fn with_cloth_width(mut self, width: F) -> Self {
        self.cloth_width = width;
        self
    }

    pub fn with_segments(mut self, width_segments: usize, height_segments: usize) -> Self {
        self.width_segments = width_segments;
        self.height_segments = height_segments;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_wind_range(mut self, min: F, max: F) -> Self {
        self.min_wind = min;
        self.max_wind = max;
        self
    }

    pub fn with_initial_position(mut self, position: Vec3<F>) -> Self {
        self.initial_position = position;
        self
    }

    pub fn with_pin_indices(mut self, indices: AllocVec<usize>) -> Self {
        self.pin_indices = Some(indices);
        self
    }

    pub fn with_obstacle_radius(mut self, radius: F) -> Self {
        self.obstacle_radius = radius;
        self
    }

    pub fn with_pin_standoff(mut self, standoff: F) -> Self {
        self.pin_standoff = Some(standoff);
        self
    }

    pub fn with_pole_extra_height(mut self, extra: F) -> Self {
        self.pole_extra_height = extra;
        self
    }

    pub fn with_pole_thickness(mut self, thickness: F) -> Self {
        self.pole_thickness = Some(thickness);
        self
    }

    pub fn with_texture_source(mut self, source: impl Into<String>) -> Self {
        self.texture_source = Some(source.into());
        self
    }

    /// Spacing between neighbouring particles at rest.
    pub fn rest_distance(&self) -> F {
        self.cloth_width / F::from_usize(self.width_segments)
    }

    pub fn cloth_height(&self) -> F {
        self.rest_distance() * F::from_usize(self.height_segments)
    }

    pub fn drag(&self) -> F {
        F::one() - self.damping
    }

    pub fn timestep_sq(&self) -> F {
        self.timestep * self.timestep
    }

    /// World position of the cloth's top-left corner.
    pub fn grid_offset(&self) -> Vec3<F> {
        let p = self.initial_position;
        Vec3::new(p.x - self.cloth_width * F::half(), p.y, p.z)
    }

    pub fn standoff(&self) -> F {
        self.pin_standoff.unwrap_or(self.obstacle_radius)
    }

    pub fn pole_thickness(&self) -> F {
        self.pole_thickness.unwrap_or(self.obstacle_radius * F::two())
    }

    /// The pole stands just past the right edge, hanging down from the
    /// cloth's top.
    pub fn pole(&self) -> Pole<F> {
        let p = self.initial_position;
        let height = self.cloth_height() + self.pole_extra_height;
        let center = Vec3::new(
            p.x + self.cloth_width * F::half() + self.standoff(),
            p.y - height * F::half(),
            p.z,
        );
        Pole::new(center, self.obstacle_radius, height)
    }

    pub fn material(&self) -> MaterialConfig {
        MaterialConfig::resolve(self.texture_source.as_deref())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
