//! Particle storage and per-frame integration.
//!
//! A [`NeuralField`] owns a fixed set of particles and the canvas bounds
//! they drift in. Each animation frame advances every particle by its
//! per-frame velocity and reflects it off the canvas edges. Nothing is
//! ever added or removed after construction.

use rand::Rng;

use super::config::FieldConfig;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Draw radius, fixed at spawn.
	pub radius: f64,
}

impl Particle {
	/// Advance one frame and reflect at the canvas edges.
	///
	/// Velocity is added first; an axis whose coordinate lands outside the
	/// canvas while still heading outward has its velocity negated for the
	/// next frame. The position is left where it landed, so a particle can
	/// sit marginally past an edge for one frame before the flipped
	/// velocity carries it back in. Axes are handled independently: only
	/// the violated axis reflects.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		// The outward-heading guard keeps a particle stranded far outside
		// (after a shrinking resize) walking steadily back in instead of
		// re-flipping every frame.
		if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
			self.vx = -self.vx;
		}
		if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
			self.vy = -self.vy;
		}
	}
}

/// Owns the fixed particle set and the bounds it moves in.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop via [`NeuralField::tick`].
pub struct NeuralField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	connection_distance: f64,
}

impl NeuralField {
	/// Populate a field of `config.particle_count` randomized particles.
	///
	/// Positions are uniform over the canvas, each velocity axis is
	/// uniform in `[-max_speed, +max_speed]` independently, and radii are
	/// uniform in `[radius_min, radius_max]`. The random source is
	/// injected so tests can seed it for reproducible layouts.
	pub fn new(config: &FieldConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let mut particles = Vec::with_capacity(config.particle_count);

		for _ in 0..config.particle_count {
			particles.push(Particle {
				x: rng.random_range(0.0..=width),
				y: rng.random_range(0.0..=height),
				vx: rng.random_range(-config.max_speed..=config.max_speed),
				vy: rng.random_range(-config.max_speed..=config.max_speed),
				radius: rng.random_range(config.radius_min..=config.radius_max),
			});
		}

		Self {
			particles,
			width,
			height,
			connection_distance: config.connection_distance,
		}
	}

	/// Build a field from explicit particles, for driving exact scenarios.
	#[cfg(test)]
	pub(crate) fn from_particles(
		particles: Vec<Particle>,
		width: f64,
		height: f64,
		connection_distance: f64,
	) -> Self {
		Self {
			particles,
			width,
			height,
			connection_distance,
		}
	}

	/// Current canvas width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current canvas height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Link threshold in pixels.
	pub fn connection_distance(&self) -> f64 {
		self.connection_distance
	}

	/// Advance every particle by one frame.
	pub fn tick(&mut self) {
		for p in &mut self.particles {
			p.step(self.width, self.height);
		}
	}

	/// Update the bounds after a viewport change.
	///
	/// Positions are left untouched. Particles stranded outside the new
	/// bounds drift back in through edge reflection over later frames.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn seeded_field(width: f64, height: f64) -> NeuralField {
		let mut rng = SmallRng::seed_from_u64(42);
		NeuralField::new(&FieldConfig::default(), width, height, &mut rng)
	}

	#[test]
	fn spawns_configured_count_inside_bounds() {
		let config = FieldConfig::default();
		let field = seeded_field(800.0, 600.0);

		assert_eq!(field.particles.len(), config.particle_count);
		for p in &field.particles {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!(p.vx.abs() <= config.max_speed);
			assert!(p.vy.abs() <= config.max_speed);
			assert!((config.radius_min..=config.radius_max).contains(&p.radius));
		}
	}

	#[test]
	fn seeded_spawns_are_reproducible() {
		let a = seeded_field(800.0, 600.0);
		let b = seeded_field(800.0, 600.0);
		for (pa, pb) in a.particles.iter().zip(&b.particles) {
			assert_eq!(pa.x, pb.x);
			assert_eq!(pa.y, pb.y);
			assert_eq!(pa.vx, pb.vx);
		}
	}

	#[test]
	fn positions_stay_within_one_step_of_bounds() {
		let mut field = seeded_field(800.0, 600.0);
		let eps = FieldConfig::default().max_speed;

		for _ in 0..10_000 {
			field.tick();
			for p in &field.particles {
				assert!(p.x >= -eps && p.x <= 800.0 + eps, "x escaped: {}", p.x);
				assert!(p.y >= -eps && p.y <= 600.0 + eps, "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn reflection_flips_velocity_then_returns_inside() {
		let mut p = Particle {
			x: 799.9,
			y: 300.0,
			vx: 0.5,
			vy: 0.0,
			radius: 2.0,
		};

		p.step(800.0, 600.0);
		assert!(p.x > 800.0);
		assert_eq!(p.vx, -0.5);

		p.step(800.0, 600.0);
		assert!(p.x < 800.0);
		assert_eq!(p.vx, -0.5);
	}

	#[test]
	fn reflection_only_touches_the_violated_axis() {
		let mut p = Particle {
			x: 799.9,
			y: 300.0,
			vx: 0.5,
			vy: 0.3,
			radius: 2.0,
		};

		p.step(800.0, 600.0);
		assert_eq!(p.vx, -0.5);
		assert_eq!(p.vy, 0.3);
	}

	#[test]
	fn velocity_magnitude_is_invariant() {
		let mut field = seeded_field(400.0, 300.0);
		let speeds: Vec<(f64, f64)> = field
			.particles
			.iter()
			.map(|p| (p.vx.abs(), p.vy.abs()))
			.collect();

		for _ in 0..5_000 {
			field.tick();
		}
		for (p, (sx, sy)) in field.particles.iter().zip(&speeds) {
			assert_eq!(p.vx.abs(), *sx);
			assert_eq!(p.vy.abs(), *sy);
		}
	}

	#[test]
	fn resize_keeps_positions_and_particles_converge_back() {
		let stranded = Particle {
			x: 700.0,
			y: 500.0,
			vx: 0.3,
			vy: 0.2,
			radius: 2.0,
		};
		let mut field = NeuralField::from_particles(vec![stranded], 800.0, 600.0, 180.0);

		field.resize(400.0, 300.0);
		// No teleport or clamp at resize time.
		assert_eq!(field.particles[0].x, 700.0);
		assert_eq!(field.particles[0].y, 500.0);

		let mut converged = false;
		for _ in 0..5_000 {
			field.tick();
			let p = &field.particles[0];
			if (0.0..=400.0).contains(&p.x) && (0.0..=300.0).contains(&p.y) {
				converged = true;
				break;
			}
		}
		assert!(converged, "stranded particle never re-entered the bounds");
	}
}
