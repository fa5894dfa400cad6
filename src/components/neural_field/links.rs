//! Proximity-based connection computation.
//!
//! Every frame the full set of unordered particle pairs is swept; pairs
//! closer than the connection distance yield a link whose opacity ramps up
//! as the pair draws together. Nothing is cached between frames: links are
//! a pure function of current positions.

use super::field::{NeuralField, Particle};

/// Peak link opacity, reached as pair distance approaches zero.
pub const MAX_LINK_ALPHA: f64 = 0.6;

/// Opacity for a pair at `distance`, or `None` at or beyond the threshold.
///
/// The ramp is linear: zero at the connection distance, [`MAX_LINK_ALPHA`]
/// at contact. The comparison is strict, so a pair exactly at the
/// threshold produces no link rather than a zero-opacity draw call.
pub fn link_alpha(distance: f64, connection_distance: f64) -> Option<f64> {
	if distance < connection_distance {
		Some((1.0 - distance / connection_distance) * MAX_LINK_ALPHA)
	} else {
		None
	}
}

impl NeuralField {
	/// Visit every linked pair exactly once with its computed opacity.
	///
	/// Pairs are enumerated with `i < j`, so an unordered pair is never
	/// reported twice. The sweep is quadratic in particle count, which is
	/// what bounds the feasible count for a per-frame repaint.
	pub fn visit_links(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = link_alpha(dist, self.connection_distance()) {
					f(a, b, alpha);
				}
			}
		}
	}
}
