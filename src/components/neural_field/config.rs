//! Tuning parameters for the particle field.
//!
//! All values have defaults; the host page may override any subset through
//! the JSON config element (see `load_field_config` in the crate root).

use serde::Deserialize;

/// Simulation and visual tuning for the particle field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles, fixed for the life of the field.
	///
	/// The connection sweep is quadratic in this count. 100 keeps a full
	/// sweep well inside a frame budget while staying visually dense.
	pub particle_count: usize,
	/// Distance below which two particles are linked, in canvas pixels.
	/// Independent of the viewport size.
	pub connection_distance: f64,
	/// Maximum velocity magnitude per axis, in pixels per frame.
	pub max_speed: f64,
	/// Smallest particle draw radius.
	pub radius_min: f64,
	/// Largest particle draw radius.
	pub radius_max: f64,
	/// Theme preset name, resolved by `Theme::by_name`.
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			connection_distance: 180.0,
			max_speed: 0.4,
			radius_min: 1.5,
			radius_max: 4.0,
			theme: "synapse".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_documented_values() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count, 100);
		assert_eq!(config.connection_distance, 180.0);
		assert_eq!(config.max_speed, 0.4);
		assert_eq!(config.radius_min, 1.5);
		assert_eq!(config.radius_max, 4.0);
		assert_eq!(config.theme, "synapse");
	}

	#[test]
	fn partial_json_override_keeps_remaining_defaults() {
		let config: FieldConfig =
			serde_json::from_str(r#"{"particle_count": 24, "theme": "abyss"}"#).unwrap();
		assert_eq!(config.particle_count, 24);
		assert_eq!(config.theme, "abyss");
		assert_eq!(config.connection_distance, 180.0);
		assert_eq!(config.max_speed, 0.4);
	}

	#[test]
	fn empty_json_object_is_all_defaults() {
		let config: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.particle_count, FieldConfig::default().particle_count);
	}
}
