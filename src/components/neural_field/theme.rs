//! Visual theming for the particle field.
//!
//! Provides the color type and per-element style configuration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Particle visual style.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Core disc color
	pub color: Color,
	/// Color of the outer glow disc, faded to transparent at its rim
	pub glow_color: Color,
	/// Extra radius of the glow disc beyond the particle radius
	pub glow_pad: f64,
	/// Canvas shadow blur applied to the core disc (0 = none)
	pub shadow_blur: f64,
}

/// Connection line style.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Line color; per-link opacity is applied on top of this
	pub color: Color,
	/// Stroke width in pixels
	pub line_width: f64,
	/// Canvas shadow blur applied to each stroke (0 = none)
	pub shadow_blur: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub particle: ParticleStyle,
	pub link: LinkStyle,
}

impl Theme {
	/// Violet-on-black scheme (default).
	pub fn synapse() -> Self {
		Self {
			name: "synapse",
			background: BackgroundStyle {
				color: Color::rgb(8, 5, 14),
				color_secondary: Color::rgb(22, 13, 36),
				use_gradient: true,
			},
			particle: ParticleStyle {
				color: Color::rgb(168, 85, 247),
				glow_color: Color::rgba(168, 85, 247, 0.8),
				glow_pad: 2.0,
				shadow_blur: 10.0,
			},
			link: LinkStyle {
				color: Color::rgb(168, 85, 247),
				line_width: 1.5,
				shadow_blur: 5.0,
			},
		}
	}

	/// Warm amber scheme.
	pub fn ember() -> Self {
		Self {
			name: "ember",
			background: BackgroundStyle {
				color: Color::rgb(16, 10, 7),
				color_secondary: Color::rgb(32, 20, 14),
				use_gradient: true,
			},
			particle: ParticleStyle {
				color: Color::rgb(235, 150, 70),
				glow_color: Color::rgba(235, 150, 70, 0.7),
				glow_pad: 2.0,
				shadow_blur: 8.0,
			},
			link: LinkStyle {
				color: Color::rgb(235, 150, 70),
				line_width: 1.5,
				shadow_blur: 4.0,
			},
		}
	}

	/// Cold teal scheme, flat background, no blur.
	pub fn abyss() -> Self {
		Self {
			name: "abyss",
			background: BackgroundStyle {
				color: Color::rgb(10, 18, 24),
				color_secondary: Color::rgb(10, 18, 24),
				use_gradient: false,
			},
			particle: ParticleStyle {
				color: Color::rgb(90, 185, 200),
				glow_color: Color::rgba(90, 185, 200, 0.6),
				glow_pad: 1.5,
				shadow_blur: 0.0,
			},
			link: LinkStyle {
				color: Color::rgb(90, 185, 200),
				line_width: 1.0,
				shadow_blur: 0.0,
			},
		}
	}

	/// Look up a preset by its configured name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"synapse" => Some(Self::synapse()),
			"ember" => Some(Self::ember()),
			"abyss" => Some(Self::abyss()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::synapse()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_color_formats_as_hex() {
		assert_eq!(Color::rgb(168, 85, 247).to_css(), "#a855f7");
	}

	#[test]
	fn translucent_color_formats_as_rgba() {
		let css = Color::rgb(168, 85, 247).with_alpha(0.5).to_css();
		assert_eq!(css, "rgba(168, 85, 247, 0.5)");
	}

	#[test]
	fn presets_resolve_by_name() {
		for name in ["synapse", "ember", "abyss"] {
			assert_eq!(Theme::by_name(name).unwrap().name, name);
		}
		assert!(Theme::by_name("plasma").is_none());
	}

	#[test]
	fn default_theme_is_synapse() {
		assert_eq!(Theme::default().name, "synapse");
	}
}
