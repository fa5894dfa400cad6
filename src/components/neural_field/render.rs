//! Canvas rendering for the particle field.
//!
//! Handles all drawing operations. Each frame repaints the whole surface
//! in three passes: background, particle glows and cores, then connection
//! lines over the freshly integrated positions — so links always reflect
//! current-frame positions, never last frame's.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::NeuralField;
use super::theme::Theme;

/// Paints one complete frame.
pub fn render(field: &NeuralField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_background(field, ctx, theme);
	draw_particles(field, ctx, theme);
	draw_links(field, ctx, theme);
}

fn draw_background(field: &NeuralField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				field.width() / 2.0,
				field.height() / 2.0,
				0.0,
				field.width() / 2.0,
				field.height() / 2.0,
				(field.width().max(field.height())) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, field.width(), field.height());
}

fn draw_particles(field: &NeuralField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.particle;

	for p in &field.particles {
		// Outer glow disc, fading to transparent at the rim.
		let glow_radius = p.radius + style.glow_pad;
		let gradient = ctx
			.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, glow_radius)
			.unwrap();
		gradient
			.add_color_stop(0.0, &style.glow_color.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &style.glow_color.with_alpha(0.0).to_css())
			.unwrap();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();

		// Solid core on top.
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&style.color.to_css());
		if style.shadow_blur > 0.0 {
			ctx.set_shadow_color(&style.color.to_css());
			ctx.set_shadow_blur(style.shadow_blur);
		}
		ctx.fill();
		ctx.set_shadow_blur(0.0);
	}
}

fn draw_links(field: &NeuralField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.link;

	ctx.set_line_width(style.line_width);
	if style.shadow_blur > 0.0 {
		ctx.set_shadow_color(&style.color.to_css());
	}

	field.visit_links(|a, b, alpha| {
		ctx.set_stroke_style_str(&style.color.with_alpha(alpha).to_css());
		if style.shadow_blur > 0.0 {
			ctx.set_shadow_blur(style.shadow_blur);
		}
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
		ctx.set_shadow_blur(0.0);
	});
}
