//! Canvas rendering for the particle field.

use std::f64::consts::PI;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::theme::ParticleStyle;

/// Clears the surface and draws every particle in population order.
pub fn render<R: Rng>(ctx: &CanvasRenderingContext2d, field: &ParticleField<R>) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	let style = field.style();
	for p in field.particles() {
		draw_particle(ctx, p);
		if p.has_glow(style) {
			draw_glow(ctx, p, style);
		}
	}
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) {
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&p.color.to_css());
	ctx.fill();
}

fn draw_glow(ctx: &CanvasRenderingContext2d, p: &Particle, style: &ParticleStyle) {
	let radius = p.size * style.glow_scale;
	let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, radius) else {
		return;
	};
	if gradient.add_color_stop(0.0, &p.glow.to_css()).is_err()
		|| gradient.add_color_stop(1.0, "transparent").is_err()
	{
		return;
	}

	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
