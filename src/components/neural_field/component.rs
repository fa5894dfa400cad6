//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas element and runs the frame loop
//! via `requestAnimationFrame`: each callback advances the simulation one
//! tick and repaints the whole surface, then reschedules itself. A window
//! resize listener keeps the canvas matched to the viewport when running
//! fullscreen.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::NeuralField;
use super::render;
use super::theme::Theme;

/// Bundles the simulation state with its visual theme.
struct FieldContext {
	field: NeuralField,
	theme: Theme,
}

/// Renders the animated particle field on a canvas element.
///
/// Pass tuning via the reactive `config` signal. The component sizes
/// itself to its parent container by default; set `fullscreen = true` to
/// fill the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn NeuralFieldCanvas(
	#[prop(into)] config: Signal<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// A canvas without a 2d context cannot host the field at all.
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.expect("2d context request failed")
			.expect("2d context unavailable")
			.dyn_into()
			.unwrap();

		let cfg = config.get();
		let theme = Theme::by_name(&cfg.theme).unwrap_or_else(|| {
			warn!("neural-field: unknown theme {:?}, using default", cfg.theme);
			Theme::default()
		});

		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
		let field = NeuralField::new(&cfg, w, h, &mut rng);
		info!(
			"neural-field: {} particles on {}x{} canvas, theme {}",
			field.particles.len(),
			w,
			h,
			theme.name
		);

		*context_init.borrow_mut() = Some(FieldContext { field, theme });

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				// Bounds only: particles keep their positions and drift
				// back in through edge reflection.
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.field.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.tick();
				render::render(&c.field, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="neural-field-canvas"
			style="display: block;"
		/>
	}
}
