//! neural-field: Animated neural-network particle background.
//!
//! This crate provides a WASM canvas component that renders a field of
//! drifting particles joined by distance-faded connection lines, the
//! decorative "neural network" backdrop of the hosting page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::neural_field::{FieldConfig, NeuralFieldCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neural-field: logging initialized");
}

/// Load field tuning from a script element with id="field-config".
/// Expected format: JSON with any subset of the [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"neural-field: loaded config, {} particles, {}px connection distance",
				config.particle_count, config.connection_distance
			);
			Some(config)
		}
		Err(e) => {
			warn!("neural-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Applies any host-page config override and mounts the fullscreen field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Tuning overrides come from the DOM, if the host page provides any
	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Neural Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-field">
			<NeuralFieldCanvas config=config_signal fullscreen=true />
		</div>
	}
}
