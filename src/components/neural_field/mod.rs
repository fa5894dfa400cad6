//! Animated particle field component.
//!
//! Renders a drifting "neural network" particle field on an HTML canvas:
//! - Fixed-count particle set integrated once per animation frame
//! - Edge reflection keeping particles inside the viewport
//! - Distance-faded connection lines between nearby particle pairs
//! - Configurable theming, with host-page JSON overrides
//!
//! # Example
//!
//! ```ignore
//! use neural_field::{FieldConfig, NeuralFieldCanvas};
//!
//! let config = FieldConfig::default();
//!
//! view! { <NeuralFieldCanvas config=config fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod field;
mod links;
mod render;
pub mod theme;

pub use component::NeuralFieldCanvas;
pub use config::FieldConfig;
pub use field::{NeuralField, Particle};
pub use links::{MAX_LINK_ALPHA, link_alpha};
pub use theme::Theme;
