//! agent-landing: Landing page for an enterprise AI agent platform.
//!
//! This crate provides a WASM client that renders the marketing page with an
//! animated particle-field hero, a typing headline, and a particle logo.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::landing::LandingPage;
pub use components::particle_field::{EngineConfig, ParticleField, ShapeMode};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("agent-landing: logging initialized");
}

/// Load particle settings from a script element with id="particle-config".
/// Expected format: JSON object, every field optional.
fn load_engine_config() -> Option<EngineConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = match EngineConfig::from_json(&json_text) {
		Ok(config) => config,
		Err(e) => {
			warn!("agent-landing: failed to parse particle config: {}", e);
			return None;
		}
	};
	if let Err(e) = config.validate() {
		warn!("agent-landing: invalid particle config, using defaults: {}", e);
		return None;
	}

	info!(
		"agent-landing: loaded particle config ({} ring, {} logo particles)",
		config.ring.count, config.silhouette.count
	);
	Some(config)
}

/// Main application component.
/// Loads particle settings from the DOM and renders the landing page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_engine_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Biz.AI | AI agents for your business" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<LandingPage config=config />
	}
}
