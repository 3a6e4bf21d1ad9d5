//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a canvas filling its container, generates the
//! particle set once, and runs an animation loop via `requestAnimationFrame`
//! that ticks the simulation and repaints each frame. Window `resize` and
//! `mousemove` listeners feed the surface size and pointer. Everything is
//! released when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};

use super::config::EngineConfig;
use super::lifecycle::{Lifecycle, WindowHost};
use super::opacity::layer_opacity;
use super::pointer::Bounds;
use super::render::{self, SurfaceError};
use super::shape::ShapeMode;
use super::state::FieldState;

/// A running field: simulation state plus the canvas and callbacks that
/// drive it.
struct Mount {
	state: RefCell<FieldState>,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	lifecycle: Lifecycle<WindowHost>,
	max_dpr: f64,
	frame_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
	listener_cbs: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

impl Mount {
	fn frame(&self, now_ms: f64) {
		self.lifecycle.frame_started();
		if !self.canvas.is_connected() {
			debug!("agent-landing: canvas detached, stopping particle loop");
			self.lifecycle.teardown();
			return;
		}

		{
			let mut state = self.state.borrow_mut();
			let inputs = state.tick(now_ms);
			render::render(&self.ctx, &inputs.surface, state.frames(&inputs));
		}

		if let Some(ref cb) = *self.frame_cb.borrow() {
			self.lifecycle.schedule(cb.as_ref().unchecked_ref());
		}
	}

	fn resize(&self) {
		match render::measure(&self.canvas, self.max_dpr) {
			Ok(surface) => {
				render::apply_surface(&self.canvas, &self.ctx, &surface);
				debug!(
					"agent-landing: particle surface {}x{} @{}x -> {:?}",
					surface.css_width,
					surface.css_height,
					surface.dpr,
					surface.backing_size()
				);
				self.state.borrow_mut().resize(surface);
			}
			Err(e) => warn!("agent-landing: resize skipped: {}", e),
		}
	}

	fn pointer_moved(&self, ev: &MouseEvent) {
		let rect = self.canvas.get_bounding_client_rect();
		let bounds = Bounds {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		};
		self.state
			.borrow_mut()
			.pointer_moved(ev.client_x() as f64, ev.client_y() as f64, bounds);
	}

	/// Cancels the loop, removes listeners and drops the callbacks, which
	/// also breaks the reference cycle between them and the mount.
	fn teardown(&self) {
		self.lifecycle.teardown();
		self.frame_cb.borrow_mut().take();
		self.listener_cbs.borrow_mut().clear();
		debug!("agent-landing: particle field torn down");
	}
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Sets up the canvas, generates the field and starts the loop.
fn start(canvas: HtmlCanvasElement, mode: ShapeMode, config: EngineConfig) -> Result<Rc<Mount>, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let ctx = render::context_2d(&canvas)?;
	let max_dpr = config.surface.max_device_pixel_ratio;
	let surface = render::measure(&canvas, max_dpr)?;
	render::apply_surface(&canvas, &ctx, &surface);

	let seed = config.seed.unwrap_or_else(random_seed);
	let state = FieldState::new(mode, config, surface, seed);
	info!(
		"agent-landing: particle field {:?} with {} particles (seed {})",
		state.mode(),
		state.particles().len(),
		seed
	);

	let mount = Rc::new(Mount {
		state: RefCell::new(state),
		canvas,
		ctx,
		lifecycle: Lifecycle::new(WindowHost::new(window)),
		max_dpr,
		frame_cb: RefCell::new(None),
		listener_cbs: RefCell::new(Vec::new()),
	});

	let mount_resize = mount.clone();
	let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| mount_resize.resize());
	let mount_pointer = mount.clone();
	let on_pointer = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			mount_pointer.pointer_moved(ev);
		}
	});
	mount.lifecycle.listen(
		"resize",
		on_resize.as_ref().unchecked_ref::<js_sys::Function>().clone(),
	);
	mount.lifecycle.listen(
		"mousemove",
		on_pointer.as_ref().unchecked_ref::<js_sys::Function>().clone(),
	);
	mount.listener_cbs.borrow_mut().extend([on_resize, on_pointer]);

	let mount_frame = mount.clone();
	let frame = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| mount_frame.frame(now_ms));
	mount.lifecycle.schedule(frame.as_ref().unchecked_ref());
	*mount.frame_cb.borrow_mut() = Some(frame);

	Ok(mount)
}

/// Renders the animated particle field as a background layer.
///
/// The layer fills its nearest positioned ancestor and never receives
/// pointer events. In [`ShapeMode::Ring`] its opacity follows
/// `scroll_progress` through the configured fade curve; the silhouette stays
/// fully visible. The mode is read once at mount.
#[component]
pub fn ParticleField(
	#[prop(into)] scroll_progress: Signal<f64>,
	#[prop(optional)] mode: ShapeMode,
	#[prop(optional)] config: Option<EngineConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let fade = config.fade.clone();
	let mount: StoredValue<Option<Rc<Mount>>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mount.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match start(canvas, mode, config.clone()) {
			Ok(m) => mount.set_value(Some(m)),
			Err(e) => warn!("agent-landing: particle field disabled: {}", e),
		}
	});

	on_cleanup(move || {
		if let Some(Some(m)) = mount.try_update_value(Option::take) {
			m.teardown();
		}
	});

	let opacity = move || layer_opacity(mode, &fade, scroll_progress.get()).to_string();

	view! {
		<div
			class="particle-field"
			style:position="absolute"
			style:inset="0"
			style:overflow="hidden"
			style:pointer-events="none"
			style:opacity=opacity
		>
			<canvas node_ref=canvas_ref style:display="block" />
		</div>
	}
}
