//! Ownership of the animation loop's scheduled frame and event listeners.
//!
//! Everything the loop registers with the host goes through [`Lifecycle`],
//! so teardown can cancel the pending frame and remove every listener in
//! one place.

use std::cell::{Cell, RefCell};

use web_sys::Window;

/// The platform services the loop needs.
pub trait FrameHost {
	/// Handle to a registered callback.
	type Callback;

	/// Schedules `callback` for the next display frame.
	fn request_frame(&self, callback: &Self::Callback) -> Option<i32>;

	/// Cancels a frame returned by `request_frame`.
	fn cancel_frame(&self, handle: i32);

	/// Subscribes `callback` to a window event. Returns `false` on failure.
	fn add_listener(&self, event: &'static str, callback: &Self::Callback) -> bool;

	/// Undoes `add_listener`.
	fn remove_listener(&self, event: &'static str, callback: &Self::Callback);
}

/// Tracks the pending frame and registered listeners of one mount.
pub struct Lifecycle<H: FrameHost> {
	host: H,
	active: Cell<bool>,
	pending: Cell<Option<i32>>,
	listeners: RefCell<Vec<(&'static str, H::Callback)>>,
}

impl<H: FrameHost> Lifecycle<H> {
	/// An active lifecycle with nothing registered yet.
	pub fn new(host: H) -> Self {
		Self {
			host,
			active: Cell::new(true),
			pending: Cell::new(None),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// `false` once torn down.
	pub fn is_active(&self) -> bool {
		self.active.get()
	}

	/// Handle of the scheduled frame, if one is pending.
	pub fn pending_frame(&self) -> Option<i32> {
		self.pending.get()
	}

	/// Number of listeners still registered.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Registers `callback` for `event`. Ignored after teardown.
	pub fn listen(&self, event: &'static str, callback: H::Callback) {
		if !self.is_active() {
			return;
		}
		if self.host.add_listener(event, &callback) {
			self.listeners.borrow_mut().push((event, callback));
		}
	}

	/// Schedules the next frame. Returns `false` once torn down or when the
	/// host refuses.
	pub fn schedule(&self, callback: &H::Callback) -> bool {
		if !self.is_active() {
			return false;
		}
		let handle = self.host.request_frame(callback);
		self.pending.set(handle);
		handle.is_some()
	}

	/// Marks the pending frame as running.
	pub fn frame_started(&self) {
		self.pending.set(None);
	}

	/// Stops the loop: cancels the pending frame and removes all listeners.
	/// Safe to call more than once.
	pub fn teardown(&self) {
		self.active.set(false);
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
		for (event, callback) in self.listeners.borrow_mut().drain(..) {
			self.host.remove_listener(event, &callback);
		}
	}
}

/// [`FrameHost`] backed by the browser window.
pub struct WindowHost {
	window: Window,
}

impl WindowHost {
	/// Host for `window`.
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameHost for WindowHost {
	type Callback = js_sys::Function;

	fn request_frame(&self, callback: &js_sys::Function) -> Option<i32> {
		self.window.request_animation_frame(callback).ok()
	}

	fn cancel_frame(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn add_listener(&self, event: &'static str, callback: &js_sys::Function) -> bool {
		self.window
			.add_event_listener_with_callback(event, callback)
			.is_ok()
	}

	fn remove_listener(&self, event: &'static str, callback: &js_sys::Function) {
		let _ = self.window.remove_event_listener_with_callback(event, callback);
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	/// Host that records frames and listeners instead of talking to a browser.
	#[derive(Default)]
	struct MockHost {
		next: Cell<i32>,
		frames: RefCell<Vec<i32>>,
		listeners: RefCell<BTreeMap<&'static str, usize>>,
	}

	impl FrameHost for MockHost {
		type Callback = u8;

		fn request_frame(&self, _: &u8) -> Option<i32> {
			let id = self.next.get() + 1;
			self.next.set(id);
			self.frames.borrow_mut().push(id);
			Some(id)
		}

		fn cancel_frame(&self, handle: i32) {
			self.frames.borrow_mut().retain(|f| *f != handle);
		}

		fn add_listener(&self, event: &'static str, _: &u8) -> bool {
			*self.listeners.borrow_mut().entry(event).or_default() += 1;
			true
		}

		fn remove_listener(&self, event: &'static str, _: &u8) {
			if let Some(n) = self.listeners.borrow_mut().get_mut(event) {
				*n -= 1;
			}
		}
	}

	impl MockHost {
		fn live_listeners(&self) -> usize {
			self.listeners.borrow().values().sum()
		}
	}

	/// Runs the oldest scheduled frame the way the browser would.
	fn run_frame(lifecycle: &Lifecycle<MockHost>) {
		let due = lifecycle.host.frames.borrow_mut().remove(0);
		assert_eq!(lifecycle.pending_frame(), Some(due));
		lifecycle.frame_started();
		lifecycle.schedule(&0);
	}

	#[test]
	fn teardown_leaves_nothing_scheduled() {
		let lifecycle = Lifecycle::new(MockHost::default());
		lifecycle.listen("resize", 1);
		lifecycle.listen("mousemove", 2);
		assert!(lifecycle.schedule(&0));
		run_frame(&lifecycle);
		run_frame(&lifecycle);
		assert_eq!(lifecycle.host.frames.borrow().len(), 1);
		assert_eq!(lifecycle.host.live_listeners(), 2);

		lifecycle.teardown();
		assert!(!lifecycle.is_active());
		assert_eq!(lifecycle.pending_frame(), None);
		assert!(lifecycle.host.frames.borrow().is_empty());
		assert_eq!(lifecycle.listener_count(), 0);
		assert_eq!(lifecycle.host.live_listeners(), 0);
	}

	#[test]
	fn nothing_can_be_scheduled_after_teardown() {
		let lifecycle = Lifecycle::new(MockHost::default());
		lifecycle.teardown();
		assert!(!lifecycle.schedule(&0));
		lifecycle.listen("resize", 1);
		assert!(lifecycle.host.frames.borrow().is_empty());
		assert_eq!(lifecycle.host.live_listeners(), 0);
	}

	#[test]
	fn teardown_is_idempotent() {
		let lifecycle = Lifecycle::new(MockHost::default());
		lifecycle.listen("resize", 1);
		lifecycle.schedule(&0);
		lifecycle.teardown();
		lifecycle.teardown();
		assert_eq!(lifecycle.host.live_listeners(), 0);
		assert!(lifecycle.host.frames.borrow().is_empty());
	}
}
