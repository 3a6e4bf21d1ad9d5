//! Page scroll progress as a reactive signal.

use leptos::ev::scroll;
use leptos::prelude::*;

/// Fraction of the scrollable distance covered at offset `y`, in `[0, 1]`.
/// Pages that do not scroll report 0.
pub fn scroll_fraction(y: f64, document_height: f64, viewport_height: f64) -> f64 {
	let range = document_height - viewport_height;
	if range.is_nan() || range <= 0.0 || !y.is_finite() {
		return 0.0;
	}
	(y / range).clamp(0.0, 1.0)
}

fn read_scroll_fraction() -> f64 {
	let Some(window) = web_sys::window() else {
		return 0.0;
	};
	let y = window.scroll_y().unwrap_or(0.0);
	let viewport_height = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	let document_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| e.scroll_height() as f64)
		.unwrap_or(0.0);
	scroll_fraction(y, document_height, viewport_height)
}

/// Tracks how far the page has been scrolled. The window listener is
/// removed when the owning component is cleaned up.
pub fn use_scroll_progress() -> Signal<f64> {
	let progress = RwSignal::new(read_scroll_fraction());
	let handle = window_event_listener(scroll, move |_| {
		progress.set(read_scroll_fraction());
	});
	on_cleanup(move || handle.remove());
	progress.into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fraction_spans_scrollable_range() {
		assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_fraction(1000.0, 3000.0, 1000.0), 0.5);
		assert_eq!(scroll_fraction(2000.0, 3000.0, 1000.0), 1.0);
	}

	#[test]
	fn fraction_is_clamped() {
		assert_eq!(scroll_fraction(-40.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_fraction(2600.0, 3000.0, 1000.0), 1.0);
	}

	#[test]
	fn unscrollable_page_reports_zero() {
		assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
		assert_eq!(scroll_fraction(10.0, 600.0, 800.0), 0.0);
		assert_eq!(scroll_fraction(f64::NAN, 3000.0, 1000.0), 0.0);
	}
}
