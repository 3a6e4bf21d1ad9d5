//! Typing, rotating hero headline.
//!
//! A [`Typewriter`] reveals the two headline lines of the current slide one
//! character at a time, shows the subtitle once typing is done, and moves on
//! to the next slide after a pause. [`HeroHeadline`] drives it from a timer.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// One headline: two title lines and a subtitle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
	/// Headline, split over two lines.
	pub main: [&'static str; 2],
	/// Subtitle shown once the headline is typed.
	pub sub: &'static str,
}

/// Slides the hero rotates through.
pub const HERO_SLIDES: [Slide; 4] = [
	Slide {
		main: ["Run your business", "with AI Agents."],
		sub: "An AI agent platform that works on behalf of your company.\nFrom data analysis to decisions and execution, one AI team connects it all.",
	},
	Slide {
		main: ["AI that works", "for your business."],
		sub: "An enterprise agent ecosystem that understands your data,\nmakes judgements and acts on them.",
	},
	Slide {
		main: ["From data to", "action. Instantly."],
		sub: "Turn every piece of company data into execution.\nFaster decisions, automated work, AI that scales with you.",
	},
	Slide {
		main: ["Build smarter", "operations. Faster."],
		sub: "Agent-driven automation that changes how\nyour organisation decides and delivers.",
	},
];

/// Delay between revealed characters.
pub const TYPING_SPEED_MS: u32 = 65;

/// Pause on a fully typed slide before the next one starts.
pub const ROTATE_INTERVAL_MS: u32 = 4800;

/// Typing and rotation state, advanced by elapsed milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
	slides: &'static [Slide],
	index: usize,
	typed: usize,
	pending_ms: u32,
}

impl Default for Typewriter {
	fn default() -> Self {
		Self::new(&HERO_SLIDES)
	}
}

impl Typewriter {
	/// Starts typing the first of `slides`.
	pub fn new(slides: &'static [Slide]) -> Self {
		Self {
			slides,
			index: 0,
			typed: 0,
			pending_ms: 0,
		}
	}

	/// Index of the slide being shown.
	pub fn slide(&self) -> usize {
		self.index
	}

	/// The slide being shown, `None` only without slides.
	pub fn current(&self) -> Option<&'static Slide> {
		self.slides.get(self.index)
	}

	fn title(&self) -> String {
		self.current()
			.map(|s| format!("{}\n{}", s.main[0], s.main[1]))
			.unwrap_or_default()
	}

	/// Whether the whole title is revealed.
	pub fn is_done(&self) -> bool {
		self.typed >= self.title().chars().count()
	}

	/// The revealed part of the title, cut on character boundaries.
	pub fn displayed(&self) -> String {
		self.title().chars().take(self.typed).collect()
	}

	/// The revealed title split into its two lines. The second is empty
	/// until typing reaches it.
	pub fn lines(&self) -> (String, String) {
		let displayed = self.displayed();
		match displayed.split_once('\n') {
			Some((first, second)) => (first.to_string(), second.to_string()),
			None => (displayed, String::new()),
		}
	}

	/// Jumps to slide `index` and restarts typing. Out-of-range indices are
	/// ignored.
	pub fn select(&mut self, index: usize) {
		if index >= self.slides.len() {
			return;
		}
		self.index = index;
		self.typed = 0;
		self.pending_ms = 0;
	}

	/// Advances typing and rotation by `ms` milliseconds.
	pub fn tick(&mut self, ms: u32) {
		if self.slides.is_empty() {
			return;
		}
		self.pending_ms = self.pending_ms.saturating_add(ms);
		loop {
			if !self.is_done() {
				if self.pending_ms < TYPING_SPEED_MS {
					break;
				}
				self.pending_ms -= TYPING_SPEED_MS;
				self.typed += 1;
			} else {
				if self.pending_ms < ROTATE_INTERVAL_MS {
					break;
				}
				self.select((self.index + 1) % self.slides.len());
			}
		}
	}
}

/// Hero title with typing effect, subtitle and slide indicator dots.
#[component]
pub fn HeroHeadline() -> impl IntoView {
	let writer = RwSignal::new(Typewriter::default());

	let interval = Interval::new(TYPING_SPEED_MS, move || {
		writer.update(|w| w.tick(TYPING_SPEED_MS));
	});
	let interval = StoredValue::new_local(Some(interval));
	on_cleanup(move || {
		interval.try_update_value(Option::take);
	});

	let done = move || writer.with(Typewriter::is_done);
	let dots = (0..HERO_SLIDES.len())
		.map(|i| {
			view! {
				<button
					class="hero-dot"
					class:active=move || writer.with(|w| w.slide() == i)
					aria-label=format!("Go to slide {}", i + 1)
					on:click=move |_| writer.update(|w| w.select(i))
				>
					<span></span>
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="hero-headline">
			<h1 class="hero-title">
				<span class="hero-line">{move || writer.with(|w| w.lines().0)}</span>
				<span class="hero-line">
					{move || writer.with(|w| w.lines().1)}
					<Show when=move || !done()>
						<span class="hero-caret"></span>
					</Show>
				</span>
			</h1>
			<p class="hero-sub" class:visible=done>
				{move || writer.with(|w| w.current().map(|s| s.sub).unwrap_or_default())}
			</p>
			<div class="hero-dots">{dots}</div>
		</div>
	}
}
