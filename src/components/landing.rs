//! Landing page sections.

use leptos::prelude::*;

use super::hero_text::HeroHeadline;
use super::particle_field::{EngineConfig, ParticleField, ShapeMode};
use super::scroll::use_scroll_progress;

const NAV_LINKS: [(&str, &str); 4] = [
	("#solution", "Agent products"),
	("#stats", "Why us"),
	("#logo", "Platform"),
	("#contact", "Contact"),
];

/// (tagline, name, description)
const SOLUTIONS: [(&str, &str, &str); 6] = [
	(
		"Build the agent your team needs in three minutes",
		"Agent Builder",
		"No-code builder for enterprise agents, usable without developers.",
	),
	(
		"Rolling agents out across the company",
		"Works AI",
		"Internal portal where every agent and AI service is managed in one place.",
	),
	(
		"Minutes written in one minute",
		"Meeting Notes",
		"Voice-driven meeting capture, summaries and action items.",
	),
	(
		"Cutting multi-cloud cost by a third",
		"CloudWiz",
		"Operations automation and cost control for cloud estates.",
	),
	(
		"One gateway for every model and API",
		"AI Gateway",
		"Standardised access to AI capabilities across internal systems.",
	),
	(
		"AI development in closed networks",
		"Codebox",
		"On-premise coding assistant appliance for secure environments.",
	),
];

/// (organisation, quote)
const TESTIMONIALS: [(&str, &str); 2] = [
	(
		"Machinery Industry Association",
		"Building a policy-support AI service for decision makers and analysts made our forecasting work noticeably more productive.",
	),
	(
		"Gyeonggi Province",
		"Our public data is now organised on one open platform, so residents can find and use it without friction.",
	),
];

/// (value, label)
const STATS: [(&str, &str); 4] = [
	("120+", "Enterprise deployments"),
	("30%", "Average cloud cost saved"),
	("3 min", "To a working agent"),
	("24/7", "Agents on duty"),
];

#[component]
fn Navbar() -> impl IntoView {
	view! {
		<nav class="navbar">
			<div class="navbar-inner">
				<a class="brand" href="#">
					<span class="brand-mark">"B"</span>
					<span class="brand-name">"Biz.AI"</span>
				</a>
				<div class="nav-links">
					{NAV_LINKS
						.iter()
						.map(|(href, label)| view! { <a href=*href>{*label}</a> })
						.collect_view()}
				</div>
				<div class="nav-actions">
					<button class="nav-login">"Log in"</button>
					<button class="nav-signup">"Sign Up"</button>
				</div>
			</div>
		</nav>
	}
}

#[component]
fn Hero(config: EngineConfig) -> impl IntoView {
	let progress = use_scroll_progress();

	view! {
		<section class="hero">
			<ParticleField scroll_progress=progress mode=ShapeMode::Ring config=config />
			<div class="hero-content">
				<HeroHeadline />
				<div class="hero-cta-group">
					<button class="cta-primary">"Start free trial"</button>
					<button class="cta-secondary">"Talk to us"</button>
				</div>
			</div>
		</section>
	}
}

#[component]
fn Solutions() -> impl IntoView {
	view! {
		<section id="solution" class="solutions">
			<h2>"Agent products"</h2>
			<p class="section-lead">
				"From first agent to company-wide rollout and the infrastructure underneath."
			</p>
			<div class="solution-grid">
				{SOLUTIONS
					.iter()
					.map(|(tag, name, desc)| {
						view! {
							<article class="solution-card">
								<span class="solution-tag">{*tag}</span>
								<h3>{*name}</h3>
								<p>{*desc}</p>
							</article>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
fn Testimonials() -> impl IntoView {
	view! {
		<section id="testimonials" class="testimonials">
			{TESTIMONIALS
				.iter()
				.map(|(org, quote)| {
					view! {
						<figure class="testimonial">
							<blockquote>{*quote}</blockquote>
							<figcaption>{*org}</figcaption>
						</figure>
					}
				})
				.collect_view()}
		</section>
	}
}

#[component]
fn Stats() -> impl IntoView {
	view! {
		<section id="stats" class="stats">
			{STATS
				.iter()
				.map(|(value, label)| {
					view! {
						<div class="stat">
							<span class="stat-value">{*value}</span>
							<span class="stat-label">{*label}</span>
						</div>
					}
				})
				.collect_view()}
		</section>
	}
}

/// The logo drawn in particles. Stays fully visible regardless of scroll.
#[component]
fn LogoShowcase(config: EngineConfig) -> impl IntoView {
	view! {
		<section id="logo" class="logo-showcase">
			<div class="logo-stage">
				<ParticleField
					scroll_progress=Signal::stored(0.0)
					mode=ShapeMode::Silhouette
					config=config
				/>
			</div>
			<p class="section-lead">"One platform. Every agent working together."</p>
		</section>
	}
}

#[component]
fn Footer() -> impl IntoView {
	view! {
		<footer id="contact" class="footer">
			<span class="brand-name">"Biz.AI"</span>
			<span class="footer-note">"Enterprise AI agents for every team."</span>
			<a href="mailto:hello@example.com">"hello@example.com"</a>
		</footer>
	}
}

/// The whole page, with both particle fields sharing one configuration.
#[component]
pub fn LandingPage(config: EngineConfig) -> impl IntoView {
	view! {
		<div class="landing-page">
			<Navbar />
			<Hero config=config.clone() />
			<Solutions />
			<Testimonials />
			<Stats />
			<LogoShowcase config=config />
			<Footer />
		</div>
	}
}
