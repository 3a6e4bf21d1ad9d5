//! Particle field background component.
//!
//! Renders thousands of small particles on an HTML canvas that:
//! - Gather from outside the viewport into a target shape over a few seconds
//! - Keep moving once arrived (orbit, pulsation, twinkle)
//! - Bend toward the mouse pointer
//! - Fade with page scroll (ring mode only)
//!
//! Two shapes are built in: a distorted glowing [`ShapeMode::Ring`] and a
//! clustered logo [`ShapeMode::Silhouette`].
//!
//! # Example
//!
//! ```ignore
//! use agent_landing::components::particle_field::{ParticleField, ShapeMode};
//!
//! view! {
//!     <section style="position: relative">
//!         <ParticleField scroll_progress=progress mode=ShapeMode::Ring />
//!     </section>
//! }
//! ```

mod component;
pub mod config;
pub mod easing;
pub mod field;
pub mod lifecycle;
pub mod opacity;
pub mod pointer;
mod render;
pub mod sampling;
pub mod shape;
pub mod simulation;
pub mod state;
pub mod surface;
pub mod theme;

pub use component::ParticleField;
pub use config::{ConfigError, EngineConfig};
pub use opacity::FadeCurve;
pub use render::SurfaceError;
pub use shape::ShapeMode;
