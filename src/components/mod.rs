//! Page components.

pub mod hero_text;
pub mod landing;
pub mod particle_field;
pub mod scroll;
