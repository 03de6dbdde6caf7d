//! Toybox — the toy capabilities served by `toybox-server`: square roots,
//! SVG badges, templated greetings, and a few canned text responses.

pub mod badge;
pub mod greeting;
pub mod math;
pub mod templates;
pub mod types;

pub use badge::{resolve_color, Badge, DEFAULT_COLOR, MAX_BADGE_TEXT};
pub use greeting::greet;
pub use math::square_root;
pub use templates::{review_prompt, weather_report, SamplingConfig};
pub use types::*;
