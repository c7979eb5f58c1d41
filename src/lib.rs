pub mod back_to_top;
pub mod clock;
pub mod config;
mod content;
pub mod cursor_trail;
pub mod effects;
pub mod error;
#[cfg(test)]
mod fake;
pub mod konami;
pub mod nav;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod site;
pub mod skills;
pub mod stats;
pub mod styles;
pub mod typing;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Scheduler, VirtualClock};
pub use config::FxConfig;
pub use effects::Effects;
pub use error::FxError;
pub use page::{Intersection, Page};
