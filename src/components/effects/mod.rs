//! Decorative effects: particle background, custom cursor, scroll tracking
//! and text reveal.
//!
//! Each effect is split into a host-driven engine (`particles`, `cursor`,
//! `scroll`, `reveal`) that can be exercised against a
//! [`VirtualHost`](crate::runtime::VirtualHost), and a Leptos component that
//! binds the engine to signals.

mod bubbles;
pub mod cursor;
mod custom_cursor;
pub mod particles;
pub mod reveal;
pub mod scroll;
mod text_reveal;

pub use bubbles::BubbleBackground;
pub use cursor::{CursorConfig, CursorState, CursorTracker};
pub use custom_cursor::CustomCursor;
pub use particles::{FieldConfig, Particle};
pub use reveal::{RevealConfig, RevealSchedule, StaggerReveal, TypewriterReveal};
pub use scroll::{ScrollConfig, ScrollState, ScrollTracker};
pub use text_reveal::{StaggerText, TypewriterText};
