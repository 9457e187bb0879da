//! Animated sun-and-planets hero background.
//!
//! - [`scene`]: procedural generation and the time-to-pose functions
//! - [`camera`]: perspective projection onto the canvas
//! - `render`: canvas drawing
//! - [`OrbitalAnimation`]: frame loop and resize wiring
//!
//! ```ignore
//! view! { <SolarSystem /> }
//! ```

mod animation;
pub mod camera;
mod component;
mod render;
pub mod scene;

pub use animation::OrbitalAnimation;
pub use camera::Camera;
pub use component::SolarSystem;
pub use scene::{OrbitalScene, SceneConfig, SceneFrame};
