/// Showcase Core Library - platform-free logic for the site widgets
///
/// Holds everything the hero animation and the research carousel do that
/// does not touch the browser: mesh generation, projection, the render loop
/// seam, the carousel state machine, layout math and card markup.

pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod render_loop;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use carousel::{Carousel, Measure, Phase, TrackContent};
pub use config::{CarouselConfig, HeroConfig, SpinRate};
pub use error::{ConfigError, LoadError};
pub use geometry::{Edge, Mesh, Triangle, Vertex};
pub use projection::{Camera, ScreenPoint, Viewport};
pub use render_loop::{FrameScheduler, ScenePainter};
pub use scene::HeroScene;
pub use transform::{RotationState, Transform};
