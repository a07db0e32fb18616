//! Rendering seam between the engines and whatever draws them.
//!
//! Engines describe a frame through the [`Surface`] trait. The crate ships
//! [`RecordingSurface`] so frames can be inspected without a display.

mod recording;
mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Color, Font, Rect, Surface, TextAlign, TextBaseline};
