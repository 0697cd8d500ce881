//! Software rasterizer for particle frames. Shared by the live preview and
//! the flipbook exporter so both draw pixel-identical frames.

pub mod canvas;
pub mod renderer;
pub mod shapes;

pub use canvas::Canvas;
pub use renderer::{draw_gizmo, render_frame};
pub use shapes::ShapePath;
