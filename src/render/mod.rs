pub mod canvas;
pub mod renderer;

pub use canvas::PixelCanvas;
pub use renderer::{paint_color, Renderer};
