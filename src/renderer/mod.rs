//! Canvas rendering module
//!
//! Uses the 2D canvas context; the whole scene is three glyphs and a rectangle.

pub mod canvas;

pub use canvas::CanvasRenderer;
