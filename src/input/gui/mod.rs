//! GUI input adapter for the interactive explorer, using winit for window
//! management and pixels for framebuffer rendering.

mod app;

pub use app::run_gui;
