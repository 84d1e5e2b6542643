mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use adapters::pixel_format::{copy_packed_to_rgba, packed_to_rgb_bytes};
pub use adapters::rand_sampler::ThreadRngSampler;
pub use controllers::explorer::{
    EventOutcome, ExplorerController, FrameSink, InputEvent, KeyCommand, PointerButton,
};
pub use controllers::explorer::data::view_state::ViewState;
pub use controllers::snapshot::snapshot_controller;
pub use crate::core::actions::estimate_escape::estimate_escape::{ESCAPE_RADIUS, escape, stability};
pub use crate::core::actions::estimate_escape::ports::escape_map::EscapeMap;
pub use crate::core::actions::render_frame::ports::sample_source::SampleSource;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::maps::quadratic::QuadraticMap;
pub use crate::core::util::pixel_to_plane::pixel_to_plane;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
