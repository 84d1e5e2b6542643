//! Interaction controller for the explorer.
//!
//! Owns the view state and the frame buffer, turns discrete input events
//! into state mutations, and runs one synchronous render-and-present cycle
//! per event through the `FrameSink` port.

pub mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::{EventOutcome, ExplorerController};
pub use events::input_event::{InputEvent, KeyCommand, PointerButton};
pub use ports::frame_sink::FrameSink;
