use crate::core::data::frame_buffer::FrameBuffer;
use std::error::Error;

/// Display surface the controller hands each finished frame to.
pub trait FrameSink {
    type Failure: Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Failure>;
}
