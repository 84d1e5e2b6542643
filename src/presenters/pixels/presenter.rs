use crate::adapters::pixel_format::copy_packed_to_rgba;
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::data::frame_buffer::FrameBuffer;
use pixels::Pixels;

/// Frame sink backed by a `pixels` surface: copies the packed buffer into
/// the surface's RGBA frame and presents it.
pub struct PixelsFrameSink {
    pixels: Pixels<'static>,
}

impl PixelsFrameSink {
    #[must_use]
    pub fn new(pixels: Pixels<'static>) -> Self {
        Self { pixels }
    }
}

impl FrameSink for PixelsFrameSink {
    type Failure = pixels::Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Failure> {
        copy_packed_to_rgba(frame.data(), self.pixels.frame_mut());
        self.pixels.render()
    }
}
