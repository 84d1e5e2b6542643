use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel position to its point in the complex plane, used for click
/// handling.
///
/// Both axes are normalized by the frame's pixel width, so the imaginary
/// axis reuses the real-axis scale; on a non-square frame a click lands
/// slightly off the renderer's vertical grid.
#[must_use]
pub fn pixel_to_plane(pixel: Point, viewport: Viewport, size: FrameSize) -> Complex {
    let width_px = f64::from(size.width());

    Complex {
        real: viewport.x_min() + viewport.width() * f64::from(pixel.x) / width_px,
        imag: viewport.y_min(size) + viewport.width() * f64::from(pixel.y) / width_px,
    }
}
