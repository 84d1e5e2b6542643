use crate::core::actions::estimate_escape::estimate_escape::stability;
use crate::core::actions::estimate_escape::ports::escape_map::EscapeMap;
use crate::core::actions::render_frame::ports::sample_source::SampleSource;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;

/// Recomputes every pixel of `buffer` for the given view.
///
/// Each pixel averages `samples` stability estimates taken at jittered
/// sub-pixel positions (one draw from `sampler` per axis per sample) and is
/// written as a packed grayscale colour. Callers keep `max_iterations` and
/// `samples` at 1 or above; the renderer itself validates nothing.
pub fn render_frame<M: EscapeMap, S: SampleSource>(
    buffer: &mut FrameBuffer,
    viewport: Viewport,
    seed: Complex,
    map: &M,
    max_iterations: u32,
    samples: u32,
    sampler: &mut S,
) {
    let size = buffer.size();
    let width_px = f64::from(size.width());
    let height_px = f64::from(size.height());

    let x_min = viewport.x_min();
    let x_max = viewport.x_max();
    let y_min = viewport.y_min(size);
    let y_max = viewport.y_max(size);

    buffer.fill_with(|pixel| {
        let mut total = 0.0;

        for _ in 0..samples {
            let x = x_min + (x_max - x_min) * (f64::from(pixel.x) + sampler.next_unit()) / width_px;
            let y = y_min + (y_max - y_min) * (f64::from(pixel.y) + sampler.next_unit()) / height_px;

            total += stability(Complex { real: x, imag: y }, seed, map, max_iterations);
        }

        Colour::from_stability(total / f64::from(samples)).packed()
    });
}
