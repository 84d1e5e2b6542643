use std::path::Path;
use std::time::Instant;

use crate::adapters::rand_sampler::ThreadRngSampler;
use crate::controllers::explorer::data::view_state::ViewState;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::maps::quadratic::QuadraticMap;
use crate::storage::write_ppm::write_ppm;

/// Renders one frame of the default view and writes it as a PPM file.
pub fn snapshot_controller(
    size: FrameSize,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = ViewState::default();
    let mut buffer = FrameBuffer::new(size);
    let mut sampler = ThreadRngSampler::new();

    println!("Rendering Julia set...");
    println!("Image size: {}x{}", size.width(), size.height());
    println!(
        "Seed {:.6} + {:.6}i",
        state.seed().real,
        state.seed().imag
    );
    println!(
        "Maxiter {}, Samples {}",
        state.max_iterations(),
        state.samples()
    );

    let start = Instant::now();
    render_frame(
        &mut buffer,
        state.viewport(),
        state.seed(),
        &QuadraticMap,
        state.max_iterations(),
        state.samples(),
        &mut sampler,
    );
    println!("Duration:   {:?}", start.elapsed());

    write_ppm(&buffer, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
