use crate::adapters::pixel_format::packed_to_rgb_bytes;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    if let Some(parent) = filepath.as_ref().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.size().width();
    let height = buffer.size().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(&packed_to_rgb_bytes(buffer.data()))?;

    Ok(())
}
