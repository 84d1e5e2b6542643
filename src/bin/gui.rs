fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = julia_explorer::FrameSize::from_args(std::env::args().skip(1))?;

    julia_explorer::run_gui(size);

    Ok(())
}
