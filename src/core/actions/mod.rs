pub mod estimate_escape;
pub mod render_frame;
