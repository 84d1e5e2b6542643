pub mod estimate_escape;
pub mod ports;
