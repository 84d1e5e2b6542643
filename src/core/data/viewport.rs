use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidWidth { width: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "viewport width must be positive: {}", width)
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto the frame, described by its
/// centre and its span along the real axis. The imaginary span is derived
/// from the frame's aspect ratio so pixels stay square in plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    centre: Complex,
    width: f64,
}

impl Viewport {
    pub fn new(centre: Complex, width: f64) -> Result<Self, ViewportError> {
        if !(width > 0.0) {
            return Err(ViewportError::InvalidWidth { width });
        }

        Ok(Self { centre, width })
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.centre
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.centre.real - self.width / 2.0
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.centre.real + self.width / 2.0
    }

    #[must_use]
    pub fn y_min(&self, size: FrameSize) -> f64 {
        self.centre.imag - self.half_height(size)
    }

    #[must_use]
    pub fn y_max(&self, size: FrameSize) -> f64 {
        self.centre.imag + self.half_height(size)
    }

    #[must_use]
    pub fn half_height(&self, size: FrameSize) -> f64 {
        self.width * f64::from(size.height()) / (f64::from(size.width()) * 2.0)
    }

    #[must_use]
    pub fn recentred(self, centre: Complex) -> Self {
        Self { centre, ..self }
    }

    #[must_use]
    pub fn translated(self, delta: Complex) -> Self {
        Self {
            centre: self.centre + delta,
            width: self.width,
        }
    }

    /// Multiplies the real-axis span by `factor`, which must be positive.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        debug_assert!(factor > 0.0);

        Self {
            centre: self.centre,
            width: self.width * factor,
        }
    }
}
