use std::error::Error;
use std::fmt;

const DEFAULT_WIDTH: u32 = 768;
const DEFAULT_HEIGHT: u32 = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSizeError {
    InvalidSize { width: u32, height: u32 },
    InvalidArgument { argument: String },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame size must be positive: {}x{}", width, height)
            }
            Self::InvalidArgument { argument } => {
                write!(f, "frame dimension is not a number: {}", argument)
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Pixel dimensions of the image, fixed for the lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Builds a frame size from process arguments: no arguments fall back to
    /// 768x512, a width alone gives a square image, width and height are
    /// taken as given.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, FrameSizeError> {
        let width = match args.next() {
            Some(argument) => parse_dimension(&argument)?,
            None => return Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        };

        let height = match args.next() {
            Some(argument) => parse_dimension(&argument)?,
            None => width,
        };

        Self::new(width, height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn parse_dimension(argument: &str) -> Result<u32, FrameSizeError> {
    argument
        .parse()
        .map_err(|_| FrameSizeError::InvalidArgument {
            argument: argument.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_frame_size_new_valid() {
        let size = FrameSize::new(768, 512).unwrap();

        assert_eq!(size.width(), 768);
        assert_eq!(size.height(), 512);
        assert_eq!(size.pixel_count(), 393216);
    }

    #[test]
    fn test_frame_size_dimensions_must_be_positive() {
        assert_eq!(
            FrameSize::new(0, 512),
            Err(FrameSizeError::InvalidSize {
                width: 0,
                height: 512
            })
        );
        assert_eq!(
            FrameSize::new(768, 0),
            Err(FrameSizeError::InvalidSize {
                width: 768,
                height: 0
            })
        );
    }

    #[test]
    fn test_from_args_defaults() {
        let size = FrameSize::from_args(args(&[])).unwrap();

        assert_eq!(size.width(), 768);
        assert_eq!(size.height(), 512);
    }

    #[test]
    fn test_from_args_width_alone_gives_square_image() {
        let size = FrameSize::from_args(args(&["1024"])).unwrap();

        assert_eq!(size.width(), 1024);
        assert_eq!(size.height(), 1024);
    }

    #[test]
    fn test_from_args_width_and_height() {
        let size = FrameSize::from_args(args(&["800", "600"])).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
    }

    #[test]
    fn test_from_args_rejects_garbage() {
        let result = FrameSize::from_args(args(&["banana"]));

        assert_eq!(
            result,
            Err(FrameSizeError::InvalidArgument {
                argument: "banana".to_string()
            })
        );
    }

    #[test]
    fn test_from_args_rejects_zero() {
        let result = FrameSize::from_args(args(&["0"]));

        assert_eq!(
            result,
            Err(FrameSizeError::InvalidSize {
                width: 0,
                height: 0
            })
        );
    }
}
