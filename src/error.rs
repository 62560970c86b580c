use std::fmt::Display;

use image::{ImageError, ImageFormat};

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadImage(std::io::Error),
    UnrecognizedImageFormat,
    UnsupportedImageFormat(ImageFormat),
    FailedToDecodeImage(ImageError),
    EmptyGrid {
        width: usize,
        height: usize,
    },
    RaggedGrid {
        column: usize,
        expected: usize,
        actual: usize,
    },
    WorkerPanicked,
}

/// The point of the analysis at which an [`Error`] occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureStage {
    Input,
    Decode,
    Aggregation,
    Worker,
}

impl Error {
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::InputFileNotFound(_) | Self::UnableToOpenInputFileForReading(_, _) => {
                FailureStage::Input
            }
            Self::UnableToReadImage(_)
            | Self::UnrecognizedImageFormat
            | Self::UnsupportedImageFormat(_)
            | Self::FailedToDecodeImage(_) => FailureStage::Decode,
            Self::EmptyGrid { .. } | Self::RaggedGrid { .. } => FailureStage::Aggregation,
            Self::WorkerPanicked => FailureStage::Worker,
        }
    }
}

impl Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Opening input"),
            Self::Decode => write!(f, "Decoding"),
            Self::Aggregation => write!(f, "Aggregation"),
            Self::Worker => write!(f, "Analysis worker"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadImage(error) => {
                write!(f, "Unable to read image data: {}", error)
            }
            Self::UnrecognizedImageFormat => {
                write!(f, "Could not recognize the image format of the input")
            }
            Self::UnsupportedImageFormat(format) => {
                write!(f, "Image format {:?} is not enabled for decoding", format)
            }
            Self::FailedToDecodeImage(error) => {
                write!(f, "Could not decode input image: {}", error)
            }
            Self::EmptyGrid { width, height } => {
                write!(
                    f,
                    "Pixel grid of {}x{} contains no pixels to aggregate",
                    width, height
                )
            }
            Self::RaggedGrid {
                column,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Pixel grid is not rectangular. Column {} has {} rows, but expected {}.",
                    column, actual, expected
                )
            }
            Self::WorkerPanicked => {
                write!(f, "Analysis thread stopped before reporting a result")
            }
        }
    }
}

impl std::error::Error for Error {}
