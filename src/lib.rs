use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

pub use batch::analyze_image_files;
pub use cli::CLIParser;
pub use color::{AverageColor, Pixel};
pub use error::{Error, FailureStage};
pub use grid::{
    format::{FormatRegistry, ImageFormatOption},
    reader::{DecodingGridReader, GridReader},
    PixelGrid,
};
pub use logger::init_logger;
pub use report::{Metric, Report};

mod aggregate;
mod batch;
mod cli;
mod color;
mod error;
mod grid;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    number_of_threads: usize,
    metric: Metric,
    formats: Vec<ImageFormatOption>,
}

impl Arguments {
    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn format_registry(&self) -> FormatRegistry {
        self.formats.iter().copied().collect()
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    let display_path = file_path.display().to_string();
    File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputFileNotFound(display_path),
        _ => Error::UnableToOpenInputFileForReading(display_path, e),
    })
}

/// Decodes the image at `file_path` and computes its average color and
/// perceived brightness.
pub fn analyze_image_file(file_path: &Path, registry: &FormatRegistry) -> Result<Report> {
    let input_file = open_input_file(file_path)?;
    let mut reader = DecodingGridReader::new(BufReader::new(input_file), registry);
    let grid = reader.read_grid()?;
    let average = grid.average()?;
    Ok(Report::from(average))
}
