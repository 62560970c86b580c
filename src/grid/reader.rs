use std::io::{Cursor, Read};

use image::ImageReader;

use super::format::FormatRegistry;
use super::PixelGrid;
use crate::Error;

pub trait GridReader {
    fn read_grid(&mut self) -> crate::Result<PixelGrid>;
}

/// Decodes an encoded raster image into a [`PixelGrid`].
///
/// The format is detected from the content, not from a file name, and must be
/// enabled in the [`FormatRegistry`].
pub struct DecodingGridReader<'a, T: Read> {
    reader: T,
    registry: &'a FormatRegistry,
}

impl<'a, T: Read> DecodingGridReader<'a, T> {
    pub fn new(reader: T, registry: &'a FormatRegistry) -> Self {
        Self { reader, registry }
    }

    fn read_to_end(&mut self) -> crate::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.reader
            .read_to_end(&mut buffer)
            .map_err(Error::UnableToReadImage)?;
        log::debug!("Read {} bytes of image data", buffer.len());
        Ok(buffer)
    }
}

impl<T: Read> GridReader for DecodingGridReader<'_, T> {
    fn read_grid(&mut self) -> crate::Result<PixelGrid> {
        let buffer = self.read_to_end()?;
        let image_reader = ImageReader::new(Cursor::new(buffer))
            .with_guessed_format()
            .map_err(Error::UnableToReadImage)?;
        let format = image_reader
            .format()
            .ok_or(Error::UnrecognizedImageFormat)?;
        if !self.registry.supports(format) {
            return Err(Error::UnsupportedImageFormat(format));
        }
        let image = image_reader
            .decode()
            .map_err(Error::FailedToDecodeImage)?;
        log::info!(
            "Decoded {:?} image of {}x{} pixels",
            format,
            image.width(),
            image.height()
        );
        Ok(PixelGrid::from(&image))
    }
}
