use clap::builder::PossibleValue;
use clap::ValueEnum;
use image::ImageFormat;

/// Image formats that can be enabled for decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormatOption {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl ValueEnum for ImageFormatOption {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Jpeg,
            Self::Png,
            Self::Gif,
            Self::Bmp,
            Self::Tiff,
            Self::WebP,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Jpeg => Some(PossibleValue::new("Jpeg")),
            Self::Png => Some(PossibleValue::new("Png")),
            Self::Gif => Some(PossibleValue::new("Gif")),
            Self::Bmp => Some(PossibleValue::new("Bmp")),
            Self::Tiff => Some(PossibleValue::new("Tiff")),
            Self::WebP => Some(PossibleValue::new("WebP")),
        }
    }
}

impl From<ImageFormatOption> for ImageFormat {
    fn from(value: ImageFormatOption) -> Self {
        match value {
            ImageFormatOption::Jpeg => ImageFormat::Jpeg,
            ImageFormatOption::Png => ImageFormat::Png,
            ImageFormatOption::Gif => ImageFormat::Gif,
            ImageFormatOption::Bmp => ImageFormat::Bmp,
            ImageFormatOption::Tiff => ImageFormat::Tiff,
            ImageFormatOption::WebP => ImageFormat::WebP,
        }
    }
}

/// The set of formats a grid reader is allowed to decode.
///
/// Created once at start up and handed to every reader. Input in a format
/// that is not registered is rejected before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatRegistry {
    formats: Vec<ImageFormat>,
}

impl FormatRegistry {
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        if !self.supports(format) {
            self.formats.push(format);
        }
        self
    }

    pub fn supports(&self, format: ImageFormat) -> bool {
        self.formats.contains(&format)
    }

    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::empty()
            .with_format(ImageFormat::Jpeg)
            .with_format(ImageFormat::Png)
    }
}

impl FromIterator<ImageFormatOption> for FormatRegistry {
    fn from_iter<I: IntoIterator<Item = ImageFormatOption>>(iter: I) -> Self {
        iter.into_iter()
            .map(ImageFormat::from)
            .fold(Self::empty(), Self::with_format)
    }
}
