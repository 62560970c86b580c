use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

use crate::color::Pixel;

pub mod format;
pub mod reader;

/// A two dimensional arrangement of pixels, addressed as `grid[column][row]`.
///
/// The grid is not validated on construction. Width is the number of columns
/// and height is the length of the first column; the aggregation checks that
/// all columns share that length before it reads any pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    columns: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    pub fn from_columns(columns: Vec<Vec<Pixel>>) -> Self {
        Self { columns }
    }

    /// Builds a grid from row major data. Rows of unequal length result in
    /// columns of unequal length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..width)
            .map(|column_index| {
                rows.iter()
                    .filter_map(|row| row.get(column_index).copied())
                    .collect()
            })
            .collect();
        Self { columns }
    }

    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            columns: vec![vec![pixel; height]; width],
        }
    }

    fn from_fn<F>(width: u32, height: u32, pixel_at: F) -> Self
    where
        F: Fn(u32, u32) -> Pixel,
    {
        let columns = (0..width)
            .map(|x| (0..height).map(|y| pixel_at(x, y)).collect())
            .collect();
        Self { columns }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn pixel(&self, column_index: usize, row_index: usize) -> Option<Pixel> {
        self.columns
            .get(column_index)
            .and_then(|column| column.get(row_index))
            .copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = &[Pixel]> {
        self.columns.iter().map(Vec::as_slice)
    }
}

impl From<&RgbaImage> for PixelGrid {
    fn from(value: &RgbaImage) -> Self {
        PixelGrid::from_fn(value.width(), value.height(), |x, y| {
            Pixel::from(value.get_pixel(x, y))
        })
    }
}

impl From<&ImageBuffer<Rgba<u16>, Vec<u16>>> for PixelGrid {
    fn from(value: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> Self {
        PixelGrid::from_fn(value.width(), value.height(), |x, y| {
            Pixel::from(value.get_pixel(x, y))
        })
    }
}

/// Samples a decoded image the way the grid reader does: every channel is
/// taken at 16 bit depth, premultiplied by alpha and truncated to 8 bits, so
/// the result does not depend on the bit depth the image was stored with.
impl From<&DynamicImage> for PixelGrid {
    fn from(value: &DynamicImage) -> Self {
        let image = value.to_rgba16();
        PixelGrid::from_fn(image.width(), image.height(), |x, y| {
            Pixel::premultiplied(image.get_pixel(x, y))
        })
    }
}
