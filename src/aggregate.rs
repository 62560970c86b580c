use std::ops::AddAssign;

use crate::color::{AverageColor, Pixel};
use crate::error::Error;
use crate::grid::PixelGrid;
use crate::Result;

#[derive(Default)]
struct ChannelSums {
    red: u64,
    green: u64,
    blue: u64,
    alpha: u64,
}

impl AddAssign<&Pixel> for ChannelSums {
    fn add_assign(&mut self, rhs: &Pixel) {
        self.red += u64::from(rhs.red);
        self.green += u64::from(rhs.green);
        self.blue += u64::from(rhs.blue);
        self.alpha += u64::from(rhs.alpha);
    }
}

impl ChannelSums {
    /// Every sum covers at most `pixel_count` pixels, so each quotient fits
    /// into 8 bits.
    fn divide(&self, pixel_count: u64) -> AverageColor {
        AverageColor {
            red: (self.red / pixel_count) as u8,
            green: (self.green / pixel_count) as u8,
            blue: (self.blue / pixel_count) as u8,
            alpha: (self.alpha / pixel_count) as u8,
        }
    }
}

impl PixelGrid {
    fn rectangular_dimensions(&self) -> Result<(usize, usize)> {
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }
        let ragged_column = self
            .columns()
            .enumerate()
            .find(|(_, column)| column.len() != height);
        if let Some((column, pixels)) = ragged_column {
            return Err(Error::RaggedGrid {
                column,
                expected: height,
                actual: pixels.len(),
            });
        }
        Ok((width, height))
    }

    /// Calculates the mean of every channel, truncated toward zero.
    ///
    /// The divisor is the pixel count of the whole grid, while the sums leave
    /// out the last column and the last row. A grid that is one pixel wide or
    /// one pixel high therefore always averages to zero.
    ///
    /// Fails with [`Error::EmptyGrid`] if the grid has no pixels and with
    /// [`Error::RaggedGrid`] if its columns differ in length.
    pub fn average(&self) -> Result<AverageColor> {
        let (width, height) = self.rectangular_dimensions()?;
        let pixel_count = width as u64 * height as u64;
        let mut sums = ChannelSums::default();
        for column in self.columns().take(width - 1) {
            for pixel in &column[..height - 1] {
                sums += pixel;
            }
        }
        Ok(sums.divide(pixel_count))
    }

    /// Perceived brightness of the [average](PixelGrid::average) color.
    pub fn brightness(&self) -> Result<f64> {
        Ok(self.average()?.brightness())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::thread;

    use crate::color::{AverageColor, Pixel};
    use crate::error::Error;
    use crate::grid::PixelGrid;

    const SAMPLE: Pixel = Pixel::new(100, 200, 50, 255);

    fn weighted_norm(color: &AverageColor) -> f64 {
        let red = f64::from(color.red);
        let green = f64::from(color.green);
        let blue = f64::from(color.blue);
        (0.241 * red * red + 0.691 * green * green + 0.068 * blue * blue).sqrt()
    }

    #[test]
    fn average_of_uniform_three_by_three_grid() {
        let grid = PixelGrid::filled(3, 3, SAMPLE);
        let average = grid.average().expect("grid is not empty");
        // four of nine pixels are summed
        let expected = AverageColor {
            red: 44,
            green: 88,
            blue: 22,
            alpha: 113,
        };
        assert_eq!(average, expected);
    }

    #[test]
    fn brightness_of_uniform_three_by_three_grid() {
        let grid = PixelGrid::filled(3, 3, SAMPLE);
        let brightness = grid.brightness().expect("grid is not empty");
        let expected = 5850.592_f64.sqrt();
        assert!(
            (brightness - expected).abs() < 1e-9,
            "brightness was {}",
            brightness
        );
        assert!(brightness > 76.48 && brightness < 76.49);
    }

    #[test]
    fn brightness_matches_weighted_norm_of_average() {
        for (width, height) in [(2, 2), (2, 5), (7, 3), (16, 16)] {
            let grid = PixelGrid::filled(width, height, SAMPLE);
            let average = grid.average().expect("grid is not empty");
            let brightness = grid.brightness().expect("grid is not empty");
            assert!((brightness - weighted_norm(&average)).abs() < 1e-9);
        }
    }

    #[test]
    fn average_of_uniform_two_by_two_grid() {
        let grid = PixelGrid::filled(2, 2, Pixel::new(200, 100, 4, 255));
        let average = grid.average().expect("grid is not empty");
        let expected = AverageColor {
            red: 50,
            green: 25,
            blue: 1,
            alpha: 63,
        };
        assert_eq!(average, expected);
    }

    #[test]
    fn average_excludes_last_column_and_row() {
        let edge = Pixel::new(255, 255, 255, 255);
        let grid = PixelGrid::from_columns(vec![
            vec![Pixel::new(10, 20, 30, 40), edge],
            vec![Pixel::new(20, 40, 60, 80), edge],
            vec![edge, edge],
        ]);
        let average = grid.average().expect("grid is not empty");
        let expected = AverageColor {
            red: 5,
            green: 10,
            blue: 15,
            alpha: 20,
        };
        assert_eq!(average, expected);
    }

    #[test]
    fn average_of_single_column_is_zero() {
        let grid = PixelGrid::filled(1, 5, SAMPLE);
        assert_eq!(grid.average().unwrap(), AverageColor::default());
        assert_eq!(grid.brightness().unwrap(), 0_f64);
    }

    #[test]
    fn average_of_single_row_is_zero() {
        let grid = PixelGrid::filled(5, 1, SAMPLE);
        assert_eq!(grid.average().unwrap(), AverageColor::default());
    }

    #[test]
    fn average_of_single_pixel_is_zero() {
        let grid = PixelGrid::filled(1, 1, Pixel::new(255, 255, 255, 255));
        assert_eq!(grid.average().unwrap(), AverageColor::default());
    }

    #[test]
    fn average_of_large_white_grid_does_not_overflow() {
        let grid = PixelGrid::filled(300, 300, Pixel::new(255, 255, 255, 255));
        let average = grid.average().expect("grid is not empty");
        // 255 * 299 * 299 / 90000
        let expected = AverageColor {
            red: 253,
            green: 253,
            blue: 253,
            alpha: 253,
        };
        assert_eq!(average, expected);
        let brightness = grid.brightness().expect("grid is not empty");
        assert!(brightness >= 0_f64 && brightness <= 255_f64);
    }

    #[test]
    fn brightness_stays_in_range() {
        let pixels = [
            Pixel::new(0, 0, 0, 0),
            Pixel::new(255, 255, 255, 255),
            Pixel::new(255, 0, 0, 255),
            Pixel::new(0, 255, 0, 0),
            Pixel::new(0, 0, 255, 128),
            Pixel::new(17, 230, 99, 3),
        ];
        for pixel in pixels {
            for (width, height) in [(1, 1), (2, 2), (3, 9), (10, 4)] {
                let grid = PixelGrid::filled(width, height, pixel);
                let brightness = grid.brightness().expect("grid is not empty");
                assert!(
                    (0_f64..=255_f64).contains(&brightness),
                    "brightness {} out of range",
                    brightness
                );
            }
        }
    }

    #[test]
    fn average_is_deterministic() {
        let columns: Vec<Vec<Pixel>> = (0..6_u8)
            .map(|x| {
                (0..4_u8)
                    .map(|y| Pixel::new(x * 40, y * 60, x * y * 10, 255 - x * y))
                    .collect()
            })
            .collect();
        let grid = PixelGrid::from_columns(columns);
        let first = grid.average().expect("grid is not empty");
        let second = grid.average().expect("grid is not empty");
        assert_eq!(first, second);
        assert_eq!(grid.brightness().unwrap(), grid.brightness().unwrap());
    }

    #[test]
    fn average_of_grid_without_columns() {
        let result = PixelGrid::default().average();
        assert!(matches!(
            result,
            Err(Error::EmptyGrid {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn average_of_grid_without_rows() {
        let result = PixelGrid::from_columns(vec![Vec::new(), Vec::new()]).brightness();
        assert!(matches!(
            result,
            Err(Error::EmptyGrid {
                width: 2,
                height: 0
            })
        ));
    }

    #[test]
    fn average_of_ragged_grid() {
        let grid = PixelGrid::from_columns(vec![vec![SAMPLE; 3], vec![SAMPLE; 3], vec![SAMPLE; 2]]);
        let result = grid.average();
        assert!(matches!(
            result,
            Err(Error::RaggedGrid {
                column: 2,
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn average_of_shared_grid_on_many_threads() {
        let grid = Arc::new(PixelGrid::filled(3, 3, SAMPLE));
        let expected = grid.average().expect("grid is not empty");
        let expected_brightness = grid.brightness().expect("grid is not empty");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let grid = Arc::clone(&grid);
                thread::spawn(move || (grid.average(), grid.brightness()))
            })
            .collect();
        for handle in handles {
            let (average, brightness) = handle.join().expect("worker thread panicked");
            assert_eq!(average.expect("grid is not empty"), expected);
            assert_eq!(brightness.expect("grid is not empty"), expected_brightness);
        }
    }
}
