use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::color::AverageColor;

/// Which statistics to print for every analyzed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Average,
    Brightness,
    All,
}

impl ValueEnum for Metric {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Average, Self::Brightness, Self::All]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Average => Some(PossibleValue::new("Average")),
            Self::Brightness => Some(PossibleValue::new("Brightness")),
            Self::All => Some(PossibleValue::new("All")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub average: AverageColor,
    pub brightness: f64,
}

impl From<AverageColor> for Report {
    fn from(value: AverageColor) -> Self {
        Report {
            average: value,
            brightness: value.brightness(),
        }
    }
}

impl Report {
    pub fn summary(&self, metric: Metric) -> String {
        match metric {
            Metric::Average => format!("average {}", self.average),
            Metric::Brightness => format!("brightness {:.3}", self.brightness),
            Metric::All => format!(
                "average {} brightness {:.3}",
                self.average, self.brightness
            ),
        }
    }
}
