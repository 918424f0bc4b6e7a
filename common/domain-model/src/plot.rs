use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Color, Period, Unit};

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Left,
    Right,
}

impl Axis {
    pub fn index(&self) -> usize {
        match self {
            Axis::Left => 0,
            Axis::Right => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Range of the given values, `None` when there is nothing to scale to.
    pub fn from_values(values: impl IntoIterator<Item=f64>) -> Option<Self> {
        values.into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |domain, value| match domain {
                None => Some(AxisDomain { min: value, max: value }),
                Some(AxisDomain { min, max }) => Some(AxisDomain {
                    min: min.min(value),
                    max: max.max(value),
                }),
            })
    }

    pub fn padded(self, margin: f64) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: Option<String>,
    pub unit: Unit,
    pub domain: Option<AxisDomain>,
}

impl AxisSpec {
    pub fn new(title: Option<&str>, unit: Unit) -> Self {
        Self {
            title: title.map(str::to_string),
            unit,
            domain: None,
        }
    }
}

/// One line of a chart. `points` is aligned with the periods of the owning
/// [`PlotSpec`], `None` marks a gap.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlotSeries {
    pub series_id: String,
    pub axis: Axis,
    pub color: Color,
    pub style: LineStyle,
    pub label: String,
    pub unit: Unit,
    pub show_symbols: bool,
    pub points: Vec<Option<f64>>,
}

impl PlotSeries {
    pub fn is_dashed(&self) -> bool {
        self.style == LineStyle::Dashed
    }

    pub fn values(&self) -> impl Iterator<Item=f64> + '_ {
        self.points.iter().flatten().copied()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub periods: Vec<Period>,
    pub left: AxisSpec,
    pub right: AxisSpec,
    pub series: Vec<PlotSeries>,
}

impl PlotSpec {
    pub fn on_axis(&self, axis: Axis) -> impl Iterator<Item=&PlotSeries> {
        self.series.iter().filter(move |series| series.axis == axis)
    }

    pub fn series(&self, series_id: &str) -> Option<&PlotSeries> {
        self.series.iter().find(|series| series.series_id == series_id)
    }

    pub fn labels(&self) -> Vec<String> {
        self.series.iter()
            .map(|series| series.label.clone())
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SectorPlot {
    pub sector: String,
    pub plot: PlotSpec,
}
