use serde::{Deserialize, Serialize};

use crate::{SeriesDefinition, Unit};

/// Fixed composition data of the dashboard: which lines the overview pairs,
/// the axes of the exploratory chart, the sector panels and the static
/// presentation content.
#[derive(Debug, Deserialize, Clone)]
pub struct Layout {
    pub title: String,
    pub overview: OverviewLayout,
    pub main: MainLayout,
    pub sectors: SectorsLayout,
    pub presentation: PresentationLayout,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverviewLayout {
    pub title: String,
    pub description: String,
    pub left_title: String,
    pub right_title: String,
    /// May reference ungoverned record fields such as the index value.
    pub left: SeriesDefinition,
    pub right: SeriesDefinition,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainLayout {
    pub title: String,
    pub description: String,
    pub left_title: String,
    pub left_unit: Unit,
    pub right_title: String,
    pub right_unit: Unit,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectorsLayout {
    pub title: String,
    pub sectors: Vec<String>,
    /// Indicator catalog id plotted on the right axis of every sector panel.
    pub indicator: String,
    pub indicator_label: Option<String>,
    pub margin: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PresentationLayout {
    pub kpis: Vec<Kpi>,
    pub correlation: CorrelationTable,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: String,
    pub tone: Tone,
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Positive => "green",
            Tone::Neutral => "orange",
            Tone::Negative => "red",
        }
    }
}

/// Illustrative reference values, not computed from the records.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorrelationTable {
    pub title: String,
    pub description: String,
    pub corner: String,
    pub columns: Vec<String>,
    pub rows: Vec<CorrelationRow>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorrelationRow {
    pub metric: String,
    pub values: Vec<f64>,
}

impl CorrelationTable {
    /// First row whose width differs from the column count.
    pub fn malformed_row(&self) -> Option<&CorrelationRow> {
        self.rows.iter().find(|row| row.values.len() != self.columns.len())
    }
}
