use serde::{Deserialize, Serialize};

use crate::{Color, CorrelationTable, Kpi, PlotSpec, SectorPlot};

/// Everything the renderer needs to draw the dashboard page once.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub kpis: Vec<Kpi>,
    pub overview: ChartSection,
    pub exploratory: ExploratorySection,
    pub sectors: SectorSection,
    pub correlation: CorrelationTable,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChartSection {
    pub title: String,
    pub description: String,
    pub plot: PlotSpec,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExploratorySection {
    pub chart: ChartSection,
    pub stocks: Vec<ChecklistItem>,
    pub indicators: Vec<ChecklistItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SectorSection {
    pub title: String,
    pub panels: Vec<SectorPlot>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub color: Color,
    pub checked: bool,
}
