use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain_model::{CatalogKind, DashboardView, PlotSpec, Selection};

pub type Result<T> = std::result::Result<T, DashboardError>;

#[async_trait]
pub trait DashboardApi: Send + Sync + 'static {
    async fn current_selection(&self) -> Selection;
    async fn toggle_stock(&self, id: &str) -> Result<ToggleOutcome>;
    async fn toggle_indicator(&self, id: &str) -> Result<ToggleOutcome>;
    async fn get_main_plot(&self) -> Result<PlotSpec>;
    async fn get_view(&self) -> Result<DashboardView>;
    async fn get_dashboard_html(&self) -> Result<String>;
    async fn get_overview_chart_html(&self) -> Result<String>;
    async fn get_main_chart_html(&self) -> Result<String>;
    async fn get_sector_chart_html(&self, sector: &str) -> Result<String>;
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub kind: CatalogKind,
    pub id: String,
    pub toggled: Toggled,
    pub selection: Selection,
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown {kind} series: '{id}'")]
    UnknownSeries { kind: CatalogKind, id: String },
    #[error("Duplicate {kind} series: '{id}'")]
    DuplicateSeries { kind: CatalogKind, id: String },
    #[error("Unknown sector: '{0}'")]
    UnknownSector(String),
    #[error("Malformed layout: {0}")]
    MalformedLayout(String),
    #[error("Dataset error: {0}")]
    Dataset(#[from] anyhow::Error),
    #[error("Rendering error: {0}")]
    Rendering(anyhow::Error),
}

impl DashboardError {
    pub fn unknown_series(kind: CatalogKind, id: &str) -> Self {
        DashboardError::UnknownSeries { kind, id: id.to_string() }
    }
}
