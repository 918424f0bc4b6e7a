use anyhow::Result;
use async_trait::async_trait;

use domain_model::{DashboardView, PlotSpec};

/// Rendering capability: draws axes, legends and lines for plot specs the
/// core composed. Both methods return a complete HTML document.
#[async_trait]
pub trait ChartBuilderApi: Send + Sync + 'static {
    async fn build_chart(&self, plot: &PlotSpec) -> Result<String>;
    async fn build_dashboard(&self, view: &DashboardView) -> Result<String>;
}
