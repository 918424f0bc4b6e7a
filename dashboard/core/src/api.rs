use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use dashboard_chart_builder_api::ChartBuilderApi;
use dashboard_core_api::{DashboardApi, DashboardError, Result, ToggleOutcome};
use dashboard_dataset_api::DatasetApi;
use domain_model::{CatalogKind, DashboardView, Layout, PlotSpec, RecordTable, Selection};

use crate::catalog::Catalog;
use crate::composer::ChartComposer;
use crate::presentation::Presenter;
use crate::selection::SelectionState;

/// The single dashboard session. Plot specs are recomputed from the current
/// selection on every read and never stored.
pub struct Dashboard {
    composer: ChartComposer,
    presenter: Presenter,
    selection: Mutex<SelectionState>,
    chart_builder: Box<dyn ChartBuilderApi>,
}

impl Dashboard {
    pub async fn load(dataset: &dyn DatasetApi,
                      chart_builder: impl ChartBuilderApi,
                      layout: &Layout,
                      initial: Selection) -> Result<Self> {
        let catalog = Arc::new(Catalog::new(dataset.stocks().await?, dataset.indicators().await?)?);
        let records = Arc::new(RecordTable::new(dataset.records().await?)?);
        info!("Dataset loaded: {} stocks, {} indicators, {} records",
            catalog.list_stocks().len(), catalog.list_indicators().len(), records.len());

        let composer = ChartComposer::new(Arc::clone(&catalog), records, layout)?;
        let presenter = Presenter::new(Arc::clone(&catalog), layout)?;
        let selection = SelectionState::new(catalog, initial)?;
        Ok(Self {
            composer,
            presenter,
            selection: Mutex::new(selection),
            chart_builder: Box::new(chart_builder),
        })
    }

    async fn toggle(&self, kind: CatalogKind, id: &str) -> Result<ToggleOutcome> {
        let mut state = self.selection.lock().await;
        let toggled = state.toggle(kind, id)?;
        Ok(ToggleOutcome {
            kind,
            id: id.to_string(),
            toggled,
            selection: state.current_selection(),
        })
    }

    async fn render(&self, plot: &PlotSpec) -> Result<String> {
        debug!("Rendering chart '{}' with {} series", plot.title, plot.series.len());
        self.chart_builder.build_chart(plot)
            .await
            .map_err(DashboardError::Rendering)
    }
}

#[async_trait]
impl DashboardApi for Dashboard {
    async fn current_selection(&self) -> Selection {
        self.selection.lock().await.current_selection()
    }

    async fn toggle_stock(&self, id: &str) -> Result<ToggleOutcome> {
        self.toggle(CatalogKind::Stock, id).await
    }

    async fn toggle_indicator(&self, id: &str) -> Result<ToggleOutcome> {
        self.toggle(CatalogKind::Indicator, id).await
    }

    async fn get_main_plot(&self) -> Result<PlotSpec> {
        let selection = self.current_selection().await;
        self.composer.compose_main_plot(&selection)
    }

    async fn get_view(&self) -> Result<DashboardView> {
        let selection = self.current_selection().await;
        self.presenter.view(&self.composer, &selection)
    }

    async fn get_dashboard_html(&self) -> Result<String> {
        let view = self.get_view().await?;
        self.chart_builder.build_dashboard(&view)
            .await
            .map_err(DashboardError::Rendering)
    }

    async fn get_overview_chart_html(&self) -> Result<String> {
        self.render(&self.composer.compose_overview_plot()).await
    }

    async fn get_main_chart_html(&self) -> Result<String> {
        let plot = self.get_main_plot().await?;
        self.render(&plot).await
    }

    async fn get_sector_chart_html(&self, sector: &str) -> Result<String> {
        let plot = self.composer.compose_sector_plot(sector)?;
        self.render(&plot).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use dashboard_core_api::Toggled;
    use domain_model::{Axis, Record, SeriesDefinition};

    use crate::fixtures::{catalog, layout, period, records};

    use super::*;

    struct FixtureDataset {
        records: Vec<Record>,
    }

    impl FixtureDataset {
        fn new() -> Self {
            Self { records: records().records().to_vec() }
        }
    }

    #[async_trait]
    impl DatasetApi for FixtureDataset {
        async fn stocks(&self) -> anyhow::Result<Vec<SeriesDefinition>> {
            Ok(catalog().list_stocks().to_vec())
        }

        async fn indicators(&self) -> anyhow::Result<Vec<SeriesDefinition>> {
            Ok(catalog().list_indicators().to_vec())
        }

        async fn records(&self) -> anyhow::Result<Vec<Record>> {
            Ok(self.records.clone())
        }
    }

    /// Writes the labels of what it was asked to draw.
    struct LabelBuilder;

    #[async_trait]
    impl ChartBuilderApi for LabelBuilder {
        async fn build_chart(&self, plot: &PlotSpec) -> anyhow::Result<String> {
            Ok(format!("{}: {}", plot.title, plot.labels().join(", ")))
        }

        async fn build_dashboard(&self, view: &DashboardView) -> anyhow::Result<String> {
            Ok(format!("{}: {}", view.title, view.exploratory.chart.plot.labels().join(", ")))
        }
    }

    struct FailingBuilder;

    #[async_trait]
    impl ChartBuilderApi for FailingBuilder {
        async fn build_chart(&self, _plot: &PlotSpec) -> anyhow::Result<String> {
            Err(anyhow!("renderer unavailable"))
        }

        async fn build_dashboard(&self, _view: &DashboardView) -> anyhow::Result<String> {
            Err(anyhow!("renderer unavailable"))
        }
    }

    async fn dashboard() -> Dashboard {
        Dashboard::load(&FixtureDataset::new(), LabelBuilder, &layout(),
                        Selection::new(["PETR4", "VALE3", "ITUB4"], ["selic", "ipca"]))
            .await
            .expect("Error during dashboard loading")
    }

    #[tokio::test]
    async fn test_main_plot_follows_toggles() {
        let dashboard = dashboard().await;
        assert_eq!(dashboard.get_main_plot().await.unwrap().series.len(), 5);

        let outcome = dashboard.toggle_stock("ITUB4").await.unwrap();
        assert_eq!(outcome.toggled, Toggled::Removed);
        assert_eq!(outcome.kind, CatalogKind::Stock);
        assert!(!outcome.selection.stocks.contains("ITUB4"));

        let outcome = dashboard.toggle_indicator("dolar").await.unwrap();
        assert_eq!(outcome.toggled, Toggled::Added);

        let plot = dashboard.get_main_plot().await.unwrap();
        let left: Vec<_> = plot.on_axis(Axis::Left).map(|series| series.series_id.as_str()).collect();
        let right: Vec<_> = plot.on_axis(Axis::Right).map(|series| series.series_id.as_str()).collect();
        assert_eq!(left, vec!["PETR4", "VALE3"]);
        assert_eq!(right, vec!["selic", "ipca", "dolar"]);
        assert_eq!(dashboard.current_selection().await, outcome.selection);
    }

    #[tokio::test]
    async fn test_unknown_toggle_is_reported() {
        let dashboard = dashboard().await;
        let before = dashboard.current_selection().await;
        let result = dashboard.toggle_stock("NOTAREALSTOCK").await;
        assert!(matches!(result, Err(DashboardError::UnknownSeries { kind: CatalogKind::Stock, .. })));
        assert_eq!(dashboard.current_selection().await, before);
    }

    #[tokio::test]
    async fn test_rendered_html_is_never_stale() {
        let dashboard = dashboard().await;
        let html = dashboard.get_main_chart_html().await.unwrap();
        assert!(html.contains("Itaú (ITUB4)"));

        dashboard.toggle_stock("ITUB4").await.unwrap();
        let html = dashboard.get_main_chart_html().await.unwrap();
        assert!(!html.contains("Itaú (ITUB4)"));
        let page = dashboard.get_dashboard_html().await.unwrap();
        assert!(page.starts_with("Painel de Análise de Investimentos - SPAD03"));
        assert!(!page.contains("Itaú (ITUB4)"));
    }

    #[tokio::test]
    async fn test_overview_and_sector_charts() {
        let dashboard = dashboard().await;
        assert_eq!(dashboard.get_overview_chart_html().await.unwrap(), "Visão Geral: Ibovespa, Taxa Selic");
        assert_eq!(dashboard.get_sector_chart_html("Commodities").await.unwrap(),
                   "Commodities: Petrobras (PETR4), Vale (VALE3), IPCA");
        assert!(matches!(dashboard.get_sector_chart_html("Varejo").await, Err(DashboardError::UnknownSector(_))));
    }

    #[tokio::test]
    async fn test_view_checklists_follow_selection() {
        let dashboard = dashboard().await;
        dashboard.toggle_stock("ELET3").await.unwrap();
        let view = dashboard.get_view().await.unwrap();
        assert!(view.exploratory.stocks.iter().all(|item| item.checked));
        assert!(!view.exploratory.indicators.iter().find(|item| item.id == "dolar").unwrap().checked);
    }

    #[tokio::test]
    async fn test_rendering_failure_is_surfaced() {
        let dashboard = Dashboard::load(&FixtureDataset::new(), FailingBuilder, &layout(), Selection::default())
            .await
            .unwrap();
        assert!(matches!(dashboard.get_main_chart_html().await, Err(DashboardError::Rendering(_))));
        assert!(matches!(dashboard.get_dashboard_html().await, Err(DashboardError::Rendering(_))));
        assert!(dashboard.get_main_plot().await.unwrap().series.is_empty());
    }

    #[tokio::test]
    async fn test_unordered_dataset_is_rejected() {
        let mut dataset = FixtureDataset::new();
        dataset.records.push(Record::new(period("2021-12"), &[("selic", 9.25)]));
        let result = Dashboard::load(&dataset, LabelBuilder, &layout(), Selection::default()).await;
        assert!(matches!(result, Err(DashboardError::Dataset(_))));
    }

    #[tokio::test]
    async fn test_initial_selection_outside_catalog_is_rejected() {
        let result = Dashboard::load(&FixtureDataset::new(), LabelBuilder, &layout(),
                                     Selection::new(["PETR4"], ["igpm"])).await;
        assert!(matches!(result, Err(DashboardError::UnknownSeries { kind: CatalogKind::Indicator, .. })));
    }
}
