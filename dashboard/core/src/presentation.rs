use std::sync::Arc;

use dashboard_core_api::{DashboardError, Result};
use domain_model::{CatalogKind, ChartSection, ChecklistItem, CorrelationTable, DashboardView, ExploratorySection, Kpi, Layout, SectorSection, Selection};

use crate::catalog::Catalog;
use crate::composer::ChartComposer;

/// Assembles the page view: composed plots plus the static KPIs and
/// correlation table, which never come from the record table.
pub struct Presenter {
    catalog: Arc<Catalog>,
    layout: Layout,
}

impl Presenter {
    pub fn new(catalog: Arc<Catalog>, layout: &Layout) -> Result<Self> {
        let correlation = &layout.presentation.correlation;
        if let Some(row) = correlation.malformed_row() {
            return Err(DashboardError::MalformedLayout(format!(
                "correlation row '{}' has {} values for {} columns",
                row.metric, row.values.len(), correlation.columns.len())));
        }
        Ok(Self {
            catalog,
            layout: layout.clone(),
        })
    }

    pub fn view(&self, composer: &ChartComposer, selection: &Selection) -> Result<DashboardView> {
        let main = composer.compose_main_plot(selection)?;
        Ok(DashboardView {
            title: self.layout.title.clone(),
            kpis: self.kpis().to_vec(),
            overview: ChartSection {
                title: self.layout.overview.title.clone(),
                description: self.layout.overview.description.clone(),
                plot: composer.compose_overview_plot(),
            },
            exploratory: ExploratorySection {
                chart: ChartSection {
                    title: self.layout.main.title.clone(),
                    description: self.layout.main.description.clone(),
                    plot: main,
                },
                stocks: self.checklist(CatalogKind::Stock, selection),
                indicators: self.checklist(CatalogKind::Indicator, selection),
            },
            sectors: SectorSection {
                title: self.layout.sectors.title.clone(),
                panels: composer.compose_sector_plots(),
            },
            correlation: self.correlation().clone(),
        })
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.layout.presentation.kpis
    }

    pub fn correlation(&self) -> &CorrelationTable {
        &self.layout.presentation.correlation
    }

    /// Every catalog entry in display order, checked when selected.
    pub fn checklist(&self, kind: CatalogKind, selection: &Selection) -> Vec<ChecklistItem> {
        self.catalog.list(kind)
            .iter()
            .map(|series| ChecklistItem {
                id: series.id.clone(),
                label: series.display_name.clone(),
                color: series.color.clone(),
                checked: selection.contains(kind, &series.id),
            })
            .collect()
    }
}
