use std::sync::Arc;

use tracing::debug;

use dashboard_core_api::{DashboardError, Result};
use domain_model::{Axis, AxisDomain, AxisSpec, CatalogKind, Layout, LineStyle, MainLayout, OverviewLayout, PlotSeries, PlotSpec, RecordTable, SectorPlot, SectorsLayout, Selection, SeriesDefinition};

use crate::catalog::Catalog;
use crate::selection::ensure_known;

/// Derives plot specs from the catalog, the record table and a selection.
/// Holds no selection itself, every call composes from scratch.
pub struct ChartComposer {
    catalog: Arc<Catalog>,
    records: Arc<RecordTable>,
    overview: OverviewLayout,
    main: MainLayout,
    sectors: SectorsLayout,
}

impl ChartComposer {
    pub fn new(catalog: Arc<Catalog>, records: Arc<RecordTable>, layout: &Layout) -> Result<Self> {
        let sectors = layout.sectors.clone();
        if !catalog.contains(CatalogKind::Indicator, &sectors.indicator) {
            return Err(DashboardError::unknown_series(CatalogKind::Indicator, &sectors.indicator));
        }
        if !sectors.margin.is_finite() || sectors.margin < 0.0 {
            return Err(DashboardError::MalformedLayout(format!("sector margin must be a non-negative number, got {}", sectors.margin)));
        }
        catalog.list_stocks()
            .iter()
            .filter(|stock| !stock.group.as_ref().is_some_and(|group| sectors.sectors.contains(group)))
            .for_each(|stock| debug!("Stock '{}' belongs to no configured sector and is left out of the sector panels", stock.id));
        Ok(Self {
            catalog,
            records,
            overview: layout.overview.clone(),
            main: layout.main.clone(),
            sectors,
        })
    }

    /// Selected stocks on the left axis, then selected indicators on the
    /// right axis, both in catalog order whatever order they were toggled in.
    pub fn compose_main_plot(&self, selection: &Selection) -> Result<PlotSpec> {
        ensure_known(&self.catalog, selection)?;

        let stocks = self.catalog.list_stocks()
            .iter()
            .filter(|stock| selection.stocks.contains(&stock.id))
            .map(|stock| self.plot_series(stock, Axis::Left, LineStyle::Solid, true, None));
        let indicators = self.catalog.list_indicators()
            .iter()
            .filter(|indicator| selection.indicators.contains(&indicator.id))
            .map(|indicator| self.plot_series(indicator, Axis::Right, LineStyle::Dashed, true, None));
        let series: Vec<_> = stocks.chain(indicators).collect();

        let left = scaled_axis(AxisSpec::new(Some(&self.main.left_title), self.main.left_unit), &series, Axis::Left);
        let right = scaled_axis(AxisSpec::new(Some(&self.main.right_title), self.main.right_unit), &series, Axis::Right);
        debug!("Composed main plot: {} stock and {} indicator series",
            selection.stocks.len(), selection.indicators.len());
        Ok(PlotSpec {
            title: self.main.title.clone(),
            periods: self.records.periods(),
            left,
            right,
            series,
        })
    }

    /// One panel per configured sector, in configured order. Panels show
    /// every stock of their sector and never depend on the selection.
    pub fn compose_sector_plots(&self) -> Vec<SectorPlot> {
        self.sectors.sectors
            .iter()
            .map(|sector| SectorPlot {
                sector: sector.clone(),
                plot: self.sector_plot(sector),
            })
            .collect()
    }

    pub fn compose_sector_plot(&self, sector: &str) -> Result<PlotSpec> {
        if !self.sectors.sectors.iter().any(|configured| configured == sector) {
            return Err(DashboardError::UnknownSector(sector.to_string()));
        }
        Ok(self.sector_plot(sector))
    }

    /// Fixed index vs. policy rate pairing, independent of the selection.
    pub fn compose_overview_plot(&self) -> PlotSpec {
        let series = vec![
            self.plot_series(&self.overview.left, Axis::Left, LineStyle::Solid, true, None),
            self.plot_series(&self.overview.right, Axis::Right, LineStyle::Solid, true, None),
        ];
        let left = scaled_axis(AxisSpec::new(Some(&self.overview.left_title), self.overview.left.unit), &series, Axis::Left);
        let right = scaled_axis(AxisSpec::new(Some(&self.overview.right_title), self.overview.right.unit), &series, Axis::Right);
        PlotSpec {
            title: self.overview.title.clone(),
            periods: self.records.periods(),
            left,
            right,
            series,
        }
    }

    fn sector_plot(&self, sector: &str) -> PlotSpec {
        let mut series: Vec<_> = self.catalog.list_stocks()
            .iter()
            .filter(|stock| stock.in_group(sector))
            .map(|stock| self.plot_series(stock, Axis::Left, LineStyle::Solid, false, None))
            .collect();
        if let Some(indicator) = self.catalog.indicator(&self.sectors.indicator) {
            series.push(self.plot_series(indicator, Axis::Right, LineStyle::Solid, false, self.sectors.indicator_label.as_deref()));
        }

        let mut left = AxisSpec::new(None, self.main.left_unit);
        left.domain = axis_domain(&series, Axis::Left).map(|domain| domain.padded(self.sectors.margin));
        let right_unit = self.catalog.indicator(&self.sectors.indicator)
            .map(|indicator| indicator.unit)
            .unwrap_or(self.main.right_unit);
        let right = scaled_axis(AxisSpec::new(None, right_unit), &series, Axis::Right);
        PlotSpec {
            title: sector.to_string(),
            periods: self.records.periods(),
            left,
            right,
            series,
        }
    }

    fn plot_series(&self, definition: &SeriesDefinition, axis: Axis, style: LineStyle, show_symbols: bool, label: Option<&str>) -> PlotSeries {
        PlotSeries {
            series_id: definition.id.clone(),
            axis,
            color: definition.color.clone(),
            style,
            label: label.unwrap_or(&definition.display_name).to_string(),
            unit: definition.unit,
            show_symbols,
            points: self.records.values(&definition.id),
        }
    }
}

fn axis_domain(series: &[PlotSeries], axis: Axis) -> Option<AxisDomain> {
    AxisDomain::from_values(series.iter()
        .filter(|series| series.axis == axis)
        .flat_map(PlotSeries::values))
}

fn scaled_axis(mut spec: AxisSpec, series: &[PlotSeries], axis: Axis) -> AxisSpec {
    spec.domain = axis_domain(series, axis);
    spec
}
