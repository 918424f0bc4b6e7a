use anyhow::{anyhow, Result};
use async_trait::async_trait;
use charming::component::{Axis, DataZoom, DataZoomType, Grid, Legend, Title};
use charming::datatype::CompositeValue;
use charming::element::{
    AxisLabel, AxisPointer, AxisPointerType, AxisType, Formatter, ItemStyle, LineStyle,
    LineStyleType, SplitLine, Symbol, Tooltip, Trigger,
};
use charming::series::Line;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use tracing::debug;

use dashboard_chart_builder_api::ChartBuilderApi;
use domain_model::{AxisSpec, DashboardView, PlotSeries, PlotSpec};

use crate::page;

/// ECharts marks a missing value with a dash and breaks the line there.
const GAP: &str = "-";

pub struct CharmingBuilder {
    selection_url: String,
    width: u64,
    height: u64,
}

impl CharmingBuilder {
    /// `selection_url` is the base path the page posts checkbox toggles to.
    pub fn new(selection_url: &str) -> Self {
        Self {
            selection_url: selection_url.to_string(),
            width: 1200,
            height: 500,
        }
    }
}

#[async_trait]
impl ChartBuilderApi for CharmingBuilder {
    async fn build_chart(&self, plot: &PlotSpec) -> Result<String> {
        HtmlRenderer::new(plot.title.as_str(), self.width, self.height)
            .theme(Theme::Default)
            .render(&build_chart(plot))
            .map_err(|err| anyhow!("Error during chart rendering: {err:?}"))
    }

    async fn build_dashboard(&self, view: &DashboardView) -> Result<String> {
        debug!("Building dashboard page with {} sector panels", view.sectors.panels.len());
        Ok(page::render(view, &self.selection_url))
    }
}

pub(crate) fn build_chart(plot: &PlotSpec) -> Chart {
    let mut chart = build_base_chart(&plot.title);
    chart = add_legend(chart, &plot.series);
    chart = add_x_axis(chart, plot);
    chart = chart
        .y_axis(build_y_axis(&plot.left))
        .y_axis(build_y_axis(&plot.right));
    add_series(chart, &plot.series)
}

fn build_base_chart(title: &str) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(
            Tooltip::new().trigger(Trigger::Axis).axis_pointer(
                AxisPointer::new()
                    .animation(true)
                    .type_(AxisPointerType::Cross),
            ),
        )
        .grid(Grid::new().bottom(60))
        .data_zoom(DataZoom::new().type_(DataZoomType::Inside))
}

fn add_legend(chart: Chart, series: &[PlotSeries]) -> Chart {
    let legend = series
        .iter()
        .map(|series| series.label.clone())
        .collect();
    chart.legend(Legend::new().inactive_color("#777").data(legend))
}

fn add_x_axis(chart: Chart, plot: &PlotSpec) -> Chart {
    let periods = plot.periods.iter().map(|period| period.to_string()).collect();
    chart.x_axis(Axis::new().type_(AxisType::Category).data(periods))
}

fn build_y_axis(spec: &AxisSpec) -> Axis {
    let mut axis = Axis::new()
        .type_(AxisType::Value)
        .scale(true)
        .split_line(SplitLine::new().show(false))
        .axis_label(AxisLabel::new().formatter(Formatter::String(spec.unit.label_template().to_string())));
    if let Some(title) = &spec.title {
        axis = axis.name(title.as_str());
    }
    if let Some(domain) = spec.domain {
        axis = axis.min(domain.min).max(domain.max);
    }
    axis
}

fn add_series(mut chart: Chart, series: &[PlotSeries]) -> Chart {
    for s in series {
        let style = if s.is_dashed() {
            LineStyleType::Dashed
        } else {
            LineStyleType::Solid
        };
        let mut line = Line::new()
            .name(s.label.as_str())
            .y_axis_index(s.axis.index() as f64)
            .line_style(LineStyle::new().type_(style).color(s.color.as_str()))
            .item_style(ItemStyle::new().color(s.color.as_str()))
            .data(points(s));
        if !s.show_symbols {
            line = line.symbol(Symbol::None);
        }
        chart = chart.series(line);
    }
    chart
}

fn points(series: &PlotSeries) -> Vec<CompositeValue> {
    series
        .points
        .iter()
        .map(|point| match point {
            Some(value) => CompositeValue::from(*value),
            None => CompositeValue::from(GAP),
        })
        .collect()
}
