use std::collections::HashSet;

use domain_model::{CatalogKind, SeriesDefinition};
use dashboard_core_api::{DashboardError, Result};

/// The two registries of selectable series. Order is checklist display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    stocks: Vec<SeriesDefinition>,
    indicators: Vec<SeriesDefinition>,
}

impl Catalog {
    pub fn new(stocks: Vec<SeriesDefinition>, indicators: Vec<SeriesDefinition>) -> Result<Self> {
        ensure_unique(CatalogKind::Stock, &stocks)?;
        ensure_unique(CatalogKind::Indicator, &indicators)?;
        Ok(Self { stocks, indicators })
    }

    pub fn list_stocks(&self) -> &[SeriesDefinition] {
        &self.stocks
    }

    pub fn list_indicators(&self) -> &[SeriesDefinition] {
        &self.indicators
    }

    pub fn list(&self, kind: CatalogKind) -> &[SeriesDefinition] {
        match kind {
            CatalogKind::Stock => self.list_stocks(),
            CatalogKind::Indicator => self.list_indicators(),
        }
    }

    pub fn indicator(&self, id: &str) -> Option<&SeriesDefinition> {
        self.find(CatalogKind::Indicator, id)
    }

    pub fn find(&self, kind: CatalogKind, id: &str) -> Option<&SeriesDefinition> {
        self.list(kind)
            .iter()
            .find(|series| series.id == id)
    }

    pub fn contains(&self, kind: CatalogKind, id: &str) -> bool {
        self.find(kind, id).is_some()
    }
}

fn ensure_unique(kind: CatalogKind, series: &[SeriesDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for definition in series {
        if !seen.insert(definition.id.as_str()) {
            return Err(DashboardError::DuplicateSeries { kind, id: definition.id.clone() });
        }
    }
    Ok(())
}
