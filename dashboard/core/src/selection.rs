use std::sync::Arc;

use tracing::debug;

use dashboard_core_api::{DashboardError, Result, Toggled};
use domain_model::{CatalogKind, Selection};

use crate::catalog::Catalog;

/// Currently selected series of one dashboard session. Every id it holds is
/// present in the catalog; the only mutation after creation is a toggle.
#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: Arc<Catalog>,
    selection: Selection,
}

impl SelectionState {
    pub fn new(catalog: Arc<Catalog>, initial: Selection) -> Result<Self> {
        ensure_known(&catalog, &initial)?;
        Ok(Self {
            catalog,
            selection: initial,
        })
    }

    pub fn empty(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
        }
    }

    pub fn toggle_stock(&mut self, id: &str) -> Result<Toggled> {
        self.toggle(CatalogKind::Stock, id)
    }

    pub fn toggle_indicator(&mut self, id: &str) -> Result<Toggled> {
        self.toggle(CatalogKind::Indicator, id)
    }

    pub fn current_selection(&self) -> Selection {
        self.selection.clone()
    }

    pub fn toggle(&mut self, kind: CatalogKind, id: &str) -> Result<Toggled> {
        if !self.catalog.contains(kind, id) {
            return Err(DashboardError::unknown_series(kind, id));
        }
        let ids = match kind {
            CatalogKind::Stock => &mut self.selection.stocks,
            CatalogKind::Indicator => &mut self.selection.indicators,
        };
        let toggled = if ids.remove(id) {
            Toggled::Removed
        } else {
            ids.insert(id.to_string());
            Toggled::Added
        };
        debug!("Toggled {kind} '{id}': {toggled:?}");
        Ok(toggled)
    }
}

/// Fails on the first id of `selection` that is absent from its catalog.
pub fn ensure_known(catalog: &Catalog, selection: &Selection) -> Result<()> {
    for kind in [CatalogKind::Stock, CatalogKind::Indicator] {
        if let Some(id) = selection.ids(kind).iter().find(|id| !catalog.contains(kind, id)) {
            return Err(DashboardError::unknown_series(kind, id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::fixtures::catalog;

    use super::*;

    fn state() -> SelectionState {
        SelectionState::new(Arc::new(catalog()), Selection::new(["PETR4", "VALE3", "ITUB4"], ["selic", "ipca"]))
            .expect("Error during selection creation")
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut state = state();
        assert_eq!(state.toggle_stock("ELET3").unwrap(), Toggled::Added);
        assert!(state.current_selection().stocks.contains("ELET3"));
        assert_eq!(state.toggle_stock("PETR4").unwrap(), Toggled::Removed);
        assert!(!state.current_selection().stocks.contains("PETR4"));
        assert_eq!(state.toggle_indicator("dolar").unwrap(), Toggled::Added);
        assert_eq!(state.toggle_indicator("selic").unwrap(), Toggled::Removed);
        assert_eq!(state.current_selection(), Selection::new(["VALE3", "ITUB4", "ELET3"], ["ipca", "dolar"]));
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let catalog = catalog();
        let mut state = state();
        let before = state.current_selection();
        for stock in catalog.list_stocks() {
            state.toggle_stock(&stock.id).unwrap();
            state.toggle_stock(&stock.id).unwrap();
            assert_eq!(state.current_selection(), before);
        }
        for indicator in catalog.list_indicators() {
            state.toggle_indicator(&indicator.id).unwrap();
            state.toggle_indicator(&indicator.id).unwrap();
            assert_eq!(state.current_selection(), before);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected_without_change() {
        let mut state = state();
        let before = state.current_selection();

        let result = state.toggle_stock("NOTAREALSTOCK");
        assert!(matches!(result, Err(DashboardError::UnknownSeries { kind: CatalogKind::Stock, .. })));
        assert_eq!(state.current_selection(), before);

        // ids are not shared between the catalogs
        let result = state.toggle_indicator("PETR4");
        assert!(matches!(result, Err(DashboardError::UnknownSeries { kind: CatalogKind::Indicator, .. })));
        assert_eq!(state.current_selection(), before);
    }

    #[test]
    fn test_selection_may_become_empty() {
        let mut state = state();
        for id in ["PETR4", "VALE3", "ITUB4"] {
            state.toggle_stock(id).unwrap();
        }
        for id in ["selic", "ipca"] {
            state.toggle_indicator(id).unwrap();
        }
        assert!(state.current_selection().is_empty());
    }

    #[test]
    fn test_initial_selection_is_validated() {
        let result = SelectionState::new(Arc::new(catalog()), Selection::new(["PETR4"], ["NOTANINDICATOR"]));
        assert!(matches!(result, Err(DashboardError::UnknownSeries { kind: CatalogKind::Indicator, ref id }) if id == "NOTANINDICATOR"));
        assert!(SelectionState::empty(Arc::new(catalog())).current_selection().is_empty());
    }
}
