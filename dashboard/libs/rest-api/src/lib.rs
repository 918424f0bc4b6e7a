pub mod endpoints {
    pub const GET_DASHBOARD: &str = "/";
    pub const GET_OVERVIEW_CHART: &str = "/api/v1/dashboard/charts/overview";
    pub const GET_MAIN_CHART: &str = "/api/v1/dashboard/charts/main";
    pub const GET_SECTOR_CHART: &str = "/api/v1/dashboard/charts/sectors/:sector";
    pub const GET_MAIN_PLOT: &str = "/api/v1/dashboard/plots/main";
    pub const GET_SELECTION: &str = "/api/v1/dashboard/selection";
    pub const POST_TOGGLE_STOCK: &str = "/api/v1/dashboard/selection/stocks/:id";
    pub const POST_TOGGLE_INDICATOR: &str = "/api/v1/dashboard/selection/indicators/:id";

    /// Base the page appends `/{stocks|indicators}/{id}` to.
    pub const SELECTION: &str = GET_SELECTION;
}

pub mod dtos {
    use serde::{Deserialize, Serialize};

    use dashboard_core_api::{ToggleOutcome, Toggled};
    use domain_model::Selection;

    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
    pub struct ToggleDto {
        pub id: String,
        pub toggled: Toggled,
        pub selection: Selection,
    }

    impl From<ToggleOutcome> for ToggleDto {
        fn from(outcome: ToggleOutcome) -> Self {
            Self {
                id: outcome.id,
                toggled: outcome.toggled,
                selection: outcome.selection,
            }
        }
    }

}
