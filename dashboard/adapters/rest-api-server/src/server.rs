use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{Json, Router};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tracing::{debug, error, info};

use dashboard_core_api::{DashboardApi, DashboardError};
use dashboard_rest_api::dtos::ToggleDto;
use dashboard_rest_api::endpoints::{GET_DASHBOARD, GET_MAIN_CHART, GET_MAIN_PLOT, GET_OVERVIEW_CHART, GET_SECTOR_CHART, GET_SELECTION, POST_TOGGLE_INDICATOR, POST_TOGGLE_STOCK};
use domain_model::{PlotSpec, Selection};

pub async fn run(port: u16, dashboard: impl DashboardApi) {
    let router = router(Arc::new(dashboard));

    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    info!("Dashboard listening on '{address}'");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

pub fn router(dashboard: Arc<dyn DashboardApi>) -> Router {
    Router::new()
        .route(GET_DASHBOARD, get(get_dashboard))
        .route(GET_OVERVIEW_CHART, get(get_overview_chart))
        .route(GET_MAIN_CHART, get(get_main_chart))
        .route(GET_SECTOR_CHART, get(get_sector_chart))
        .route(GET_MAIN_PLOT, get(get_main_plot))
        .route(GET_SELECTION, get(get_selection))
        .route(POST_TOGGLE_STOCK, post(toggle_stock))
        .route(POST_TOGGLE_INDICATOR, post(toggle_indicator))
        .with_state(dashboard)
}

async fn get_dashboard(State(dashboard): State<Arc<dyn DashboardApi>>) -> Result<Html<String>, StatusCode> {
    dashboard.get_dashboard_html().await
        .map(Html)
        .map_err(|err| to_status("Error during dashboard building", err))
}

async fn get_overview_chart(State(dashboard): State<Arc<dyn DashboardApi>>) -> Result<Html<String>, StatusCode> {
    dashboard.get_overview_chart_html().await
        .map(Html)
        .map_err(|err| to_status("Error during overview chart building", err))
}

async fn get_main_chart(State(dashboard): State<Arc<dyn DashboardApi>>) -> Result<Html<String>, StatusCode> {
    dashboard.get_main_chart_html().await
        .map(Html)
        .map_err(|err| to_status("Error during main chart building", err))
}

async fn get_sector_chart(State(dashboard): State<Arc<dyn DashboardApi>>, Path(sector): Path<String>) -> Result<Html<String>, StatusCode> {
    dashboard.get_sector_chart_html(&sector).await
        .map(Html)
        .map_err(|err| to_status("Error during sector chart building", err))
}

async fn get_main_plot(State(dashboard): State<Arc<dyn DashboardApi>>) -> Result<Json<PlotSpec>, StatusCode> {
    dashboard.get_main_plot().await
        .map(Json)
        .map_err(|err| to_status("Error during main plot composition", err))
}

async fn get_selection(State(dashboard): State<Arc<dyn DashboardApi>>) -> Json<Selection> {
    Json(dashboard.current_selection().await)
}

async fn toggle_stock(State(dashboard): State<Arc<dyn DashboardApi>>, Path(id): Path<String>) -> Result<Json<ToggleDto>, StatusCode> {
    debug!("Request to toggle stock: '{id}'");
    dashboard.toggle_stock(&id).await
        .map(|outcome| Json(outcome.into()))
        .map_err(|err| to_status("Error during stock toggle", err))
}

async fn toggle_indicator(State(dashboard): State<Arc<dyn DashboardApi>>, Path(id): Path<String>) -> Result<Json<ToggleDto>, StatusCode> {
    debug!("Request to toggle indicator: '{id}'");
    dashboard.toggle_indicator(&id).await
        .map(|outcome| Json(outcome.into()))
        .map_err(|err| to_status("Error during indicator toggle", err))
}

fn to_status(context: &str, err: DashboardError) -> StatusCode {
    error!("{context}: '{err}'");
    match err {
        DashboardError::UnknownSeries { .. } | DashboardError::DuplicateSeries { .. } => StatusCode::BAD_REQUEST,
        DashboardError::UnknownSector(_) => StatusCode::NOT_FOUND,
        DashboardError::MalformedLayout(_) | DashboardError::Dataset(_) | DashboardError::Rendering(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
