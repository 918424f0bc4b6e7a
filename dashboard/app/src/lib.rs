use tracing::info;

use dashboard_charming_builder::CharmingBuilder;
use dashboard_config::CONFIG;
use dashboard_core::Dashboard;
use dashboard_inmemory_dataset::InMemoryDataset;
use dashboard_rest_api::endpoints::SELECTION;

pub async fn run() {
    info!("▶ {} running...", CONFIG.application.name);
    let dataset = InMemoryDataset::fixture()
        .expect("dashboard: Error during dataset loading");
    let dashboard = Dashboard::load(&dataset,
                                    CharmingBuilder::new(SELECTION),
                                    &CONFIG.layout,
                                    CONFIG.selection.to_selection())
        .await
        .expect("dashboard: Error during dashboard initialization");
    dashboard_rest_api_server::run(CONFIG.application.port, dashboard).await;
}
