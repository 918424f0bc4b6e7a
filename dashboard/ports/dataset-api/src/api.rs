use anyhow::Result;
use async_trait::async_trait;

use domain_model::{Record, SeriesDefinition};

/// Source of the catalogs and the record table. Called once at startup, the
/// core never writes back.
#[async_trait]
pub trait DatasetApi: Send + Sync + 'static {
    async fn stocks(&self) -> Result<Vec<SeriesDefinition>>;
    async fn indicators(&self) -> Result<Vec<SeriesDefinition>>;
    /// Records in ascending period order.
    async fn records(&self) -> Result<Vec<Record>>;
}
