use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use dashboard_dataset_api::DatasetApi;
use domain_model::{Record, SeriesDefinition};

static FIXTURE: &str = include_str!("../dataset.json");

#[derive(Debug, Default, Deserialize)]
pub struct InMemoryDataset {
    stocks: Vec<SeriesDefinition>,
    indicators: Vec<SeriesDefinition>,
    records: Vec<Record>,
}

impl InMemoryDataset {
    /// Monthly records from 2022-01 to 2024-01 with the stock and indicator
    /// catalogs they belong to.
    pub fn fixture() -> Result<Self> {
        Self::from_json(FIXTURE).context("Error during fixture dataset parsing")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[async_trait]
impl DatasetApi for InMemoryDataset {
    async fn stocks(&self) -> Result<Vec<SeriesDefinition>> {
        Ok(self.stocks.clone())
    }

    async fn indicators(&self) -> Result<Vec<SeriesDefinition>> {
        Ok(self.indicators.clone())
    }

    async fn records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}
