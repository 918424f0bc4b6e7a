use std::collections::HashMap;

use config::{Environment, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;

use domain_model::{Layout, Selection};

#[derive(Deserialize)]
pub struct Config {
    pub logging: Logging,
    pub application: Application,
    pub selection: InitialSelection,
    pub layout: Layout,
}

#[derive(Deserialize)]
pub struct Application {
    pub name: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Logging {
    level: String,
    #[serde(default)]
    crates: HashMap<String, String>,
}

impl Logging {
    pub fn levels(&self) -> String {
        let crate_levels = self.crates.iter().map(|(lib, loglevel)| format!("{lib}={loglevel}"))
            .collect::<Vec<_>>()
            .join(",");
        if crate_levels.is_empty() {
            return self.level.clone();
        }
        format!("{},{crate_levels}", self.level)
    }
}

#[derive(Deserialize)]
pub struct InitialSelection {
    #[serde(default)]
    pub stocks: Vec<String>,
    #[serde(default)]
    pub indicators: Vec<String>,
}

impl InitialSelection {
    pub fn to_selection(&self) -> Selection {
        Selection::new(self.stocks.iter().cloned(), self.indicators.iter().cloned())
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

impl Config {
    fn load() -> Self {
        Self::builder()
            .build()
            .expect("Error during config creation")
            .try_deserialize()
            .expect("Error during config deserialization")
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(File::from_str(include_str!("../config.yml"), FileFormat::Yaml))
            .add_source(Environment::with_prefix("APP")
                .try_parsing(true)
                .separator("_"))
            .add_source(Environment::with_prefix("DASHBOARD")
                .try_parsing(true)
                .separator("_"))
    }
}
