use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use layout::*;
pub use plot::*;
pub use record::*;
pub use view::*;

mod layout;
mod plot;
mod record;
mod view;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SeriesDefinition {
    pub id: String,
    pub display_name: String,
    pub color: Color,
    pub unit: Unit,
    #[serde(default)]
    pub group: Option<String>,
}

impl SeriesDefinition {
    pub fn new(id: &str, display_name: &str, color: &str, unit: Unit, group: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            color: Color::from(color),
            unit,
            group: group.map(str::to_string),
        }
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.group.as_deref() == Some(group)
    }
}

/// Color token handed to the renderer as is, e.g. `#0088FE`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Native unit of a series or an axis. Values are always plotted in their
/// own unit, axes are never normalized against each other.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Points,
    Percent,
    Currency,
}

impl Unit {
    /// ECharts template for axis labels and tooltips, `{value}` is replaced
    /// by the plotted number.
    pub fn label_template(&self) -> &'static str {
        match self {
            Unit::Points => "{value} pts",
            Unit::Percent => "{value}%",
            Unit::Currency => "R$ {value}",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Stock,
    Indicator,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Snapshot of the selected series ids of both catalogs.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub stocks: BTreeSet<String>,
    pub indicators: BTreeSet<String>,
}

impl Selection {
    pub fn new<S: Into<String>>(stocks: impl IntoIterator<Item=S>, indicators: impl IntoIterator<Item=S>) -> Self {
        Self {
            stocks: stocks.into_iter().map(Into::into).collect(),
            indicators: indicators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ids(&self, kind: CatalogKind) -> &BTreeSet<String> {
        match kind {
            CatalogKind::Stock => &self.stocks,
            CatalogKind::Indicator => &self.indicators,
        }
    }

    pub fn contains(&self, kind: CatalogKind, id: &str) -> bool {
        self.ids(kind).contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty() && self.indicators.is_empty()
    }
}
