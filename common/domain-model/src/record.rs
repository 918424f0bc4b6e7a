use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monthly observation key, written as `YYYY-MM`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(NaiveDate);

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }
}

impl FromStr for Period {
    type Err = Error;
    fn from_str(input: &str) -> Result<Period, Self::Err> {
        let Some((year, month)) = input.split_once('-') else {
            bail!("Unknown period format: '{input}', expected YYYY-MM")
        };
        if year.len() != 4 || month.len() != 2 || !is_digits(year) || !is_digits(month) {
            bail!("Unknown period format: '{input}', expected YYYY-MM")
        }
        let year = year.parse::<i32>()?;
        let month = month.parse::<u32>()?;
        match Period::new(year, month) {
            Some(period) => Ok(period),
            None => bail!("Period out of range: '{input}'")
        }
    }
}

fn is_digits(part: &str) -> bool {
    part.bytes().all(|byte| byte.is_ascii_digit())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Period::from_str(&value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Record {
    pub period: Period,
    /// A `null` field is read as an absent one.
    #[serde(deserialize_with = "present_fields")]
    pub fields: HashMap<String, f64>,
}

fn present_fields<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, f64>, D::Error> {
    let fields = HashMap::<String, Option<f64>>::deserialize(deserializer)?;
    Ok(fields.into_iter()
        .filter_map(|(id, value)| value.map(|value| (id, value)))
        .collect())
}

impl Record {
    pub fn new(period: Period, fields: &[(&str, f64)]) -> Self {
        Self {
            period,
            fields: fields.iter()
                .map(|(id, value)| (id.to_string(), *value))
                .collect(),
        }
    }

    pub fn value(&self, id: &str) -> Option<f64> {
        self.fields.get(id).copied()
    }
}

/// Records in strictly ascending period order. The order is the x-axis order
/// and is never changed after construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Result<Self, Error> {
        for pair in records.windows(2) {
            if pair[0].period >= pair[1].period {
                bail!("Records are not in ascending period order: '{}' is followed by '{}'",
                    pair[0].period, pair[1].period)
            }
        }
        Ok(Self { records })
    }

    pub fn periods(&self) -> Vec<Period> {
        self.records.iter()
            .map(|record| record.period)
            .collect()
    }

    /// Values of one field aligned with [`RecordTable::periods`], `None` where
    /// a record lacks the field.
    pub fn values(&self, id: &str) -> Vec<Option<f64>> {
        self.records.iter()
            .map(|record| record.value(id))
            .collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
