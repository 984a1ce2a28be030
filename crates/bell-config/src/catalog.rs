//! In-memory exchange catalog built from a merged config document.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use bell_calendar::{ExchangeDirectory, ExchangeSchedule, ScheduleSpec, SessionTime, TradingDays};
use serde::{Deserialize, Serialize};

use crate::LoadedConfig;

/// One `exchanges.<ACRONYM>` entry as written in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExchangeRecord {
    pub name: String,
    pub time_zone: String,
    pub opening_time: SessionTime,
    pub closing_time: SessionTime,
    pub trading_days: TradingDays,
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl ExchangeRecord {
    pub fn into_spec(self, acronym: &str) -> ScheduleSpec {
        ScheduleSpec {
            acronym: acronym.to_string(),
            name: self.name,
            time_zone: self.time_zone,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            trading_days: self.trading_days,
            holidays: self.holidays,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDoc {
    #[serde(default)]
    exchanges: BTreeMap<String, ExchangeRecord>,
}

/// Validated schedules keyed by acronym, plus the hash of the document they
/// came from.
#[derive(Debug, Clone)]
pub struct ExchangeCatalog {
    schedules: BTreeMap<String, ExchangeSchedule>,
    catalog_hash: String,
    canonical_json: String,
}

impl ExchangeCatalog {
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let doc: CatalogDoc = serde_json::from_value(loaded.config_json.clone())
            .context("CATALOG_INVALID: document does not match the exchange catalog shape")?;

        let mut schedules = BTreeMap::new();
        for (key, record) in doc.exchanges {
            let schedule = ExchangeSchedule::new(record.into_spec(&key))
                .with_context(|| format!("CATALOG_INVALID: exchange '{key}'"))?;
            let acronym = schedule.acronym().to_string();
            if schedules.insert(acronym.clone(), schedule).is_some() {
                bail!("CATALOG_INVALID: duplicate exchange acronym '{acronym}'");
            }
        }

        if schedules.is_empty() {
            bail!("CATALOG_EMPTY: no exchanges defined under `exchanges`");
        }

        Ok(Self {
            schedules,
            catalog_hash: loaded.config_hash.clone(),
            canonical_json: loaded.canonical_json.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.schedules.keys().map(|k| k.as_str())
    }

    pub fn catalog_hash(&self) -> &str {
        &self.catalog_hash
    }

    pub fn canonical_json(&self) -> &str {
        &self.canonical_json
    }
}

impl ExchangeDirectory for ExchangeCatalog {
    fn find_by_acronym(&self, acronym: &str) -> Option<&ExchangeSchedule> {
        self.schedules.get(acronym)
    }

    /// Acronym order.
    fn schedules(&self) -> Box<dyn Iterator<Item = &ExchangeSchedule> + '_> {
        Box::new(self.schedules.values())
    }
}
