//! Typed collections on top of the raw key-value store

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::KeyValueStore;
use crate::error::Result;
use crate::models::{ActivityRecord, BmiRecord, HeartRateRecord};

/// Key of the last-known-weight scalar
pub const CURRENT_WEIGHT_KEY: &str = "current_weight";

/// The three append-only record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    BmiHistory,
    Activities,
    HeartRates,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::BmiHistory,
        Collection::Activities,
        Collection::HeartRates,
    ];

    /// Storage key for this collection
    pub fn key(&self) -> &'static str {
        match self {
            Collection::BmiHistory => "bmi_history",
            Collection::Activities => "activities",
            Collection::HeartRates => "heart_rates",
        }
    }
}

/// A record type bound to the collection it lives in
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;
}

impl Record for BmiRecord {
    const COLLECTION: Collection = Collection::BmiHistory;
}

impl Record for ActivityRecord {
    const COLLECTION: Collection = Collection::Activities;
}

impl Record for HeartRateRecord {
    const COLLECTION: Collection = Collection::HeartRates;
}

/// Repository over a [`KeyValueStore`] exposing typed collections and the
/// weight slot.
///
/// Stored values that are missing or fail to parse read back as empty. Only
/// failures of the backend itself are returned as errors.
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every record of a collection in insertion order
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        let key = R::COLLECTION.key();
        let Some(raw) = self.backend.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored collection is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append one record, rewriting the whole collection
    pub fn append<R: Record>(&mut self, record: &R) -> Result<()> {
        let key = R::COLLECTION.key();
        let mut records = self.load::<R>()?;
        records.push(record.clone());

        let json = serde_json::to_string(&records)?;
        self.backend.set(key, &json)?;
        tracing::debug!(key, count = records.len(), "appended record");
        Ok(())
    }

    /// Read a raw scalar entry
    pub fn get_scalar(&self, key: &str) -> Result<Option<String>> {
        self.backend.get(key)
    }

    /// Overwrite a raw scalar entry
    pub fn set_scalar(&mut self, key: &str, value: &str) -> Result<()> {
        self.backend.set(key, value)
    }

    /// Last known weight in kg, if one was recorded and parses as a positive number
    pub fn current_weight(&self) -> Result<Option<f64>> {
        let Some(raw) = self.get_scalar(CURRENT_WEIGHT_KEY)? else {
            return Ok(None);
        };

        match raw.trim().parse::<f64>() {
            Ok(kg) if kg.is_finite() && kg > 0.0 => Ok(Some(kg)),
            _ => {
                tracing::warn!(value = %raw, "ignoring unusable stored weight");
                Ok(None)
            }
        }
    }

    /// Remember the latest weight for calorie estimates
    pub fn set_current_weight(&mut self, kg: f64) -> Result<()> {
        self.set_scalar(CURRENT_WEIGHT_KEY, &kg.to_string())
    }
}
