//! Command handlers
//!
//! Each `submit_*` runs validate → compute → persist and hands back the record
//! it created. A validation failure returns before anything touches the store.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::metrics::{self, TodayStats};
use crate::models::{ActivityRecord, BmiRecord, HeartRateRecord};
use crate::storage::{KeyValueStore, RecordStore};
use crate::validation::{ActivityInput, BmiInput, HeartRateInput};

/// The tracker: a record store plus the operations users can run against it
pub struct Tracker<S> {
    store: RecordStore<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Wrap a backend and bring the weight slot in line with the BMI history
    pub fn open(backend: S) -> Result<Self> {
        let mut tracker = Self {
            store: RecordStore::new(backend),
        };
        tracker.sync_current_weight()?;
        Ok(tracker)
    }

    /// Read access for views
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// If any BMI was ever recorded, its latest weight becomes the calorie weight
    fn sync_current_weight(&mut self) -> Result<()> {
        if let Some(last) = self.last_bmi()? {
            self.store.set_current_weight(last.weight_kg)?;
        }
        Ok(())
    }

    /// Record a BMI measurement taken now
    pub fn submit_bmi(&mut self, input: &BmiInput) -> Result<BmiRecord> {
        self.submit_bmi_at(input, Utc::now())
    }

    /// [`Self::submit_bmi`] with the record timestamp supplied by the caller
    pub fn submit_bmi_at(&mut self, input: &BmiInput, now: DateTime<Utc>) -> Result<BmiRecord> {
        input.validate()?;

        let bmi = metrics::compute_bmi(input.height_cm, input.weight_kg);
        let category = metrics::classify(bmi);
        let record = BmiRecord {
            timestamp: now,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            bmi,
            category_name: category.name().to_string(),
        };

        self.store.append(&record)?;
        self.store.set_current_weight(input.weight_kg)?;
        tracing::info!(bmi, category = %category, "recorded BMI");
        Ok(record)
    }

    /// Log an activity entered now
    pub fn submit_activity(&mut self, input: &ActivityInput) -> Result<ActivityRecord> {
        self.submit_activity_at(input, Utc::now())
    }

    /// [`Self::submit_activity`] with `created_at` supplied by the caller
    pub fn submit_activity_at(
        &mut self,
        input: &ActivityInput,
        now: DateTime<Utc>,
    ) -> Result<ActivityRecord> {
        input.validate()?;

        let weight = metrics::calorie_weight(self.store.current_weight()?);
        let calories = metrics::compute_calories(input.activity_type, weight, input.duration_min)?;
        let record = ActivityRecord {
            date: input.date,
            activity_type: input.activity_type,
            distance_km: input.distance_km,
            duration_min: input.duration_min,
            calories,
            created_at: now,
        };

        self.store.append(&record)?;
        tracing::info!(
            activity = %record.activity_type,
            distance_km = record.distance_km,
            calories,
            weight_kg = weight,
            "recorded activity"
        );
        Ok(record)
    }

    /// Log a heart-rate reading entered now
    pub fn submit_heart_rate(&mut self, input: &HeartRateInput) -> Result<HeartRateRecord> {
        self.submit_heart_rate_at(input, Utc::now())
    }

    /// [`Self::submit_heart_rate`] with `created_at` supplied by the caller
    pub fn submit_heart_rate_at(
        &mut self,
        input: &HeartRateInput,
        now: DateTime<Utc>,
    ) -> Result<HeartRateRecord> {
        input.validate()?;

        let record = HeartRateRecord {
            date: input.date,
            heart_rate_bpm: input.heart_rate_bpm,
            created_at: now,
        };

        self.store.append(&record)?;
        tracing::info!(bpm = record.heart_rate_bpm, "recorded heart rate");
        Ok(record)
    }

    pub fn bmi_history(&self) -> Result<Vec<BmiRecord>> {
        self.store.load()
    }

    /// Most recently stored BMI record (by insertion, not timestamp)
    pub fn last_bmi(&self) -> Result<Option<BmiRecord>> {
        Ok(self.bmi_history()?.pop())
    }

    pub fn activities(&self) -> Result<Vec<ActivityRecord>> {
        self.store.load()
    }

    pub fn heart_rates(&self) -> Result<Vec<HeartRateRecord>> {
        self.store.load()
    }

    pub fn latest_heart_rate(&self) -> Result<Option<HeartRateRecord>> {
        let records = self.heart_rates()?;
        Ok(metrics::latest_heart_rate(&records).cloned())
    }

    pub fn today_stats(&self, today: NaiveDate) -> Result<TodayStats> {
        Ok(metrics::today_stats(&self.activities()?, today))
    }
}
