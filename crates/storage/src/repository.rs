//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::{debug, info};

/// Stored hourly observation for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub city: String,
    pub timestamp_ms: i64,
    pub pm25: f64,
    pub no2: f64,
    pub o3: f64,
}

/// Stored fired alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: i64,
    pub city: String,
    pub timestamp_ms: i64,
    pub parameter: String,
    pub value: f64,
    pub threshold: f64,
    pub message: String,
    pub severity: String,
}

/// Repository for sample history and alerts (in-memory, bounded retention)
pub struct Repository {
    /// Sample history, oldest first
    samples: Mutex<VecDeque<SampleRecord>>,
    /// Fired alerts, oldest first
    alerts: Mutex<Vec<AlertRecord>>,
    /// Max sample records across all cities
    max_sample_records: usize,
    /// Max alert records
    max_alert_records: usize,
    /// Next alert ID
    next_alert_id: Mutex<i64>,
}

impl Repository {
    /// Create a new in-memory repository with default retention
    pub fn new() -> Self {
        Self::with_retention(10_000, 1_000)
    }

    /// Create a repository with explicit retention caps
    pub fn with_retention(max_sample_records: usize, max_alert_records: usize) -> Self {
        info!(
            max_sample_records,
            max_alert_records, "Creating in-memory repository"
        );
        Self {
            samples: Mutex::new(VecDeque::with_capacity(1024)),
            alerts: Mutex::new(Vec::with_capacity(128)),
            max_sample_records,
            max_alert_records,
            next_alert_id: Mutex::new(1),
        }
    }

    /// Insert a sample record
    pub fn insert_sample(&self, record: SampleRecord) -> Result<(), StorageError> {
        let mut samples = self
            .samples
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        // Enforce retention
        while samples.len() >= self.max_sample_records {
            samples.pop_front();
        }

        samples.push_back(record);
        Ok(())
    }

    /// Insert an alert record, assigning its ID
    pub fn insert_alert(&self, mut record: AlertRecord) -> Result<i64, StorageError> {
        let mut alerts = self
            .alerts
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let mut id = self
            .next_alert_id
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        record.id = *id;
        *id += 1;

        if alerts.len() >= self.max_alert_records {
            alerts.remove(0);
        }

        let assigned = record.id;
        alerts.push(record);
        debug!("Inserted alert with ID {}", assigned);

        Ok(assigned)
    }

    /// Get the most recent samples for a city, oldest first.
    ///
    /// Chronological order makes the result directly usable as a
    /// forecasting window.
    pub fn get_samples(&self, city: &str, limit: usize) -> Result<Vec<SampleRecord>, StorageError> {
        let samples = self
            .samples
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let mut recent: Vec<SampleRecord> = samples
            .iter()
            .rev()
            .filter(|r| r.city.eq_ignore_ascii_case(city))
            .take(limit)
            .cloned()
            .collect();
        recent.reverse();

        Ok(recent)
    }

    /// Get samples for a city since a timestamp, oldest first
    pub fn get_samples_since(
        &self,
        city: &str,
        since_ms: i64,
    ) -> Result<Vec<SampleRecord>, StorageError> {
        let samples = self
            .samples
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        Ok(samples
            .iter()
            .filter(|r| r.city.eq_ignore_ascii_case(city) && r.timestamp_ms >= since_ms)
            .cloned()
            .collect())
    }

    /// Get alerts with optional filters, newest first
    pub fn get_alerts(
        &self,
        city: Option<&str>,
        severity: Option<&str>,
        limit: usize,
    ) -> Result<Vec<AlertRecord>, StorageError> {
        let alerts = self
            .alerts
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        Ok(alerts
            .iter()
            .rev()
            .filter(|a| city.map_or(true, |c| a.city.eq_ignore_ascii_case(c)))
            .filter(|a| severity.map_or(true, |s| a.severity == s))
            .take(limit)
            .cloned()
            .collect())
    }

    /// Total stored sample count
    pub fn sample_count(&self) -> usize {
        self.samples.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Total stored alert count
    pub fn alert_count(&self) -> usize {
        self.alerts.lock().map(|a| a.len()).unwrap_or(0)
    }

    /// Clear all data (for testing)
    pub fn clear(&self) {
        if let Ok(mut samples) = self.samples.lock() {
            samples.clear();
        }
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.clear();
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(city: &str, timestamp_ms: i64, pm25: f64) -> SampleRecord {
        SampleRecord {
            city: city.to_string(),
            timestamp_ms,
            pm25,
            no2: 20.0,
            o3: 40.0,
        }
    }

    fn alert(city: &str, severity: &str) -> AlertRecord {
        AlertRecord {
            id: 0,
            city: city.to_string(),
            timestamp_ms: 0,
            parameter: "pm25".to_string(),
            value: 120.0,
            threshold: 100.0,
            message: "Unhealthy Air Quality - PM2.5 levels exceed safe limits".to_string(),
            severity: severity.to_string(),
        }
    }

    #[test]
    fn test_sample_insert_and_chronological_retrieval() {
        let repo = Repository::new();
        for i in 0..5 {
            repo.insert_sample(sample("London", i, i as f64)).unwrap();
        }

        let samples = repo.get_samples("London", 3).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp_ms, 2);
        assert_eq!(samples[2].timestamp_ms, 4);
    }

    #[test]
    fn test_samples_are_scoped_by_city() {
        let repo = Repository::new();
        repo.insert_sample(sample("London", 1, 10.0)).unwrap();
        repo.insert_sample(sample("Paris", 2, 20.0)).unwrap();

        let samples = repo.get_samples("london", 10).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].pm25, 10.0);
    }

    #[test]
    fn test_samples_since_cutoff() {
        let repo = Repository::new();
        for i in 0..10 {
            repo.insert_sample(sample("London", i, 0.0)).unwrap();
        }

        let samples = repo.get_samples_since("London", 6).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].timestamp_ms, 6);
    }

    #[test]
    fn test_alert_ids_are_monotonic() {
        let repo = Repository::new();
        let first = repo.insert_alert(alert("London", "unhealthy")).unwrap();
        let second = repo.insert_alert(alert("London", "hazardous")).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_alert_filters_and_order() {
        let repo = Repository::new();
        repo.insert_alert(alert("London", "unhealthy")).unwrap();
        repo.insert_alert(alert("Paris", "hazardous")).unwrap();
        repo.insert_alert(alert("London", "hazardous")).unwrap();

        let all = repo.get_alerts(None, None, 10).unwrap();
        assert_eq!(all.len(), 3);
        // Newest first
        assert_eq!(all[0].id, 3);

        let london = repo.get_alerts(Some("London"), None, 10).unwrap();
        assert_eq!(london.len(), 2);

        let hazardous = repo.get_alerts(None, Some("hazardous"), 10).unwrap();
        assert_eq!(hazardous.len(), 2);
    }

    #[test]
    fn test_retention_caps() {
        let repo = Repository::with_retention(5, 2);
        for i in 0..10 {
            repo.insert_sample(sample("London", i, 0.0)).unwrap();
            repo.insert_alert(alert("London", "moderate")).unwrap();
        }

        assert_eq!(repo.sample_count(), 5);
        assert_eq!(repo.alert_count(), 2);

        // Oldest samples were evicted
        let samples = repo.get_samples("London", 10).unwrap();
        assert_eq!(samples[0].timestamp_ms, 5);
    }
}
