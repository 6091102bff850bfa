//! Synthetic History Generation
//!
//! Produces plausible hourly pollutant history for cities with no stored
//! samples, so the dashboard and forecaster have data to work with out of
//! the box. Seeded per city so repeated requests see the same series.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use storage::SampleRecord;

fn city_seed(city: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    city.to_ascii_lowercase().hash(&mut hasher);
    hasher.finish()
}

/// Generate `hours` hourly samples for a city, ending at `end`
pub fn synthetic_history(city: &str, hours: usize, end: DateTime<Utc>) -> Vec<SampleRecord> {
    let mut rng = StdRng::seed_from_u64(city_seed(city));
    let mut data = Vec::with_capacity(hours);

    for i in 0..hours {
        let age_hours = (hours - 1 - i) as i64;
        let t = i as f64;

        // Daily-ish swings on top of a randomized city baseline
        let pm25 = 35.0 + rng.gen::<f64>() * 40.0 + (t / 2.0).sin() * 15.0;
        let no2 = 20.0 + rng.gen::<f64>() * 25.0 + (t / 3.0).cos() * 10.0;
        let o3 = 40.0 + rng.gen::<f64>() * 30.0 + (t / 4.0).sin() * 12.0;

        data.push(SampleRecord {
            city: city.to_string(),
            timestamp_ms: (end - Duration::hours(age_hours)).timestamp_millis(),
            pm25: pm25.max(0.0).round(),
            no2: no2.max(0.0).round(),
            o3: o3.max(0.0).round(),
        });
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_requested_length() {
        let data = synthetic_history("London", 48, fixed_end());
        assert_eq!(data.len(), 48);
    }

    #[test]
    fn test_reproducible_per_city() {
        let first = synthetic_history("London", 24, fixed_end());
        let second = synthetic_history("london", 24, fixed_end());

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.pm25, b.pm25);
            assert_eq!(a.no2, b.no2);
            assert_eq!(a.o3, b.o3);
        }
    }

    #[test]
    fn test_cities_differ() {
        let london = synthetic_history("London", 24, fixed_end());
        let paris = synthetic_history("Paris", 24, fixed_end());

        let identical = london
            .iter()
            .zip(&paris)
            .all(|(a, b)| a.pm25 == b.pm25 && a.no2 == b.no2 && a.o3 == b.o3);
        assert!(!identical);
    }

    #[test]
    fn test_values_non_negative_and_hourly_spaced() {
        let data = synthetic_history("Delhi", 24, fixed_end());

        for record in &data {
            assert!(record.pm25 >= 0.0);
            assert!(record.no2 >= 0.0);
            assert!(record.o3 >= 0.0);
        }
        for pair in data.windows(2) {
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, 3_600_000);
        }
        assert_eq!(data.last().unwrap().timestamp_ms, fixed_end().timestamp_millis());
    }
}
