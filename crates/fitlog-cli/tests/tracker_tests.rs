//! End-to-end tests for the tracker library
//!
//! These run each submission path against the file and SQLite backends and
//! read the results back through a fresh store, the way a second CLI
//! invocation would.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use fitlog_cli::config::StorageBackend;
use fitlog_cli::models::{ActivityRecord, ActivityType, BmiRecord, HeartRateRecord};
use fitlog_cli::storage::{self, KeyValueStore, MemoryStore, RecordStore};
use fitlog_cli::validation::{ActivityInput, BmiInput, HeartRateInput};
use fitlog_cli::views;
use fitlog_cli::Tracker;
use tempfile::TempDir;

const BACKENDS: [StorageBackend; 2] = [StorageBackend::File, StorageBackend::Sqlite];

fn open(backend: StorageBackend, dir: &TempDir) -> Tracker<Box<dyn KeyValueStore>> {
    let store = storage::open_backend(backend, dir.path()).unwrap();
    Tracker::open(store).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn bmi(height_cm: f64, weight_kg: f64) -> BmiInput {
    BmiInput {
        height_cm,
        weight_kg,
        age: 35,
        gender: None,
    }
}

mod persistence_tests {
    use super::*;

    #[test]
    fn test_n_submissions_round_trip() {
        for backend in BACKENDS {
            let temp = TempDir::new().unwrap();
            let mut created = Vec::new();
            {
                let mut tracker = open(backend, &temp);
                for (i, bpm) in [55u32, 72, 101, 64].into_iter().enumerate() {
                    let now = at("2024-06-01T06:00:00Z") + Duration::minutes(i as i64);
                    let record = tracker
                        .submit_heart_rate_at(
                            &HeartRateInput {
                                date: day(1),
                                heart_rate_bpm: bpm,
                            },
                            now,
                        )
                        .unwrap();
                    created.push(record);
                }
            }

            let tracker = open(backend, &temp);
            let stored: Vec<HeartRateRecord> = tracker.heart_rates().unwrap();
            assert_eq!(stored, created, "backend {}", backend);
        }
    }

    #[test]
    fn test_activity_fields_survive_reopen() {
        for backend in BACKENDS {
            let temp = TempDir::new().unwrap();
            let input = ActivityInput {
                date: day(3),
                activity_type: ActivityType::Running,
                distance_km: 7.35,
                duration_min: 42.5,
            };
            let record = open(backend, &temp)
                .submit_activity_at(&input, at("2024-06-03T19:30:00Z"))
                .unwrap();

            let stored: Vec<ActivityRecord> = open(backend, &temp).activities().unwrap();
            assert_eq!(stored, vec![record], "backend {}", backend);
        }
    }

    #[test]
    fn test_rejected_submissions_leave_store_untouched() {
        for backend in BACKENDS {
            let temp = TempDir::new().unwrap();
            let mut tracker = open(backend, &temp);
            tracker.submit_bmi(&bmi(170.0, 65.0)).unwrap();

            assert!(tracker.submit_bmi(&bmi(10.0, 65.0)).unwrap_err().is_validation());
            assert!(tracker.submit_bmi(&bmi(170.0, 400.0)).is_err());
            assert!(tracker
                .submit_activity(&ActivityInput {
                    date: day(1),
                    activity_type: ActivityType::Walking,
                    distance_km: -1.0,
                    duration_min: 20.0,
                })
                .is_err());
            assert!(tracker
                .submit_heart_rate(&HeartRateInput {
                    date: day(1),
                    heart_rate_bpm: 10,
                })
                .is_err());

            let reopened = open(backend, &temp);
            assert_eq!(reopened.bmi_history().unwrap().len(), 1);
            assert!(reopened.activities().unwrap().is_empty());
            assert!(reopened.heart_rates().unwrap().is_empty());
            assert_eq!(reopened.store().current_weight().unwrap(), Some(65.0));
        }
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bmi_history.json"), "<<not json>>").unwrap();

        let mut tracker = open(StorageBackend::File, &temp);
        assert!(tracker.bmi_history().unwrap().is_empty());

        tracker.submit_bmi(&bmi(160.0, 45.0)).unwrap();
        let history: Vec<BmiRecord> = tracker.bmi_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].bmi, 17.6);
        assert_eq!(history[0].category_name, "Underweight");
    }

    #[test]
    fn test_non_utf8_entries_read_as_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bmi_history.json"), [0xff, 0xfe]).unwrap();
        std::fs::write(temp.path().join("current_weight.json"), [0xff, 0xfe]).unwrap();

        let mut tracker = open(StorageBackend::File, &temp);
        assert!(tracker.bmi_history().unwrap().is_empty());
        assert_eq!(tracker.store().current_weight().unwrap(), None);

        let record = tracker
            .submit_activity(&ActivityInput {
                date: day(1),
                activity_type: ActivityType::Walking,
                distance_km: 4.0,
                duration_min: 60.0,
            })
            .unwrap();
        assert_eq!(record.calories, 245);
    }

    #[test]
    fn test_reads_browser_export() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                "activities",
                r#"[{"date":"2024-06-01","type":"walking","distance":3,"duration":40,"calories":163,"timestamp":"2024-06-01T10:00:00.000Z"}]"#,
            )
            .unwrap();
        backend.set("current_weight", "70").unwrap();

        let store = RecordStore::new(backend);
        let activities: Vec<ActivityRecord> = store.load().unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, ActivityType::Walking);
        assert_eq!(store.current_weight().unwrap(), Some(70.0));
    }
}

mod calorie_tests {
    use super::*;

    #[test]
    fn test_first_activity_uses_default_weight() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let record = tracker
            .submit_activity(&ActivityInput {
                date: day(1),
                activity_type: ActivityType::Walking,
                distance_km: 5.0,
                duration_min: 60.0,
            })
            .unwrap();
        assert_eq!(record.calories, 245);
    }

    #[test]
    fn test_weight_follows_latest_bmi() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.submit_bmi(&bmi(175.0, 90.0)).unwrap();
        tracker.submit_bmi(&bmi(175.0, 80.0)).unwrap();

        let record = tracker
            .submit_activity(&ActivityInput {
                date: day(1),
                activity_type: ActivityType::Running,
                distance_km: 5.0,
                duration_min: 30.0,
            })
            .unwrap();
        assert_eq!(record.calories, 280);
    }
}

mod view_tests {
    use super::*;

    #[test]
    fn test_dashboard_counts_only_today() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let today = day(10);
        let created_today = at("2024-06-10T12:00:00Z");

        // Dated yesterday but entered today: must not count
        tracker
            .submit_activity_at(
                &ActivityInput {
                    date: day(9),
                    activity_type: ActivityType::Running,
                    distance_km: 10.0,
                    duration_min: 50.0,
                },
                created_today,
            )
            .unwrap();
        for km in [1.25, 2.0] {
            tracker
                .submit_activity_at(
                    &ActivityInput {
                        date: today,
                        activity_type: ActivityType::Walking,
                        distance_km: km,
                        duration_min: 60.0,
                    },
                    created_today,
                )
                .unwrap();
        }

        let views = views::render_all(&tracker, today).unwrap();
        assert_eq!(views.dashboard.today.total_km, 3.3);
        assert_eq!(views.dashboard.today.total_calories, 490);
        assert_eq!(views.dashboard.km_display(), "3.3 km");
        assert_eq!(views.activities.rows.len(), 3);
        assert_eq!(views.activities.rows[2].date, "2024-06-09");
    }

    #[test]
    fn test_full_refresh_after_each_submission() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        let today = day(1);

        let before = views::render_all(&tracker, today).unwrap();
        assert_eq!(before.dashboard.heart_rate_display(), "-- bpm");

        tracker
            .submit_bmi_at(&bmi(170.0, 65.0), at("2024-06-01T07:00:00Z"))
            .unwrap();
        tracker
            .submit_heart_rate_at(
                &HeartRateInput {
                    date: today,
                    heart_rate_bpm: 59,
                },
                at("2024-06-01T07:05:00Z"),
            )
            .unwrap();

        let after = views::render_all(&tracker, today).unwrap();
        assert_eq!(after.dashboard.bmi_display(), "22.5");
        assert_eq!(after.dashboard.heart_rate_display(), "59 bpm");
        assert_eq!(after.bmi_history.rows[0].category, "Normal");
        let info = after.heart_rate.unwrap();
        assert!(info.comment.starts_with("Slow heart rate"));
    }
}
