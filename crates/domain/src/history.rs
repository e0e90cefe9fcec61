use chrono::{Datelike, NaiveDate};
use derive_more::Deref;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Name, ProfileID, Progress, ReadError, Workout, WorkoutID,
    current_streak, longest_streak, progress,
};

#[allow(async_fn_in_trait)]
pub trait HistoryService {
    async fn get_log_entries(&self, profile_id: ProfileID) -> Result<Vec<LogEntry>, ReadError>;
    async fn log_entry(&self, entry: LogEntry) -> Result<LogEntry, CreateError>;
    async fn delete_log_entry(&self, id: LogEntryID) -> Result<LogEntryID, DeleteError>;
    async fn get_measurements(&self, profile_id: ProfileID)
    -> Result<Vec<Measurement>, ReadError>;
    async fn add_measurement(&self, measurement: Measurement) -> Result<Measurement, CreateError>;

    async fn get_summary(
        &self,
        profile_id: ProfileID,
        today: NaiveDate,
    ) -> Result<HistorySummary, ReadError> {
        let entries = self.get_log_entries(profile_id).await?;
        let measurements = self.get_measurements(profile_id).await?;
        Ok(HistorySummary::new(&entries, &measurements, today))
    }
}

#[allow(async_fn_in_trait)]
pub trait HistoryRepository {
    async fn read_log_entries(&self, profile_id: ProfileID) -> Result<Vec<LogEntry>, ReadError>;
    async fn create_log_entry(&self, entry: LogEntry) -> Result<LogEntry, CreateError>;
    async fn delete_log_entry(&self, id: LogEntryID) -> Result<LogEntryID, DeleteError>;
    async fn read_measurements(&self, profile_id: ProfileID)
    -> Result<Vec<Measurement>, ReadError>;
    async fn create_measurement(&self, measurement: Measurement)
    -> Result<Measurement, CreateError>;
}

#[derive(
    Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LogEntryID(Uuid);

impl LogEntryID {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(crate::random_uuid(rng))
    }
}

impl From<Uuid> for LogEntryID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for LogEntryID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A completed workout or a taught or attended class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryID,
    pub profile_id: ProfileID,
    pub date: NaiveDate,
    pub kind: LogKind,
    pub name: Name,
    pub minutes: u32,
}

impl LogEntry {
    pub fn completed<R: Rng + ?Sized>(workout: &Workout, date: NaiveDate, rng: &mut R) -> Self {
        Self {
            id: LogEntryID::random(rng),
            profile_id: workout.profile_id,
            date,
            kind: LogKind::Workout {
                workout_id: Some(workout.id),
            },
            name: workout.name.clone(),
            minutes: workout.estimated_minutes,
        }
    }

    /// A class taught or attended by an instructor.
    pub fn class<R: Rng + ?Sized>(
        profile_id: ProfileID,
        date: NaiveDate,
        name: Name,
        minutes: u32,
        rng: &mut R,
    ) -> Self {
        Self {
            id: LogEntryID::random(rng),
            profile_id,
            date,
            kind: LogKind::Class,
            name,
            minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Workout { workout_id: Option<WorkoutID> },
    Class,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementKind {
    /// Body weight in kg.
    Weight,
    /// Jump height in cm.
    Jump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub profile_id: ProfileID,
    pub date: NaiveDate,
    pub kind: MeasurementKind,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub workouts_this_week: u32,
    pub classes_this_week: u32,
    pub sessions_this_month: u32,
    pub minutes_this_month: u32,
    pub weight: Option<Progress>,
    pub jump: Option<Progress>,
}

impl HistorySummary {
    #[must_use]
    pub fn new(entries: &[LogEntry], measurements: &[Measurement], today: NaiveDate) -> Self {
        let dates = entries.iter().map(|e| e.date).collect::<Vec<_>>();
        let this_week = |date: NaiveDate| date.iso_week() == today.iso_week();
        let this_month =
            |date: NaiveDate| date.year() == today.year() && date.month() == today.month();

        let series = |kind: MeasurementKind| {
            measurements
                .iter()
                .filter(|m| m.kind == kind)
                .map(|m| (m.date, m.value))
                .collect::<Vec<_>>()
        };

        let count = |filter: &dyn Fn(&LogEntry) -> bool| {
            u32::try_from(entries.iter().filter(|e| filter(e)).count()).unwrap_or(u32::MAX)
        };

        Self {
            current_streak: current_streak(&dates, today),
            longest_streak: longest_streak(&dates),
            workouts_this_week: count(&|e| {
                this_week(e.date) && matches!(e.kind, LogKind::Workout { .. })
            }),
            classes_this_week: count(&|e| this_week(e.date) && e.kind == LogKind::Class),
            sessions_this_month: count(&|e| this_month(e.date)),
            minutes_this_month: entries
                .iter()
                .filter(|e| this_month(e.date))
                .map(|e| e.minutes)
                .fold(0, u32::saturating_add),
            weight: progress(&series(MeasurementKind::Weight)),
            jump: progress(&series(MeasurementKind::Jump)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::WorkoutOrigin;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entry(id: u128, date: NaiveDate, kind: LogKind, minutes: u32) -> LogEntry {
        LogEntry {
            id: id.into(),
            profile_id: 1.into(),
            date,
            kind,
            name: Name::new("Session").unwrap(),
            minutes,
        }
    }

    fn measurement(date: NaiveDate, kind: MeasurementKind, value: f32) -> Measurement {
        Measurement {
            profile_id: 1.into(),
            date,
            kind,
            value,
        }
    }

    #[test]
    fn test_log_entry_completed() {
        let workout = Workout {
            id: 5.into(),
            profile_id: 2.into(),
            name: Name::new("Core - Easy Intensity").unwrap(),
            summary: String::from("3 exercises using Bodyweight"),
            exercises: vec![],
            estimated_minutes: 18,
            origin: WorkoutOrigin::Generated,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let entry = LogEntry::completed(&workout, date(2024, 5, 1), &mut rng);
        assert_eq!(
            entry,
            LogEntry {
                id: entry.id,
                profile_id: 2.into(),
                date: date(2024, 5, 1),
                kind: LogKind::Workout {
                    workout_id: Some(5.into())
                },
                name: Name::new("Core - Easy Intensity").unwrap(),
                minutes: 18,
            }
        );
        let mut same_seed = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            entry.id,
            LogEntry::completed(&workout, date(2024, 5, 1), &mut same_seed).id
        );
        assert_ne!(
            entry.id,
            LogEntry::completed(&workout, date(2024, 5, 1), &mut rng).id
        );
    }

    #[test]
    fn test_log_entry_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let entry = LogEntry::class(
            3.into(),
            date(2024, 5, 2),
            Name::new("Spin Class").unwrap(),
            45,
            &mut rng,
        );
        assert!(!entry.id.is_nil());
        assert_eq!(entry.kind, LogKind::Class);
        assert_eq!(entry.profile_id, ProfileID::from(3));
        assert_eq!(entry.minutes, 45);
    }

    #[test]
    fn test_history_summary() {
        let workout = LogKind::Workout { workout_id: None };
        // 2024-03-13 is a Wednesday
        let entries = [
            entry(1, date(2024, 2, 28), workout, 30),
            entry(2, date(2024, 3, 4), workout, 20),
            entry(3, date(2024, 3, 11), LogKind::Class, 45),
            entry(4, date(2024, 3, 12), workout, 25),
            entry(5, date(2024, 3, 13), workout, 15),
            entry(6, date(2024, 3, 13), LogKind::Class, 60),
        ];
        let measurements = [
            measurement(date(2024, 1, 1), MeasurementKind::Weight, 80.0),
            measurement(date(2024, 3, 1), MeasurementKind::Weight, 78.5),
            measurement(date(2024, 2, 1), MeasurementKind::Jump, 40.0),
        ];

        let summary = HistorySummary::new(&entries, &measurements, date(2024, 3, 13));

        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.workouts_this_week, 2);
        assert_eq!(summary.classes_this_week, 2);
        assert_eq!(summary.sessions_this_month, 5);
        assert_eq!(summary.minutes_this_month, 165);
        assert_approx_eq!(summary.weight.unwrap().change, -1.5);
        assert_approx_eq!(summary.jump.unwrap().change, 0.0);
    }

    #[test]
    fn test_history_summary_empty() {
        let summary = HistorySummary::new(&[], &[], date(2024, 3, 13));
        assert_eq!(
            summary,
            HistorySummary {
                current_streak: 0,
                longest_streak: 0,
                workouts_this_week: 0,
                classes_this_week: 0,
                sessions_this_month: 0,
                minutes_this_month: 0,
                weight: None,
                jump: None,
            }
        );
    }
}
