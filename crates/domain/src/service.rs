use log::{debug, error};

use crate::{
    CreateError, DeleteError, GeneratedRoutine, HistoryRepository, HistoryService, LogEntry,
    LogEntryID, Measurement, Name, Profile, ProfileID, ProfileRepository, ProfileService,
    ProfileType, ReadError, UpdateError, Workout, WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    async fn get_profiles(&self) -> Result<Vec<Profile>, ReadError> {
        log_on_error!(self.repository.read_profiles(), ReadError, "get", "profiles")
    }

    async fn create_profile(&self, name: Name, kind: ProfileType) -> Result<Profile, CreateError> {
        log_on_error!(
            self.repository.create_profile(name, kind),
            CreateError,
            "create",
            "profile"
        )
    }

    async fn replace_profile(&self, profile: Profile) -> Result<Profile, UpdateError> {
        log_on_error!(
            self.repository.replace_profile(profile),
            UpdateError,
            "replace",
            "profile"
        )
    }

    async fn delete_profile(&self, id: ProfileID) -> Result<ProfileID, DeleteError> {
        log_on_error!(
            self.repository.delete_profile(id),
            DeleteError,
            "delete",
            "profile"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self, profile_id: ProfileID) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(profile_id),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn save_generated(
        &self,
        routine: GeneratedRoutine,
        profile_id: ProfileID,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository
                .create_workout(routine.into_workout(profile_id)),
            CreateError,
            "save",
            "generated workout"
        )
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(workout),
            UpdateError,
            "replace",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: HistoryRepository> HistoryService for Service<R> {
    async fn get_log_entries(&self, profile_id: ProfileID) -> Result<Vec<LogEntry>, ReadError> {
        log_on_error!(
            self.repository.read_log_entries(profile_id),
            ReadError,
            "get",
            "log entries"
        )
    }

    async fn log_entry(&self, entry: LogEntry) -> Result<LogEntry, CreateError> {
        log_on_error!(
            self.repository.create_log_entry(entry),
            CreateError,
            "create",
            "log entry"
        )
    }

    async fn delete_log_entry(&self, id: LogEntryID) -> Result<LogEntryID, DeleteError> {
        log_on_error!(
            self.repository.delete_log_entry(id),
            DeleteError,
            "delete",
            "log entry"
        )
    }

    async fn get_measurements(
        &self,
        profile_id: ProfileID,
    ) -> Result<Vec<Measurement>, ReadError> {
        log_on_error!(
            self.repository.read_measurements(profile_id),
            ReadError,
            "get",
            "measurements"
        )
    }

    async fn add_measurement(&self, measurement: Measurement) -> Result<Measurement, CreateError> {
        log_on_error!(
            self.repository.create_measurement(measurement),
            CreateError,
            "create",
            "measurement"
        )
    }
}
