//! Tracker service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hourglass_domain::constants::EXPORT_FILE_PREFIX;
use hourglass_domain::{
    EngineConfig, ExportSnapshot, HourLog, HourglassError, Overview, Project, ProjectCountdown,
    Projection, Result, TrackerDocument,
};
use parking_lot::RwLock;
use uuid::Uuid;

use super::ports::DocumentStore;
use crate::countdown::deadline_countdown;
use crate::pace::{daily_average, distinct_days};
use crate::progress::{level_of, readable_time};
use crate::projection::project_completion;

/// Tracker service
///
/// Owns the in-memory copy of the tracker document and pushes every
/// mutation through the [`DocumentStore`] port. Mutations are
/// read-modify-write: a candidate document is built, saved, and only
/// committed to memory once the save succeeded, so a failed save leaves
/// both the file and the in-memory state at their previous values.
pub struct TrackerService {
    store: Arc<dyn DocumentStore>,
    engine: EngineConfig,
    document: RwLock<TrackerDocument>,
}

impl TrackerService {
    /// Create the service by loading the persisted document.
    ///
    /// # Errors
    /// Returns [`HourglassError::StoreUnavailable`] when the backing store
    /// cannot be read.
    pub async fn load(store: Arc<dyn DocumentStore>, engine: EngineConfig) -> Result<Self> {
        let document = store.load().await?;
        Ok(Self { store, engine, document: RwLock::new(document) })
    }

    /// Current document state (cloned).
    #[must_use]
    pub fn document(&self) -> TrackerDocument {
        self.document.read().clone()
    }

    /// Append a practice entry dated to the current UTC day.
    ///
    /// # Errors
    /// Returns [`HourglassError::InvalidInput`] when `hours` is not a
    /// positive finite number within the configured daily cap, and
    /// [`HourglassError::StoreWrite`] when persisting fails.
    pub async fn log_hours(&self, hours: f64, now: DateTime<Utc>) -> Result<HourLog> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(HourglassError::InvalidInput(
                "hours must be greater than 0".to_string(),
            ));
        }
        if hours > self.engine.max_daily_hours {
            return Err(HourglassError::InvalidInput(format!(
                "daily cap is {} hours",
                self.engine.max_daily_hours
            )));
        }

        let entry = HourLog { date: now.date_naive(), hours };

        let mut candidate = self.document();
        candidate.logs.push(entry.clone());
        candidate.total_hours += hours;
        self.commit(candidate).await?;

        Ok(entry)
    }

    /// Aggregate progress snapshot: level, readable total, observed pace.
    ///
    /// # Errors
    /// Returns [`HourglassError::InvalidInput`] when the stored total is
    /// out of the valid range (a corrupted document).
    pub fn overview(&self) -> Result<Overview> {
        let document = self.document.read();
        let level = level_of(document.total_hours)?;

        Ok(Overview {
            total_hours: document.total_hours,
            readable_total: readable_time(document.total_hours),
            daily_average: daily_average(&document.logs),
            log_count: document.logs.len(),
            distinct_days: distinct_days(&document.logs),
            level,
        })
    }

    /// Project when the mastery target will be reached.
    ///
    /// The caller's pace override wins; otherwise the configured fixed pace
    /// applies, and failing that the observed daily average.
    ///
    /// # Errors
    /// Returns [`HourglassError::InvalidPace`] when the effective pace is
    /// zero or negative.
    pub fn projection(
        &self,
        fixed_daily_hours: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<Projection> {
        let document = self.document.read();
        let average = daily_average(&document.logs);
        let fixed = fixed_daily_hours.or(self.engine.fixed_daily_hours);

        project_completion(document.total_hours, average, fixed, now)
    }

    /// Create a deadline project. The timer starts stopped.
    ///
    /// # Errors
    /// Returns [`HourglassError::InvalidInput`] for blank names and
    /// [`HourglassError::StoreWrite`] when persisting fails.
    pub async fn create_project(
        &self,
        name: &str,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HourglassError::InvalidInput(
                "project name cannot be empty".to_string(),
            ));
        }

        let project = Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            deadline,
            created_at: now,
            is_active: false,
        };

        let mut candidate = self.document();
        candidate.projects.push(project.clone());
        self.commit(candidate).await?;

        Ok(project)
    }

    /// All projects ordered by creation time, each with its countdown.
    #[must_use]
    pub fn list_projects(&self, now: DateTime<Utc>) -> Vec<(Project, ProjectCountdown)> {
        let mut projects = self.document.read().projects.clone();
        projects.sort_by_key(|project| project.created_at);

        projects
            .into_iter()
            .map(|project| {
                let countdown = deadline_countdown(&project, now);
                (project, countdown)
            })
            .collect()
    }

    /// Start or stop the practice timer on a project.
    ///
    /// # Errors
    /// Returns [`HourglassError::NotFound`] for unknown ids and
    /// [`HourglassError::StoreWrite`] when persisting fails.
    pub async fn set_project_active(&self, id: Uuid, active: bool) -> Result<Project> {
        let mut candidate = self.document();
        let project = candidate
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or_else(|| HourglassError::NotFound(format!("project {id}")))?;

        project.is_active = active;
        let updated = project.clone();
        self.commit(candidate).await?;

        Ok(updated)
    }

    /// Remove a project.
    ///
    /// # Errors
    /// Returns [`HourglassError::NotFound`] for unknown ids and
    /// [`HourglassError::StoreWrite`] when persisting fails.
    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        let mut candidate = self.document();
        let before = candidate.projects.len();
        candidate.projects.retain(|project| project.id != id);

        if candidate.projects.len() == before {
            return Err(HourglassError::NotFound(format!("project {id}")));
        }

        self.commit(candidate).await
    }

    /// Snapshot of the whole document with a dated download name.
    #[must_use]
    pub fn export(&self, now: DateTime<Utc>) -> ExportSnapshot {
        ExportSnapshot {
            file_name: format!("{}-{}.json", EXPORT_FILE_PREFIX, now.format("%Y-%m-%d")),
            document: self.document(),
        }
    }

    /// Replace the whole document (restore from a backup).
    ///
    /// # Errors
    /// Returns [`HourglassError::InvalidInput`] when the document's totals
    /// are out of range and [`HourglassError::StoreWrite`] when persisting
    /// fails.
    pub async fn import(&self, document: TrackerDocument) -> Result<()> {
        if !document.total_hours.is_finite() || document.total_hours < 0.0 {
            return Err(HourglassError::InvalidInput(
                "imported total hours must be a non-negative number".to_string(),
            ));
        }
        if document.logs.iter().any(|log| !log.hours.is_finite()) {
            return Err(HourglassError::InvalidInput(
                "imported log entries must have finite hours".to_string(),
            ));
        }

        self.commit(document).await
    }

    /// Wipe all state back to the empty document.
    ///
    /// # Errors
    /// Returns [`HourglassError::StoreWrite`] when persisting fails.
    pub async fn reset(&self) -> Result<()> {
        self.commit(TrackerDocument::default()).await
    }

    /// Persist the candidate, then make it the in-memory state.
    async fn commit(&self, candidate: TrackerDocument) -> Result<()> {
        self.store.save(&candidate).await?;
        *self.document.write() = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// In-memory store double with a failure switch.
    struct MemoryStore {
        document: Mutex<TrackerDocument>,
        fail_saves: AtomicBool,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self { document: Mutex::new(TrackerDocument::default()), fail_saves: AtomicBool::new(false) }
        }

        fn with_document(document: TrackerDocument) -> Self {
            Self { document: Mutex::new(document), fail_saves: AtomicBool::new(false) }
        }

        fn fail_next_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }

        fn persisted(&self) -> TrackerDocument {
            self.document.lock().clone()
        }
    }

    #[async_trait::async_trait]
    impl DocumentStore for MemoryStore {
        async fn load(&self) -> Result<TrackerDocument> {
            Ok(self.document.lock().clone())
        }

        async fn save(&self, document: &TrackerDocument) -> Result<()> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(HourglassError::StoreWrite("disk full".to_string()));
            }
            *self.document.lock() = document.clone();
            Ok(())
        }
    }

    fn at(iso: &str) -> DateTime<Utc> {
        iso.parse().unwrap()
    }

    async fn service_with(store: Arc<MemoryStore>) -> TrackerService {
        TrackerService::load(store, EngineConfig::default()).await.unwrap()
    }

    #[tokio::test]
    async fn log_hours_appends_entry_and_updates_total() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(Arc::clone(&store)).await;

        let entry = service.log_hours(2.5, at("2024-03-01T09:00:00Z")).await.unwrap();

        assert_eq!(entry.hours, 2.5);
        assert_eq!(entry.date.to_string(), "2024-03-01");

        let persisted = store.persisted();
        assert_eq!(persisted.logs.len(), 1);
        assert_eq!(persisted.total_hours, 2.5);
    }

    #[tokio::test]
    async fn log_hours_rejects_non_positive_and_capped_values() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;
        let now = at("2024-03-01T09:00:00Z");

        assert!(service.log_hours(0.0, now).await.is_err());
        assert!(service.log_hours(-1.0, now).await.is_err());
        assert!(service.log_hours(16.5, now).await.is_err());
        assert!(service.log_hours(f64::NAN, now).await.is_err());

        // The cap itself is allowed.
        assert!(service.log_hours(16.0, now).await.is_ok());
    }

    #[tokio::test]
    async fn failed_save_leaves_memory_and_store_untouched() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(Arc::clone(&store)).await;
        let now = at("2024-03-01T09:00:00Z");

        service.log_hours(4.0, now).await.unwrap();
        store.fail_next_saves(true);

        let err = service.log_hours(3.0, now).await.unwrap_err();
        assert!(matches!(err, HourglassError::StoreWrite(_)));

        // Both copies still show only the first entry.
        assert_eq!(service.document().total_hours, 4.0);
        assert_eq!(store.persisted().total_hours, 4.0);

        // A retry after the store recovers goes through cleanly.
        store.fail_next_saves(false);
        service.log_hours(3.0, now).await.unwrap();
        assert_eq!(store.persisted().total_hours, 7.0);
    }

    #[tokio::test]
    async fn overview_reports_level_pace_and_counts() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;

        service.log_hours(2.0, at("2024-03-01T08:00:00Z")).await.unwrap();
        service.log_hours(3.0, at("2024-03-01T20:00:00Z")).await.unwrap();
        service.log_hours(5.0, at("2024-03-02T08:00:00Z")).await.unwrap();

        let overview = service.overview().unwrap();

        assert_eq!(overview.total_hours, 10.0);
        assert_eq!(overview.daily_average, 5.0);
        assert_eq!(overview.log_count, 3);
        assert_eq!(overview.distinct_days, 2);
        assert_eq!(overview.level.level, 1);
        assert_eq!(overview.readable_total, "10 hours");
    }

    #[tokio::test]
    async fn projection_prefers_caller_override_then_configured_pace() {
        let store = Arc::new(MemoryStore::with_document(TrackerDocument {
            logs: Vec::new(),
            projects: Vec::new(),
            total_hours: 9_000.0,
        }));
        let engine = EngineConfig { fixed_daily_hours: Some(10.0), ..EngineConfig::default() };
        let service = TrackerService::load(store, engine).await.unwrap();
        let now = at("2024-01-01T00:00:00Z");

        // Configured pace: 1000 remaining at 10 h/day.
        let configured = service.projection(None, now).unwrap();
        assert_eq!(configured.remaining_days, 100);

        // Caller override wins over the configured pace.
        let overridden = service.projection(Some(20.0), now).unwrap();
        assert_eq!(overridden.remaining_days, 50);
    }

    #[tokio::test]
    async fn projection_without_any_pace_is_invalid() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;

        let err = service.projection(None, at("2024-01-01T00:00:00Z")).unwrap_err();

        assert!(matches!(err, HourglassError::InvalidPace(_)));
    }

    #[tokio::test]
    async fn project_lifecycle_create_toggle_delete() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(Arc::clone(&store)).await;
        let now = at("2024-03-01T09:00:00Z");

        let project =
            service.create_project("  Violin grade 8  ", at("2024-09-01T00:00:00Z"), now).await.unwrap();
        assert_eq!(project.name, "Violin grade 8");
        assert!(!project.is_active);

        let started = service.set_project_active(project.id, true).await.unwrap();
        assert!(started.is_active);
        assert!(store.persisted().projects[0].is_active);

        service.delete_project(project.id).await.unwrap();
        assert!(store.persisted().projects.is_empty());
    }

    #[tokio::test]
    async fn blank_project_names_are_rejected() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;
        let now = at("2024-03-01T09:00:00Z");

        let err = service.create_project("   ", at("2024-09-01T00:00:00Z"), now).await.unwrap_err();

        assert!(matches!(err, HourglassError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unknown_project_ids_are_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;

        let toggle = service.set_project_active(Uuid::new_v4(), true).await.unwrap_err();
        let delete = service.delete_project(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(toggle, HourglassError::NotFound(_)));
        assert!(matches!(delete, HourglassError::NotFound(_)));
    }

    #[tokio::test]
    async fn projects_list_in_creation_order() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;

        service
            .create_project("Second", at("2024-09-01T00:00:00Z"), at("2024-02-01T00:00:00Z"))
            .await
            .unwrap();
        service
            .create_project("First", at("2024-09-01T00:00:00Z"), at("2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        let projects = service.list_projects(at("2024-03-01T00:00:00Z"));

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].0.name, "First");
        assert_eq!(projects[1].0.name, "Second");
    }

    #[tokio::test]
    async fn export_import_round_trips_the_document() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(Arc::clone(&store)).await;
        let now = at("2024-03-05T10:00:00Z");

        service.log_hours(6.0, now).await.unwrap();
        service.create_project("Piano", at("2024-12-31T00:00:00Z"), now).await.unwrap();

        let snapshot = service.export(now);
        assert_eq!(snapshot.file_name, "hourglass-backup-2024-03-05.json");

        service.reset().await.unwrap();
        assert_eq!(service.document(), TrackerDocument::default());

        service.import(snapshot.document.clone()).await.unwrap();
        assert_eq!(service.document(), snapshot.document);
        assert_eq!(store.persisted(), snapshot.document);
    }

    #[tokio::test]
    async fn import_rejects_corrupted_totals() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store).await;

        let document = TrackerDocument {
            logs: Vec::new(),
            projects: Vec::new(),
            total_hours: -4.0,
        };

        let err = service.import(document).await.unwrap_err();

        assert!(matches!(err, HourglassError::InvalidInput(_)));
    }
}
