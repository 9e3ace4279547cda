use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, error, info};

use crate::db::repositories::assessment_repository::AssessmentRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::assessment::AssessmentRecord;

/// Loads a scoring snapshot. `None` means the caller should serve its
/// fallback bundle: unknown user, no records, or a gateway fault.
pub fn fetch_snapshot(
    gateway: &dyn AssessmentGateway,
    user_id: &str,
) -> Option<Vec<AssessmentRecord>> {
    match gateway.get_assessments(user_id) {
        Ok(records) if records.is_empty() => {
            info!(target: "app::db", user_id, "user has no assessments");
            None
        }
        Ok(records) => Some(records),
        Err(AppError::NotFound) => {
            info!(target: "app::db", user_id, "unknown user");
            None
        }
        Err(err) => {
            error!(target: "app::db", user_id, error = %err, "assessment gateway failed");
            None
        }
    }
}

/// Read-only source of a user's assessment snapshot.
pub trait AssessmentGateway: Send + Sync {
    /// Records in storage order; `AppError::NotFound` for unknown users.
    fn get_assessments(&self, user_id: &str) -> AppResult<Vec<AssessmentRecord>>;

    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
pub struct SqliteAssessmentGateway {
    db: DbPool,
}

impl SqliteAssessmentGateway {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DbPool {
        &self.db
    }
}

impl AssessmentGateway for SqliteAssessmentGateway {
    fn get_assessments(&self, user_id: &str) -> AppResult<Vec<AssessmentRecord>> {
        self.db.with_connection(|conn| {
            if AssessmentRepository::find_user(conn, user_id)?.is_none() {
                return Err(AppError::not_found());
            }
            let records = AssessmentRepository::load_records(conn, user_id)?;
            debug!(
                target: "app::db",
                user_id,
                assessments = records.len(),
                "loaded assessment snapshot"
            );
            Ok(records)
        })
    }

    fn is_available(&self) -> bool {
        self.db.get_connection().is_ok()
    }
}

/// Process-local gateway keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryAssessmentGateway {
    users: RwLock<HashMap<String, Vec<AssessmentRecord>>>,
}

impl InMemoryAssessmentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user_id: impl Into<String>, records: Vec<AssessmentRecord>) -> Self {
        self.insert_user(user_id, records);
        self
    }

    /// Registers a user, replacing any records already stored for them.
    pub fn insert_user(&self, user_id: impl Into<String>, records: Vec<AssessmentRecord>) {
        let mut users = match self.users.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.insert(user_id.into(), records);
    }

    pub fn push_record(&self, user_id: &str, record: AssessmentRecord) -> AppResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::other("assessment store lock poisoned"))?;
        let records = users.get_mut(user_id).ok_or_else(AppError::not_found)?;
        records.push(record);
        Ok(())
    }
}

impl AssessmentGateway for InMemoryAssessmentGateway {
    fn get_assessments(&self, user_id: &str) -> AppResult<Vec<AssessmentRecord>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::other("assessment store lock poisoned"))?;
        users.get(user_id).cloned().ok_or_else(AppError::not_found)
    }
}
