use std::collections::HashSet;

use chrono::Utc;
use rusqlite::{params, Row};
use serde::Serialize;
use tracing::error;

use crate::enums::EmploymentType;
use crate::errors::{ApiError, EligibilityError};
use crate::store::RecordStore;

/// Join record linking an employee account to a post it applied to.
/// Never updated or deleted; `UNIQUE(post_id, account_id)` in the schema
/// is the duplicate gate of record.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub post_id: i64,
    pub account_id: i64,
    pub created_at: String,
}

/// An application joined with its post, as shown on the viewer's
/// "submitted" page.
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedApplication {
    pub id: i64,
    pub post_id: i64,
    pub post_title: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub created_at: String,
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Application {
    /// Inserts the join row. A unique-constraint violation is the
    /// store-level "already applied" signal and is reported as such.
    pub fn insert(
        store: &RecordStore,
        post_id: i64,
        account_id: i64,
    ) -> Result<Application, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteWrite)?;
        let created_at = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO applications (post_id, account_id, created_at) VALUES (?1, ?2, ?3)",
            params![post_id, account_id, created_at],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::NotEligible(EligibilityError::AlreadyApplied)
            } else {
                ApiError::RemoteWrite(e)
            }
        })?;

        Ok(Application {
            id: conn.last_insert_rowid(),
            post_id,
            account_id,
            created_at,
        })
    }

    pub fn exists(store: &RecordStore, post_id: i64, account_id: i64) -> Result<bool, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteRead)?;
        let found: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM applications WHERE post_id = ?1 AND account_id = ?2)",
                params![post_id, account_id],
                |row| row.get(0),
            )
            .map_err(ApiError::RemoteRead)?;
        Ok(found != 0)
    }

    /// The viewer's full applied-post-id set in one query, so the listing
    /// does not issue one existence read per rendered post.
    pub fn applied_post_ids(store: &RecordStore, account_id: i64) -> HashSet<i64> {
        match Self::applied_post_ids_inner(store, account_id) {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, account_id, "failed to read applied post ids");
                HashSet::new()
            }
        }
    }

    fn applied_post_ids_inner(
        store: &RecordStore,
        account_id: i64,
    ) -> rusqlite::Result<HashSet<i64>> {
        let conn = store.open()?;
        let mut stmt = conn.prepare("SELECT post_id FROM applications WHERE account_id = ?1")?;
        let rows = stmt.query_map(params![account_id], |row| row.get(0))?;
        rows.collect()
    }

    pub fn list_for_account(
        store: &RecordStore,
        account_id: i64,
    ) -> Result<Vec<SubmittedApplication>, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteRead)?;
        let mut stmt = conn
            .prepare(
                "SELECT a.id, a.post_id, p.title, p.location, p.employment_type, a.created_at
                 FROM applications a
                 JOIN job_posts p ON a.post_id = p.id
                 WHERE a.account_id = ?1
                 ORDER BY a.created_at DESC, a.id DESC",
            )
            .map_err(ApiError::RemoteRead)?;
        let rows = stmt
            .query_map(params![account_id], Self::submitted_from_row)
            .map_err(ApiError::RemoteRead)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(ApiError::RemoteRead)
    }

    fn submitted_from_row(row: &Row<'_>) -> rusqlite::Result<SubmittedApplication> {
        Ok(SubmittedApplication {
            id: row.get(0)?,
            post_id: row.get(1)?,
            post_title: row.get(2)?,
            location: row.get(3)?,
            employment_type: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}
