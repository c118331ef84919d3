use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use serde::Serialize;
use tracing::error;

use crate::enums::{EmploymentType, LocationType};
use crate::errors::ApiError;
use crate::store::RecordStore;

/// A job listing. Immutable once created; there is no edit or delete path.
#[derive(Debug, Clone, Serialize)]
pub struct JobPost {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub location_type: LocationType,
    pub employment_type: EmploymentType,
    pub phone_number: String,
    pub author_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated form output, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobPost {
    pub title: String,
    pub description: String,
    pub location: String,
    pub location_type: LocationType,
    pub employment_type: EmploymentType,
    pub phone_number: String,
}

impl JobPost {
    pub fn create(
        store: &RecordStore,
        input: &NewJobPost,
        author_id: i64,
    ) -> Result<JobPost, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteWrite)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO job_posts (title, description, location, location_type,
             employment_type, phone_number, author_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                input.title,
                input.description,
                input.location,
                input.location_type,
                input.employment_type,
                input.phone_number,
                author_id,
                now,
                now
            ],
        )
        .map_err(ApiError::RemoteWrite)?;

        Ok(JobPost {
            id: conn.last_insert_rowid(),
            title: input.title.clone(),
            description: input.description.clone(),
            location: input.location.clone(),
            location_type: input.location_type,
            employment_type: input.employment_type,
            phone_number: input.phone_number.clone(),
            author_id,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn get(store: &RecordStore, id: i64) -> Result<Option<JobPost>, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteRead)?;
        conn.query_row(
            "SELECT id, title, description, location, location_type, employment_type,
             phone_number, author_id, created_at, updated_at
             FROM job_posts WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
        .map_err(ApiError::RemoteRead)
    }

    /// All posts, newest first. A failed read degrades to an empty
    /// listing; callers cannot tell it apart from "no posts".
    pub fn list(store: &RecordStore) -> Vec<JobPost> {
        match Self::list_inner(store) {
            Ok(posts) => posts,
            Err(e) => {
                error!(error = %e, "failed to read job posts, returning empty listing");
                Vec::new()
            }
        }
    }

    fn list_inner(store: &RecordStore) -> rusqlite::Result<Vec<JobPost>> {
        let conn = store.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, location, location_type, employment_type,
             phone_number, author_id, created_at, updated_at
             FROM job_posts
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<JobPost> {
        Ok(JobPost {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            location: row.get(3)?,
            location_type: row.get(4)?,
            employment_type: row.get(5)?,
            phone_number: row.get(6)?,
            author_id: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AccountType;
    use crate::accounts::Account;
    use tempfile::NamedTempFile;

    fn test_store() -> (RecordStore, NamedTempFile) {
        let file = NamedTempFile::new().expect("temp db");
        let store = RecordStore::new(file.path());
        store.init_schema().expect("schema");
        (store, file)
    }

    fn seed_employer(store: &RecordStore) -> Account {
        let conn = store.open().expect("open");
        conn.execute(
            "INSERT INTO credentials (email, password_hash, directory_id, created_at)
             VALUES ('boss@example.com', 'x', 'dir-boss', 'now')",
            [],
        )
        .expect("credential");
        Account::create(
            store,
            "dir-boss",
            AccountType::Employer,
            "Boss",
            "boss@example.com",
        )
        .expect("account")
    }

    fn sample_input(title: &str) -> NewJobPost {
        NewJobPost {
            title: title.to_string(),
            description: "A role with enough description text.".to_string(),
            location: "Nairobi, Kenya".to_string(),
            location_type: LocationType::Remote,
            employment_type: EmploymentType::FullTime,
            phone_number: "+254 700 000 000".to_string(),
        }
    }

    #[test]
    fn newest_post_lists_first() {
        let (store, _db) = test_store();
        let employer = seed_employer(&store);

        JobPost::create(&store, &sample_input("First"), employer.id).expect("first");
        JobPost::create(&store, &sample_input("Second"), employer.id).expect("second");

        let posts = JobPost::list(&store);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Second");
        assert_eq!(posts[1].title, "First");
    }

    #[test]
    fn create_then_get_round_trips_the_enums() {
        let (store, _db) = test_store();
        let employer = seed_employer(&store);

        let created = JobPost::create(&store, &sample_input("QA Lead"), employer.id)
            .expect("create");
        let fetched = JobPost::get(&store, created.id)
            .expect("read")
            .expect("present");
        assert_eq!(fetched.location_type, LocationType::Remote);
        assert_eq!(fetched.employment_type, EmploymentType::FullTime);
        assert_eq!(fetched.author_id, employer.id);
    }

    #[test]
    fn read_failure_degrades_to_empty_listing() {
        let store = RecordStore::new("/nonexistent/path/jobboard.db");
        assert!(JobPost::list(&store).is_empty());
    }
}
