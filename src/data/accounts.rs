use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use serde::Serialize;

use crate::enums::AccountType;
use crate::errors::ApiError;
use crate::store::RecordStore;

/// Profile row the application writes as step two of sign-up. The
/// credential itself lives with the account directory; this row carries
/// the role and display fields.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: i64,
    pub directory_id: String,
    pub account_type: AccountType,
    pub display_name: String,
    pub email: String,
    pub created_at: String,
}

impl Account {
    pub fn create(
        store: &RecordStore,
        directory_id: &str,
        account_type: AccountType,
        display_name: &str,
        email: &str,
    ) -> Result<Account, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteWrite)?;
        let created_at = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO accounts (directory_id, account_type, display_name, email, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![directory_id, account_type, display_name, email, created_at],
        )
        .map_err(ApiError::RemoteWrite)?;

        Ok(Account {
            id: conn.last_insert_rowid(),
            directory_id: directory_id.to_string(),
            account_type,
            display_name: display_name.to_string(),
            email: email.to_string(),
            created_at,
        })
    }

    pub fn get_by_id(store: &RecordStore, id: i64) -> Result<Option<Account>, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteRead)?;
        conn.query_row(
            "SELECT id, directory_id, account_type, display_name, email, created_at
             FROM accounts WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
        .map_err(ApiError::RemoteRead)
    }

    pub fn get_by_directory_id(
        store: &RecordStore,
        directory_id: &str,
    ) -> Result<Option<Account>, ApiError> {
        let conn = store.open().map_err(ApiError::RemoteRead)?;
        conn.query_row(
            "SELECT id, directory_id, account_type, display_name, email, created_at
             FROM accounts WHERE directory_id = ?1",
            params![directory_id],
            Self::from_row,
        )
        .optional()
        .map_err(ApiError::RemoteRead)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
        Ok(Account {
            id: row.get(0)?,
            directory_id: row.get(1)?,
            account_type: row.get(2)?,
            display_name: row.get(3)?,
            email: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn test_store() -> (RecordStore, NamedTempFile) {
        let file = NamedTempFile::new().expect("temp db");
        let store = RecordStore::new(file.path());
        store.init_schema().expect("schema");
        (store, file)
    }

    fn seed_credential(store: &RecordStore, directory_id: &str, email: &str) {
        let conn = store.open().expect("open");
        conn.execute(
            "INSERT INTO credentials (email, password_hash, directory_id, created_at)
             VALUES (?1, 'x', ?2, 'now')",
            params![email, directory_id],
        )
        .expect("credential");
    }

    #[test]
    fn create_then_fetch_by_both_keys() {
        let (store, _db) = test_store();
        seed_credential(&store, "dir-7", "jane@example.com");

        let created = Account::create(
            &store,
            "dir-7",
            AccountType::Employee,
            "Jane Doe",
            "jane@example.com",
        )
        .expect("create");

        let by_id = Account::get_by_id(&store, created.id)
            .expect("read")
            .expect("present");
        assert_eq!(by_id.display_name, "Jane Doe");
        assert_eq!(by_id.account_type, AccountType::Employee);

        let by_directory = Account::get_by_directory_id(&store, "dir-7")
            .expect("read")
            .expect("present");
        assert_eq!(by_directory.id, created.id);
    }

    #[test]
    fn missing_account_reads_as_none() {
        let (store, _db) = test_store();
        assert!(Account::get_by_id(&store, 42).expect("read").is_none());
    }
}
