use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::Account;
use crate::enc;
use crate::errors::ApiError;
use crate::session::SessionStore;
use crate::store::RecordStore;

struct Credential {
    directory_id: String,
    password_hash: String,
}

/// The account directory: credential storage, session issuance, and
/// password reset. Profile rows (role, display fields) are the
/// application's own business and live in `accounts`; this module only
/// owns the `credentials` table and the session registry.
#[derive(Clone)]
pub struct AccountDirectory {
    store: RecordStore,
    sessions: SessionStore,
    hash_secret: String,
}

impl AccountDirectory {
    pub fn new(store: RecordStore, sessions: SessionStore, hash_secret: String) -> Self {
        Self {
            store,
            sessions,
            hash_secret,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Creates a credential and returns its directory id. The caller is
    /// expected to follow up with the profile-row insert (two-step
    /// sign-up).
    pub fn sign_up(&self, email: &str, password: &str) -> Result<String, ApiError> {
        if password.chars().count() < 8 {
            return Err(ApiError::Validation(
                "Password must be at least 8 characters long".to_string(),
            ));
        }
        if self.credential_by_email(email)?.is_some() {
            return Err(ApiError::Validation(
                "An account with this email already exists.".to_string(),
            ));
        }

        let directory_id = Uuid::new_v4().to_string();
        let password_hash = enc::hash_password(password, &self.hash_secret);
        let conn = self.store.open().map_err(ApiError::RemoteWrite)?;
        conn.execute(
            "INSERT INTO credentials (email, password_hash, directory_id, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![email, password_hash, directory_id, Utc::now().to_rfc3339()],
        )
        .map_err(ApiError::RemoteWrite)?;

        info!(email = %email, "credential created");
        Ok(directory_id)
    }

    /// Verifies the password and issues a session token. `None` means the
    /// credentials did not match; callers decide how to word that.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Option<(String, Account)>, ApiError> {
        let Some(credential) = self.credential_by_email(email)? else {
            return Ok(None);
        };
        if !enc::verify_password(password, &credential.password_hash, &self.hash_secret) {
            return Ok(None);
        }
        let Some(account) = Account::get_by_directory_id(&self.store, &credential.directory_id)?
        else {
            // Step two of sign-up never happened for this credential.
            warn!(email = %email, "credential has no matching profile row");
            return Ok(None);
        };

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(&token, account.id);
        info!(account_id = account.id, "session issued");
        Ok(Some((token, account)))
    }

    pub fn sign_out(&self, token: &str) -> bool {
        self.sessions.remove(token)
    }

    pub fn get_session(&self, token: &str) -> Result<Option<Account>, ApiError> {
        let Some(account_id) = self.sessions.resolve(token) else {
            return Ok(None);
        };
        Account::get_by_id(&self.store, account_id)
    }

    /// Issues a reset token for a known email. Delivering it (and the
    /// redemption flow) belongs to the hosted mail side of the directory;
    /// the route reports success either way so email ownership cannot be
    /// probed.
    pub fn reset_password(&self, email: &str) -> Result<Option<String>, ApiError> {
        if self.credential_by_email(email)?.is_none() {
            return Ok(None);
        }
        let token = Uuid::new_v4().to_string();
        info!(email = %email, "password reset token issued");
        Ok(Some(token))
    }

    fn credential_by_email(&self, email: &str) -> Result<Option<Credential>, ApiError> {
        let conn = self.store.open().map_err(ApiError::RemoteRead)?;
        conn.query_row(
            "SELECT directory_id, password_hash FROM credentials WHERE email = ?1",
            params![email],
            |row| {
                Ok(Credential {
                    directory_id: row.get(0)?,
                    password_hash: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(ApiError::RemoteRead)
    }
}
