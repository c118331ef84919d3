use serde::Serialize;

use crate::accounts::Account;
use crate::applications::Application;
use crate::enums::AccountType;
use crate::errors::{ApiError, EligibilityError};
use crate::posts::JobPost;
use crate::store::RecordStore;

/// Per-post control state for the viewer, as rendered on a listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyState {
    /// Unauthenticated viewers get a login link.
    LoginToApply,
    /// Authenticated but not an employee: disabled control.
    EmployersCannotApply,
    ApplyNow,
    Applied,
}

pub fn apply_state(viewer: Option<&Account>, already_applied: bool) -> ApplyState {
    match viewer {
        None => ApplyState::LoginToApply,
        Some(account) if account.account_type != AccountType::Employee => {
            ApplyState::EmployersCannotApply
        }
        Some(_) if already_applied => ApplyState::Applied,
        Some(_) => ApplyState::ApplyNow,
    }
}

/// True iff the viewer may apply: present, employee, and not already on
/// the post's application list.
pub fn can_apply(account: Option<&Account>, already_applied: bool) -> bool {
    matches!(account, Some(a) if a.account_type == AccountType::Employee) && !already_applied
}

/// Re-checks eligibility, then records the application. The existence
/// read catches sequential repeats; the store's unique constraint closes
/// the window between the check and the insert.
pub fn apply(store: &RecordStore, account: &Account, post: &JobPost) -> Result<Application, ApiError> {
    let already_applied = Application::exists(store, post.id, account.id)?;
    if !can_apply(Some(account), already_applied) {
        let reason = if account.account_type != AccountType::Employee {
            EligibilityError::WrongRole
        } else {
            EligibilityError::AlreadyApplied
        };
        return Err(ApiError::NotEligible(reason));
    }
    Application::insert(store, post.id, account.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EmploymentType, LocationType};
    use crate::posts::NewJobPost;
    use rusqlite::params;
    use tempfile::NamedTempFile;

    fn account(account_type: AccountType) -> Account {
        Account {
            id: 1,
            directory_id: "dir-1".to_string(),
            account_type,
            display_name: "Test".to_string(),
            email: "test@example.com".to_string(),
            created_at: "now".to_string(),
        }
    }

    #[test]
    fn can_apply_truth_table() {
        let employee = account(AccountType::Employee);
        let employer = account(AccountType::Employer);
        let customer = account(AccountType::Customer);

        assert!(can_apply(Some(&employee), false));
        assert!(!can_apply(Some(&employee), true));
        assert!(!can_apply(Some(&employer), false));
        assert!(!can_apply(Some(&customer), false));
        assert!(!can_apply(None, false));
    }

    #[test]
    fn apply_state_matches_the_button_table() {
        let employee = account(AccountType::Employee);
        let employer = account(AccountType::Employer);

        assert_eq!(apply_state(None, false), ApplyState::LoginToApply);
        assert_eq!(
            apply_state(Some(&employer), false),
            ApplyState::EmployersCannotApply
        );
        assert_eq!(apply_state(Some(&employee), false), ApplyState::ApplyNow);
        assert_eq!(apply_state(Some(&employee), true), ApplyState::Applied);
    }

    #[test]
    fn apply_state_serializes_to_wire_values() {
        let json = serde_json::to_string(&ApplyState::LoginToApply).expect("serializes");
        assert_eq!(json, "\"login-to-apply\"");
        let json = serde_json::to_string(&ApplyState::EmployersCannotApply).expect("serializes");
        assert_eq!(json, "\"employers-cannot-apply\"");
    }

    fn seeded_store() -> (RecordStore, Account, JobPost, NamedTempFile) {
        let file = NamedTempFile::new().expect("temp db");
        let store = RecordStore::new(file.path());
        store.init_schema().expect("schema");

        let conn = store.open().expect("open");
        for (email, dir) in [("boss@example.com", "dir-boss"), ("worker@example.com", "dir-worker")] {
            conn.execute(
                "INSERT INTO credentials (email, password_hash, directory_id, created_at)
                 VALUES (?1, 'x', ?2, 'now')",
                params![email, dir],
            )
            .expect("credential");
        }
        let employer = Account::create(
            &store,
            "dir-boss",
            AccountType::Employer,
            "Boss",
            "boss@example.com",
        )
        .expect("employer");
        let employee = Account::create(
            &store,
            "dir-worker",
            AccountType::Employee,
            "Worker",
            "worker@example.com",
        )
        .expect("employee");
        let post = JobPost::create(
            &store,
            &NewJobPost {
                title: "Backend Engineer".to_string(),
                description: "Ship the job board backend.".to_string(),
                location: "Remote".to_string(),
                location_type: LocationType::Remote,
                employment_type: EmploymentType::FullTime,
                phone_number: "1234567".to_string(),
            },
            employer.id,
        )
        .expect("post");
        (store, employee, post, file)
    }

    #[test]
    fn second_sequential_apply_is_rejected_with_one_row_stored() {
        let (store, employee, post, _db) = seeded_store();

        apply(&store, &employee, &post).expect("first apply");
        match apply(&store, &employee, &post) {
            Err(ApiError::NotEligible(EligibilityError::AlreadyApplied)) => {}
            other => panic!("expected already-applied, got {other:?}"),
        }

        let ids = Application::applied_post_ids(&store, employee.id);
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn wrong_role_is_rejected() {
        let (store, _employee, post, _db) = seeded_store();
        let employer = account(AccountType::Employer);
        match apply(&store, &employer, &post) {
            Err(ApiError::NotEligible(EligibilityError::WrongRole)) => {}
            other => panic!("expected wrong-role, got {other:?}"),
        }
    }
}
