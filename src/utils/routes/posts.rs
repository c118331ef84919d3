use actix_web::{get, post, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::accounts::Account;
use crate::applications::Application;
use crate::directory::AccountDirectory;
use crate::enums::AccountType;
use crate::errors::ApiError;
use crate::posts::JobPost;
use crate::store::RecordStore;
use crate::validate::{validate, JobPostForm};
use crate::workflow::{apply_state, ApplyState};

/// A post as listed, carrying the viewer's per-post control state.
#[derive(Debug, Serialize)]
struct ListedPost {
    #[serde(flatten)]
    post: JobPost,
    apply_state: ApplyState,
}

#[post("/api/v1/create_post")]
pub async fn create_post(
    auth: Option<BearerAuth>,
    body: web::Json<JobPostForm>,
    store: web::Data<RecordStore>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let account = super::resolve_account(auth.as_ref(), &directory)?;
    if account.account_type != AccountType::Employer {
        return Err(ApiError::Forbidden("Only employers can create job posts"));
    }

    let input = validate(&body).map_err(ApiError::Validation)?;
    let post = JobPost::create(&store, &input, account.id)?;

    info!(post_id = post.id, author_id = account.id, "job post created");
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "post": post,
        "message": "Job post created successfully."
    })))
}

/// Listing view: every post, newest first, each carrying the viewer's
/// apply state. Never fails; degraded reads surface as an empty list.
#[get("/api/v1/posts")]
pub async fn get_posts(
    auth: Option<BearerAuth>,
    store: web::Data<RecordStore>,
    directory: web::Data<AccountDirectory>,
) -> HttpResponse {
    // A stale or unreadable session renders the public listing rather
    // than an error page.
    let viewer: Option<Account> = match auth {
        Some(token) => directory.get_session(token.token()).unwrap_or_else(|e| {
            warn!(error = %e, "session lookup failed, treating viewer as signed out");
            None
        }),
        None => None,
    };

    let posts = JobPost::list(&store);
    let applied = viewer
        .as_ref()
        .map(|account| Application::applied_post_ids(&store, account.id))
        .unwrap_or_default();

    let listed: Vec<ListedPost> = posts
        .into_iter()
        .map(|post| {
            let state = apply_state(viewer.as_ref(), applied.contains(&post.id));
            ListedPost {
                post,
                apply_state: state,
            }
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "success": true,
        "posts": listed
    }))
}
