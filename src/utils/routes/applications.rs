use actix_web::{get, post, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::applications::Application;
use crate::directory::AccountDirectory;
use crate::errors::{ApiError, EligibilityError};
use crate::posts::JobPost;
use crate::store::RecordStore;
use crate::workflow;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub post_id: i64,
}

#[post("/api/v1/apply")]
pub async fn create_application(
    auth: Option<BearerAuth>,
    body: web::Json<ApplyRequest>,
    store: web::Data<RecordStore>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let token = auth.ok_or(ApiError::NotEligible(EligibilityError::NotSignedIn))?;
    let account = directory
        .get_session(token.token())?
        .ok_or(ApiError::NotEligible(EligibilityError::NotSignedIn))?;

    let post = JobPost::get(&store, body.post_id)?.ok_or(ApiError::NotFound("Post not found"))?;

    let application = workflow::apply(&store, &account, &post)?;

    info!(
        post_id = post.id,
        account_id = account.id,
        "application submitted"
    );
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "applied": true,
        "application": application,
        "message": "Application submitted successfully"
    })))
}

#[get("/api/v1/applications/submitted")]
pub async fn get_submitted_applications(
    auth: Option<BearerAuth>,
    store: web::Data<RecordStore>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let account = super::resolve_account(auth.as_ref(), &directory)?;
    let applications = Application::list_for_account(&store, account.id)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "applications": applications
    })))
}
