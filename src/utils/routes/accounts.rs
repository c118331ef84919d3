use actix_web::{get, post, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::accounts::Account;
use crate::directory::AccountDirectory;
use crate::enums::AccountType;
use crate::errors::ApiError;
use crate::store::RecordStore;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub account_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[post("/api/v1/register")]
pub async fn register_account(
    body: web::Json<RegisterRequest>,
    store: web::Data<RecordStore>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let email = req.email.trim();
    if email.is_empty() {
        return Err(ApiError::Validation("Email is required.".to_string()));
    }
    if req.password != req.confirm_password {
        return Err(ApiError::Validation("Passwords don't match".to_string()));
    }
    let account_type = match req.account_type.as_deref() {
        None | Some("") => AccountType::Customer,
        Some(raw) => AccountType::parse(raw)
            .ok_or_else(|| ApiError::Validation("Invalid account type".to_string()))?,
    };

    // Two-step sign-up: the directory owns the credential, the profile
    // row carries the role and display fields.
    let directory_id = directory.sign_up(email, &req.password)?;
    let account = Account::create(&store, &directory_id, account_type, req.name.trim(), email)?;

    info!(
        account_id = account.id,
        account_type = account_type.as_str(),
        "account registered"
    );
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "account": account
    })))
}

#[post("/api/v1/auth")]
pub async fn login_account(
    body: web::Json<LoginRequest>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    match directory.sign_in(body.email.trim(), &body.password)? {
        Some((token, account)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "token": token,
            "account": account
        }))),
        None => Ok(HttpResponse::Ok().json(json!({
            "success": false,
            "error": "Invalid email or password"
        }))),
    }
}

#[post("/api/v1/logout")]
pub async fn logout_account(
    auth: Option<BearerAuth>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let token = auth.ok_or(ApiError::Unauthorized("Missing authorization header"))?;
    directory.sign_out(token.token());
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Signed out successfully"
    })))
}

#[get("/api/v1/user")]
pub async fn get_user(
    auth: Option<BearerAuth>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    let account = super::resolve_account(auth.as_ref(), &directory)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "account": account
    })))
}

#[post("/api/v1/reset_password")]
pub async fn reset_password(
    body: web::Json<ResetPasswordRequest>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse, ApiError> {
    directory.reset_password(body.email.trim())?;
    // Same answer for known and unknown emails.
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Password reset email sent! Check your inbox."
    })))
}
