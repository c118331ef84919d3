pub mod accounts;
pub mod applications;
pub mod misc;
pub mod policies;
pub mod posts;

use actix_web::web;
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::accounts::Account;
use crate::directory::AccountDirectory;
use crate::errors::ApiError;

/// Registers every route; shared between the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(misc::index)
        .service(misc::health_check)
        .service(misc::get_server_time)
        .service(accounts::register_account)
        .service(accounts::login_account)
        .service(accounts::logout_account)
        .service(accounts::get_user)
        .service(accounts::reset_password)
        .service(posts::create_post)
        .service(posts::get_posts)
        .service(applications::create_application)
        .service(applications::get_submitted_applications)
        .service(policies::get_policies);
}

/// Resolves the bearer token to an account, or reports why it could not.
pub(crate) fn resolve_account(
    auth: Option<&BearerAuth>,
    directory: &AccountDirectory,
) -> Result<Account, ApiError> {
    let token = auth
        .ok_or(ApiError::Unauthorized("Missing authorization header"))?
        .token();
    directory
        .get_session(token)?
        .ok_or(ApiError::Unauthorized("Invalid authorization token"))
}
