use actix_web::{get, HttpResponse};
use chrono::Utc;
use serde_json::json;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "service": "jobboard-backend",
        "status": "ok"
    }))
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp()
    }))
}

#[get("/get_server_time")]
pub async fn get_server_time() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "timestamp": Utc::now().timestamp()
    }))
}
