use actix_web::{get, HttpResponse};
use serde::Serialize;
use serde_json::json;

/// Canned policy data for the policy-browsing page. No backend reads.
#[derive(Debug, Clone, Serialize)]
pub struct Policy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub phone_number: &'static str,
}

const POLICIES: [Policy; 5] = [
    Policy {
        id: "1",
        name: "Senior Developer Policy",
        description: "Comprehensive policy for senior development positions including benefits, remote work options, and professional development.",
        phone_number: "+254 700 000 001",
    },
    Policy {
        id: "2",
        name: "Marketing Manager Policy",
        description: "Policy covering marketing management roles with flexible hours, team collaboration benefits, and career growth opportunities.",
        phone_number: "+254 700 000 002",
    },
    Policy {
        id: "3",
        name: "Product Designer Policy",
        description: "Design-focused policy with creative freedom, collaborative environment, and access to latest design tools and resources.",
        phone_number: "+254 700 000 003",
    },
    Policy {
        id: "4",
        name: "Data Analyst Policy",
        description: "Policy for data analytics roles featuring advanced tools access, continuous learning programs, and competitive compensation.",
        phone_number: "+254 700 000 004",
    },
    Policy {
        id: "5",
        name: "HR Specialist Policy",
        description: "Human resources policy with focus on employee wellness, training programs, and organizational development initiatives.",
        phone_number: "+254 700 000 005",
    },
];

#[get("/api/v1/policies")]
pub async fn get_policies() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "policies": POLICIES
    }))
}
