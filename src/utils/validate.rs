use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::enums::{EmploymentType, LocationType};
use crate::posts::NewJobPost;

/// Raw job-post form as submitted. Select fields arrive as strings so an
/// unselected or unknown value fails its own rule instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub phone_number: String,
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"^[+]?[(]?[\d\s\-().]{7,20}$")
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Checks the form rules in a fixed order; the first failing rule wins.
/// On success the returned post carries the trimmed values and the typed
/// enumerations.
pub fn validate(form: &JobPostForm) -> Result<NewJobPost, String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Job Title is required.".to_string());
    }
    if title.chars().count() < 3 {
        return Err("Job Title must be at least 3 characters long.".to_string());
    }
    if title.chars().count() > 100 {
        return Err("Job Title must be less than 100 characters.".to_string());
    }

    let description = form.description.trim();
    if description.is_empty() {
        return Err("Job Description is required.".to_string());
    }
    if description.chars().count() < 10 {
        return Err("Job Description must be at least 10 characters long.".to_string());
    }

    let location = form.location.trim();
    if location.is_empty() {
        return Err("Location is required.".to_string());
    }
    if location.chars().count() < 2 {
        return Err("Location must be at least 2 characters long.".to_string());
    }

    let location_type = LocationType::parse(form.location_type.trim())
        .ok_or_else(|| "Please select a Location Type.".to_string())?;
    let employment_type = EmploymentType::parse(form.employment_type.trim())
        .ok_or_else(|| "Please select an Employment Type.".to_string())?;

    let phone_number = form.phone_number.trim();
    if phone_number.is_empty() {
        return Err("Phone Number is required.".to_string());
    }
    if !phone_regex().is_match(phone_number) {
        return Err(
            "Please enter a valid Phone Number (7-20 characters, digits, spaces, +, -, (, ) allowed)."
                .to_string(),
        );
    }

    Ok(NewJobPost {
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        location_type,
        employment_type,
        phone_number: phone_number.to_string(),
    })
}
