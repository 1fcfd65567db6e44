//! Traveller-registration route handlers.
//!
//! The multi-step form submits in one request here; the steps are a UI
//! concern. Validation is field-level; the submission itself is the
//! backend stub.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopease_core::{Email, TravellerId};

use crate::backend::TravellerApplication;
use crate::error::{AppError, FieldError, Result};
use crate::state::AppState;

/// Traveller registration request body.
#[derive(Debug, Deserialize)]
pub struct TravellerForm {
    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,

    // Travel information
    pub vehicle_type: String,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_year: String,
    #[serde(default)]
    pub license_plate: String,
    pub route_from: String,
    pub route_to: String,
    #[serde(default)]
    pub available_days: Vec<String>,

    // Document references (opaque upload keys)
    #[serde(default)]
    pub driving_license: String,
    #[serde(default)]
    pub vehicle_registration: String,
    #[serde(default)]
    pub insurance: String,

    // Terms
    #[serde(default)]
    pub agree_terms: bool,
    #[serde(default)]
    pub agree_background: bool,
}

/// Acknowledgement payload.
#[derive(Debug, Serialize)]
pub struct TravellerReceiptView {
    pub application_id: TravellerId,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

fn required(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn validate(form: &TravellerForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    required(&mut errors, "first_name", &form.first_name, "First name is required");
    required(&mut errors, "last_name", &form.last_name, "Last name is required");
    if form.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if Email::parse(&form.email).is_err() {
        errors.push(FieldError::new("email", "Email is invalid"));
    }
    required(&mut errors, "phone", &form.phone, "Phone number is required");
    required(&mut errors, "address", &form.address, "Address is required");
    required(&mut errors, "city", &form.city, "City is required");
    required(&mut errors, "state", &form.state, "State is required");
    required(&mut errors, "zip", &form.zip, "ZIP code is required");
    required(&mut errors, "country", &form.country, "Country is required");

    required(&mut errors, "vehicle_type", &form.vehicle_type, "Vehicle type is required");
    required(&mut errors, "route_from", &form.route_from, "Route origin is required");
    required(&mut errors, "route_to", &form.route_to, "Route destination is required");
    if form.available_days.is_empty() {
        errors.push(FieldError::new(
            "available_days",
            "Select at least one available day",
        ));
    }

    if !form.agree_terms {
        errors.push(FieldError::new(
            "agree_terms",
            "You must agree to the terms and conditions",
        ));
    }
    if !form.agree_background {
        errors.push(FieldError::new(
            "agree_background",
            "You must consent to the background check",
        ));
    }

    errors
}

/// Submit a traveller application.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<TravellerForm>,
) -> Result<impl IntoResponse> {
    let errors = validate(&form);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = Email::parse(&form.email)
        .map_err(|e| AppError::Validation(vec![FieldError::new("email", e.to_string())]))?;

    let ticket = state
        .backend()
        .register_traveller(TravellerApplication {
            first_name: form.first_name,
            last_name: form.last_name,
            email,
            phone: form.phone,
            address: form.address,
            city: form.city,
            state: form.state,
            zip: form.zip,
            country: form.country,
            vehicle_type: form.vehicle_type,
            vehicle_make: form.vehicle_make,
            vehicle_model: form.vehicle_model,
            vehicle_year: form.vehicle_year,
            license_plate: form.license_plate,
            route_from: form.route_from,
            route_to: form.route_to,
            available_days: form.available_days,
            driving_license: form.driving_license,
            vehicle_registration: form.vehicle_registration,
            insurance: form.insurance,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TravellerReceiptView {
            application_id: ticket.application_id,
            submitted_at: ticket.submitted_at,
            message: "Application received. We'll review it within 2-3 business days.".to_owned(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> TravellerForm {
        TravellerForm {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            address: "123 Main St".to_owned(),
            city: "Anytown".to_owned(),
            state: "CA".to_owned(),
            zip: "12345".to_owned(),
            country: "United States".to_owned(),
            vehicle_type: "car".to_owned(),
            vehicle_make: "Toyota".to_owned(),
            vehicle_model: "Corolla".to_owned(),
            vehicle_year: "2020".to_owned(),
            license_plate: "7ABC123".to_owned(),
            route_from: "Anytown".to_owned(),
            route_to: "Somewhere".to_owned(),
            available_days: vec!["monday".to_owned(), "friday".to_owned()],
            driving_license: "doc-1".to_owned(),
            vehicle_registration: "doc-2".to_owned(),
            insurance: "doc-3".to_owned(),
            agree_terms: true,
            agree_background: true,
        }
    }

    #[test]
    fn test_complete_form_validates() {
        assert!(validate(&complete_form()).is_empty());
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut form = complete_form();
        form.agree_terms = false;
        form.agree_background = false;
        let errors = validate(&form);
        assert!(errors.iter().any(|e| e.field == "agree_terms"));
        assert!(errors.iter().any(|e| e.field == "agree_background"));
    }

    #[test]
    fn test_whitespace_fields_count_as_missing() {
        let mut form = complete_form();
        form.city = "   ".to_owned();
        let errors = validate(&form);
        assert!(errors.iter().any(|e| e.field == "city"));
    }

    #[test]
    fn test_at_least_one_available_day() {
        let mut form = complete_form();
        form.available_days.clear();
        let errors = validate(&form);
        assert!(errors.iter().any(|e| e.field == "available_days"));
    }
}
