//! Password suggestion handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::password::PasswordStrength;

use super::super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PasswordQuery {
    #[serde(default)]
    pub strong: String,
}

/// Handle GET /generate_password - plaintext password from the service.
pub async fn generate(State(state): State<Arc<AppState>>, Query(query): Query<PasswordQuery>) -> Response {
    let strength = PasswordStrength::from_flag(query.strong.eq_ignore_ascii_case("true"));

    match state.passwords.generate(strength).await {
        Ok(password) => password.into_response(),
        Err(e) => {
            tracing::error!("Password generation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating password.").into_response()
        }
    }
}
