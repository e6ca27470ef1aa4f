//! Card generation and result handlers.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::card::CardKind;
use crate::error::GENERIC_FAILURE;
use crate::sink::GeneratedArtifact;

use super::super::state::AppState;

/// Form fields posted by the card form. Only the pair matching `mode` is read.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub num_cards: String,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Body returned by card endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CardResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CardResponse {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            filename: None,
            image_url: None,
            timestamp: None,
        }
    }

    fn for_artifact(message: impl Into<String>, artifact: &GeneratedArtifact) -> Self {
        Self {
            message: message.into(),
            filename: Some(artifact.filename.clone()),
            image_url: Some(format!("/static/{}", artifact.filename)),
            timestamp: Some(display_timestamp(artifact)),
        }
    }
}

/// Body returned by `GET /last`; both fields are null before the first sheet.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LastResponse {
    pub filename: Option<String>,
    pub timestamp: Option<String>,
}

fn display_timestamp(artifact: &GeneratedArtifact) -> String {
    artifact.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Handle POST /generate - validate the form, render and save the sheet.
pub async fn generate(State(state): State<Arc<AppState>>, Form(form): Form<GenerateForm>) -> Response {
    let kind = CardKind::from_mode(&form.mode);
    let (primary, secondary) = match kind {
        CardKind::WiFi => (form.ssid, form.password),
        CardKind::Contact => (form.name, form.phone_number),
    };
    let count = form.num_cards;

    // Rendering is CPU-bound; keep it off the async workers
    let generator = state.generator.clone();
    let result = tokio::task::spawn_blocking(move || {
        generator.generate_from_form(kind, &count, &primary, &secondary)
    })
    .await;

    match result {
        Ok(Ok(artifact)) => {
            let message = format!("{} {} cards generated successfully.", artifact.count, kind.label());
            (StatusCode::OK, Json(CardResponse::for_artifact(message, &artifact))).into_response()
        }
        Ok(Err(e)) if e.is_validation() => {
            (StatusCode::BAD_REQUEST, Json(CardResponse::message(e.user_message()))).into_response()
        }
        Ok(Err(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CardResponse::message(e.user_message())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Unexpected error during card generation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CardResponse::message(GENERIC_FAILURE)),
            )
                .into_response()
        }
    }
}

/// Handle GET /result - the most recent sheet, or 404 before the first one.
pub async fn result(State(state): State<Arc<AppState>>) -> Response {
    match state.generator.last_generated() {
        Some(artifact) => Json(CardResponse::for_artifact("Last generated cards.", &artifact)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(CardResponse::message("No cards have been generated yet.")),
        )
            .into_response(),
    }
}

/// Handle GET /last - file name and time of the most recent sheet.
pub async fn last(State(state): State<Arc<AppState>>) -> Json<LastResponse> {
    let last = state.generator.last_generated();
    Json(LastResponse {
        filename: last.as_ref().map(|a| a.filename.clone()),
        timestamp: last.as_ref().map(display_timestamp),
    })
}
