//! # HTTP Server for Card Generation
//!
//! A thin web front over [`CardGenerator`]: a form page, generation, result
//! lookup, password suggestions and downloads of saved sheets.
//!
//! ## Usage
//!
//! ```bash
//! cardpress serve --listen 0.0.0.0:5000
//! ```
//!
//! Then open http://localhost:5000 in a browser.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Card form |
//! | POST | `/generate` | Generate a sheet from form fields |
//! | GET | `/generate_password?strong=` | Suggested password (plain text) |
//! | GET | `/result` | Last sheet, 404 if none |
//! | GET | `/last` | Last sheet's file name and time |
//! | GET | `/static/*path` | Download a saved sheet |

mod handlers;
mod state;
mod static_files;

pub use handlers::cards::{CardResponse, GenerateForm, LastResponse};
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::CardError;
use crate::generator::CardGenerator;
use crate::password::PasswordSource;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        .route("/generate", post(handlers::cards::generate))
        .route("/generate_password", get(handlers::password::generate))
        .route("/result", get(handlers::cards::result))
        .route("/last", get(handlers::cards::last))
        .route("/static/*path", get(static_files::download_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use cardpress::generator::CardGenerator;
/// use cardpress::password::HttpPasswordSource;
/// use cardpress::server::{serve, ServerConfig};
///
/// # async fn example(generator: CardGenerator) -> Result<(), cardpress::CardError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:5000".to_string(),
/// };
/// let passwords = Arc::new(HttpPasswordSource::new("http://www.dinopass.com/password")?);
///
/// serve(config, Arc::new(generator), passwords).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(
    config: ServerConfig,
    generator: Arc<CardGenerator>,
    passwords: Arc<dyn PasswordSource>,
) -> Result<(), CardError> {
    let app_state = Arc::new(AppState::new(generator, passwords));
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            CardError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!("Card generator listening on http://{}/", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CardError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
