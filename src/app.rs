use axum::{
    Form, Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use handlebars::Handlebars;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::calendar::{MAX_YEAR, MIN_YEAR};
use crate::error::TrackerError;
use crate::goals::GoalSet;
use crate::workbook::{XLSX_MIME_TYPE, generate_to_buffer, output_filename};

lazy_static! {
    static ref TEMPLATES: Handlebars<'static> = {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("index", include_str!("./static/index.html"))
            .unwrap();
        registry
    };
}

/// Settings for the web server, filled in by the `website` binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub goals: GoalSet,
}

/// Shared, read-only server state. Every request builds its own workbook.
pub struct AppState {
    goals: GoalSet,
}

impl AppState {
    pub fn new(goals: GoalSet) -> Self {
        AppState { goals }
    }
}

#[derive(Deserialize)]
struct GenerateForm {
    year: i32,
}

#[derive(Serialize)]
struct ErrorResponse {
    status: String,
    message: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_form))
        .route("/generate", post(generate_tracker))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = Arc::new(AppState::new(config.goals));
    let app = router(app_state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address).await?;
    log::info!("Listening on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_form() -> Response {
    let context = serde_json::json!({
        "year": chrono::Local::now().year(),
        "min_year": MIN_YEAR,
        "max_year": MAX_YEAR,
    });

    match TEMPLATES.render("index", &context) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to render form: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn generate_tracker(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let year = form.year;
    let goals = state.goals.clone();
    log::info!("Generating tracker for {}", year);

    let result = tokio::task::spawn_blocking(move || generate_to_buffer(year, &goals)).await;

    match result {
        Ok(Ok(buffer)) => {
            let disposition = format!("attachment; filename=\"{}\"", output_filename(year));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                buffer,
            )
                .into_response()
        }
        Ok(Err(e @ TrackerError::InvalidYear(_))) => {
            log::warn!("Rejected tracker request: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Ok(Err(e)) => {
            log::error!("Tracker generation for {} failed: {}", year, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            log::error!("Tracker generation task for {} panicked: {}", year, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: Some(message),
        }),
    )
        .into_response()
}
