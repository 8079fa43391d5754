use crate::{
    array::ImageArray,
    assessor::Assessor,
    evaluator::{DEFAULT_DELAY, Evaluator},
    label::MixingLabel,
    page::{INDEX_HTML, STYLE_CSS},
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{sync::Arc, time::Duration};

/// Largest accepted upload unless configured otherwise.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Settings of the HTTP front end.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Simulated processing time of the placeholder evaluator.
    pub delay: Duration,
    /// Request bodies above this size are rejected with `413`.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Payload of a successful `POST /assess`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssessReply {
    pub id: u64,
    pub result: String,
    pub duration: Duration,
}

/// Payload of `GET /options`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionsReply {
    pub options: Vec<String>,
}

/// Builds the application router around an assessor.
pub fn router<E>(assessor: Arc<Assessor<E>>, max_upload_bytes: usize) -> Router
where
    E: Evaluator + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_index))
        .route("/static/style.css", get(get_stylesheet))
        .route("/health", get(|| async { "ok" }))
        .route("/options", get(get_options))
        .route("/assess", post(post_assess::<E>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(assessor)
}

async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

async fn get_options() -> Json<OptionsReply> {
    Json(OptionsReply {
        options: MixingLabel::OPTIONS
            .iter()
            .map(|label| label.as_str().to_string())
            .collect(),
    })
}

async fn post_assess<E>(
    State(assessor): State<Arc<Assessor<E>>>,
    body: Bytes,
) -> impl IntoResponse
where
    E: Evaluator + Send + Sync + 'static,
{
    log::debug!("Received assessment request with {} bytes", body.len());

    // decoding and evaluation both block
    let outcome = tokio::task::spawn_blocking(move || {
        let image = ImageArray::decode(&body).map_err(|e| {
            log::warn!("Rejected upload: {e}");
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

        assessor.assess(image.as_ref()).map_err(|e| {
            log::error!("Evaluator failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
    })
    .await;

    let response = match outcome {
        Ok(Ok(response)) => response,
        Ok(Err((status, message))) => {
            return (status, Json(json!({ "status": "error", "message": message })));
        }
        Err(e) => {
            log::error!("Assessment task aborted: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": e.to_string() })),
            );
        }
    };

    log::info!(
        "Assessment {} answered \"{}\" in {:?}",
        response.id,
        response.assessment,
        response.duration
    );

    let reply = AssessReply {
        id: response.id,
        result: response.assessment.as_str().to_string(),
        duration: response.duration,
    };

    (
        StatusCode::OK,
        Json(json!({ "status": "success", "response": reply })),
    )
}
