use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::controller::AppState;
use crate::helpers::form_fields::FormFields;
use crate::models::feedback::{Feedback, FeedbackForm};
use crate::repositories::submission_repo::SubmissionRepo;

pub const FEEDBACK_THANKS: &str =
    "Thank you for your valuable feedback! We truly appreciate your time.";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(add_feedback))
        .route("/list", get(get_all_feedback))
        .route_layer(Extension(app_state.submission_repo))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeedbackReceipt {
    pub message: String,
    pub feedback: Feedback,
}

pub async fn add_feedback(
    Extension(submission_repo): Extension<Arc<SubmissionRepo>>,
    fields: FormFields,
) -> impl IntoResponse {
    let feedback = submission_repo
        .record_feedback(FeedbackForm::from(fields))
        .await;
    info!(
        "Received feedback {} with rating {}",
        feedback.id,
        feedback.rating.as_deref().unwrap_or("none"),
    );

    (
        StatusCode::OK,
        Json(FeedbackReceipt {
            message: FEEDBACK_THANKS.to_string(),
            feedback,
        }),
    )
}

pub async fn get_all_feedback(
    Extension(submission_repo): Extension<Arc<SubmissionRepo>>,
) -> impl IntoResponse {
    let feedbacks = submission_repo
        .feedbacks()
        .await;

    (StatusCode::OK, Json(feedbacks))
}
