use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tracing::info;
use crate::controller::AppState;
use crate::helpers::form_fields::FormFields;
use crate::models::reservation::ReservationForm;
use crate::repositories::submission_repo::SubmissionRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(add_reservation))
        .route("/list", get(get_all_reservations))
        .route_layer(Extension(app_state.submission_repo))
}

pub async fn add_reservation(
    Extension(submission_repo): Extension<Arc<SubmissionRepo>>,
    fields: FormFields,
) -> impl IntoResponse {
    let reservation = submission_repo
        .record_reservation(ReservationForm::from(fields))
        .await;
    info!(
        "Booked reservation {} for {} guests on {} at {}",
        reservation.id,
        reservation.guests.as_deref().unwrap_or("?"),
        reservation.date.as_deref().unwrap_or("?"),
        reservation.time.as_deref().unwrap_or("?"),
    );

    (StatusCode::OK, Json(reservation))
}

pub async fn get_all_reservations(
    Extension(submission_repo): Extension<Arc<SubmissionRepo>>,
) -> impl IntoResponse {
    let reservations = submission_repo
        .reservations()
        .await;

    (StatusCode::OK, Json(reservations))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;
    use crate::models::reservation::Reservation;
    use super::*;

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn posted_reservation_is_echoed_back() {
        let app_state = AppState::new(Arc::new(SubmissionRepo::new()));

        let response = router(app_state)
            .oneshot(post_form(
                "name=Asha&email=a%40x.com&phone=555&date=2025-05-01&time=19%3A00&guests=2",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let reservation: Reservation = serde_json::from_slice(&body).unwrap();
        assert_eq!(reservation.id, 1);
        assert_eq!(reservation.email.as_deref(), Some("a@x.com"));
        assert_eq!(reservation.time.as_deref(), Some("19:00"));
        assert_eq!(reservation.special_requests, None);
    }

    #[tokio::test]
    async fn empty_form_is_accepted_and_listed() {
        let submission_repo = Arc::new(SubmissionRepo::new());
        let app = router(AppState::new(submission_repo.clone()));

        let response = app.clone().oneshot(post_form("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/list").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let listed: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], 1);
        assert!(listed[0].get("name").is_none());
        assert!(listed[0]["booked_at"].is_string());
        assert_eq!(submission_repo.reservations().await.len(), 1);
    }

    #[tokio::test]
    async fn unusual_posts_are_still_stored() {
        let submission_repo = Arc::new(SubmissionRepo::new());
        let app = router(AppState::new(submission_repo.clone()));

        let requests = [
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("name=Asha"))
                .unwrap(),
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=X")
                .body(Body::from("--X--\r\n"))
                .unwrap(),
            post_form("name=Asha&name=Raj&guests=2"),
        ];
        for request in requests {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let stored = submission_repo.reservations().await;
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].name, None);
        assert_eq!(stored[1].name, None);
        assert_eq!(stored[2].id, 3);
        assert_eq!(stored[2].name.as_deref(), Some("Asha"));
        assert_eq!(stored[2].guests.as_deref(), Some("2"));
    }
}
