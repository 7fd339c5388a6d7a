use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use crate::models::gallery::GalleryCategory;
use crate::models::menu_item::DietaryTag;
use crate::repositories::catalog_repo;

pub fn router() -> Router {
    Router::new()
        .route("/menu", get(retrieve_menu))
        .route("/menu/specials", get(retrieve_specials))
        .route("/cuisine", get(retrieve_cuisines))
        .route("/gallery", get(retrieve_gallery))
        .route("/contact", get(retrieve_contact_info))
}

#[derive(Deserialize, Clone, Debug)]
pub struct MenuQuery {
    pub dietary: Option<DietaryTag>,
}

pub async fn retrieve_menu(
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    match query.dietary {
        Some(tag) => {
            (StatusCode::OK, Json(catalog_repo::menu_with_dietary(tag))).into_response()
        }
        None => {
            (StatusCode::OK, Json(catalog_repo::get_menu())).into_response()
        }
    }
}

pub async fn retrieve_specials() -> impl IntoResponse {
    (StatusCode::OK, Json(catalog_repo::menu_specials()))
}

pub async fn retrieve_cuisines() -> impl IntoResponse {
    (StatusCode::OK, Json(catalog_repo::get_cuisines()))
}

#[derive(Deserialize, Clone, Debug)]
pub struct GalleryQuery {
    pub category: Option<GalleryCategory>,
}

pub async fn retrieve_gallery(
    Query(query): Query<GalleryQuery>,
) -> impl IntoResponse {
    match query.category {
        Some(category) => {
            (StatusCode::OK, Json(catalog_repo::gallery_in_category(category))).into_response()
        }
        None => {
            (StatusCode::OK, Json(catalog_repo::get_gallery_images())).into_response()
        }
    }
}

pub async fn retrieve_contact_info() -> impl IntoResponse {
    (StatusCode::OK, Json(catalog_repo::get_contact_info()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;
    use super::*;

    async fn fetch(uri: &str) -> (StatusCode, hyper::body::Bytes) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = fetch(uri).await;

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn menu_lists_every_section() {
        let (status, menu) = get_json("/menu").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(menu["starters"].as_array().unwrap().len(), 4);
        assert_eq!(menu["mains"].as_array().unwrap().len(), 5);
        assert_eq!(menu["desserts"].as_array().unwrap().len(), 3);
        assert_eq!(menu["beverages"].as_array().unwrap().len(), 4);
        assert_eq!(menu["starters"][1]["dietary"], serde_json::json!(["veg", "spicy"]));
        assert_eq!(menu["mains"][0]["special"], Value::Bool(true));
    }

    #[tokio::test]
    async fn menu_filters_by_dietary_tag() {
        let (status, items) = get_json("/menu?dietary=spicy").await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = items
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Paneer Tikka", "Chicken Wings"]);
    }

    #[tokio::test]
    async fn unknown_dietary_tag_is_rejected() {
        let (status, _) = fetch("/menu?dietary=keto").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn specials_route_returns_flagged_items() {
        let (_, items) = get_json("/menu/specials").await;

        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item["special"] == Value::Bool(true)));
    }

    #[tokio::test]
    async fn gallery_filters_by_category() {
        let (_, all) = get_json("/gallery").await;
        let (_, events) = get_json("/gallery?category=events").await;

        assert_eq!(all.as_array().unwrap().len(), 10);
        assert_eq!(events.as_array().unwrap().len(), 2);
        assert_eq!(events[0]["alt"], "Live music night");
    }

    #[tokio::test]
    async fn contact_and_cuisine_are_served() {
        let (_, contact) = get_json("/contact").await;
        let (_, cuisines) = get_json("/cuisine").await;

        assert_eq!(contact["email"], "info@chillpillcafe.com");
        assert_eq!(contact["social"]["instagram"], "https://instagram.com/chillpillcafe");
        assert_eq!(cuisines[0]["name"], "Indian");
        assert_eq!(cuisines[0]["specialties"].as_array().unwrap().len(), 4);
    }
}
