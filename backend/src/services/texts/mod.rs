//! # Text Service Module
//!
//! Endpoints the control panel's block editor submits to, plus the public page of a saved
//! text.
//!
//! ## Registered Routes
//!
//! *   **`POST /api/text/save`** (`save::process`): stores a new text and answers
//!     `{"redirect": "/t/{id}/{slug}"}`.
//! *   **`PUT /api/text/edit`** (`edit::process`): replaces the text named by `text-id`.
//!     `400` when the id is missing, `404` when no such text exists.
//! *   **`GET /t/{id}/{slug}`** (`view::process`): renders the stored blocks as HTML.

mod edit;
mod save;
mod view;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

/// The base path for the text API.
const API_PATH: &str = "/api/text";

/// The base path for rendered texts.
const PAGE_PATH: &str = "/t";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/edit", put().to(edit::process))
}

pub fn configure_pages() -> Scope {
    scope(PAGE_PATH).route("/{text_id}/{slug}", get().to(view::process))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::requests::{ErrorResponse, RedirectResponse};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::text_store::state::TextsState;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .service(configure_routes())
                    .service(configure_pages()),
            )
            .await
        };
    }

    fn payload(text_id: Option<i64>, title: &str) -> serde_json::Value {
        let mut body = json!({
            "title": title,
            "blocks": [
                {"type": "Heading", "heading": "Intro"},
                {"type": "Paragraph", "body_text": "Some **bold** text"}
            ]
        });
        if let Some(id) = text_id {
            body["text-id"] = json!(id);
        }
        body
    }

    #[actix_web::test]
    async fn save_stores_and_redirects() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/text/save")
            .set_json(payload(None, "Hello World"))
            .to_request();
        let reply: RedirectResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply.redirect, "/t/1/hello-world");
        assert_eq!(state.get(1).await.unwrap().document.blocks.len(), 2);
    }

    #[actix_web::test]
    async fn edit_replaces_an_existing_text() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/text/save")
            .set_json(payload(None, "Draft"))
            .to_request();
        let _: RedirectResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/text/edit")
            .set_json(payload(Some(1), "Final"))
            .to_request();
        let reply: RedirectResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply.redirect, "/t/1/final");
        assert_eq!(state.get(1).await.unwrap().title, "Final");
    }

    #[actix_web::test]
    async fn edit_without_id_is_a_bad_request() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/api/text/edit")
            .set_json(payload(None, "Lost"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "field `text-id` not specified");
    }

    #[actix_web::test]
    async fn edit_of_unknown_text_is_not_found() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/api/text/edit")
            .set_json(payload(Some(42), "Ghost"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_block_types_are_rejected() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/text/save")
            .set_json(json!({"title": "x", "blocks": [{"type": "Carousel"}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.get(1).await.is_none());
    }

    #[actix_web::test]
    async fn saved_text_is_rendered() {
        let state = TextsState::default();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/text/save")
            .set_json(payload(None, "Fish & Chips"))
            .to_request();
        let reply: RedirectResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri(&reply.redirect).to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("<title>Fish &amp; Chips</title>"));
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(html.contains("<strong>bold</strong>"));

        let req = test::TestRequest::get().uri("/t/7/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
