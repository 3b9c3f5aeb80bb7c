use actix_web::{web, HttpResponse, Responder};
use common::model::document::TextDocument;
use common::requests::RedirectResponse;
use log::info;

use crate::text_store::state::TextsState;

pub async fn process(
    payload: web::Json<TextDocument>,
    state: web::Data<TextsState>,
) -> impl Responder {
    let text = state.insert(payload.into_inner()).await;
    info!("Saved text {} \"{}\"", text.id, text.title);

    HttpResponse::Ok().json(RedirectResponse {
        redirect: text.path(),
    })
}
