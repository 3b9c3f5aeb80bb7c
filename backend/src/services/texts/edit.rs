use actix_web::{web, HttpResponse};
use common::model::document::TextDocument;
use common::requests::RedirectResponse;
use log::info;

use crate::error::ApiError;
use crate::text_store::state::TextsState;

pub async fn process(
    payload: web::Json<TextDocument>,
    state: web::Data<TextsState>,
) -> Result<HttpResponse, ApiError> {
    let document = payload.into_inner();
    let requested = document.text_id().ok_or(ApiError::MissingTextId)?;
    let id = i32::try_from(requested).map_err(|_| ApiError::UnknownText(requested))?;

    let text = state
        .replace(id, document)
        .await
        .ok_or(ApiError::UnknownText(requested))?;
    info!("Updated text {} \"{}\"", text.id, text.title);

    Ok(HttpResponse::Ok().json(RedirectResponse {
        redirect: text.path(),
    }))
}
