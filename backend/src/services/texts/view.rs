use actix_web::{web, HttpResponse};
use common::model::render::escape_html;

use crate::error::ApiError;
use crate::text_store::state::TextsState;

/// Renders a stored text. The slug segment is informational and not checked.
pub async fn process(
    path: web::Path<(i32, String)>,
    state: web::Data<TextsState>,
) -> Result<HttpResponse, ApiError> {
    let (id, _slug) = path.into_inner();
    let text = state
        .get(id)
        .await
        .ok_or(ApiError::UnknownText(i64::from(id)))?;

    let title = escape_html(&text.title);
    let page = format!(
        "<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<article>\n<h1>{title}</h1>\n{}\n</article>\n\
         </body>\n</html>\n",
        text.document.blocks.render_html()
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}
