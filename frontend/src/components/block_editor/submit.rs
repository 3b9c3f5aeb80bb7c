//! Form submission adapter: turns an intercepted form submit into a JSON request and reads
//! the redirect target from the answer.

use gloo_net::http::Request;

use common::model::dialog::FormMethod;
use common::model::document::TextDocument;
use common::model::sequence::BlockSequence;
use common::requests::RedirectResponse;

use crate::error::{EditorError, SubmitError};

/// A validated submission, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub method: FormMethod,
    pub action: String,
    pub document: TextDocument,
}

/// Builds the request from the form's `method`/`action` attributes, its top-level fields and
/// the editor blocks.
///
/// A form without a `method` attribute posts. `GET` forms are rejected since the document
/// travels as a JSON body.
pub fn prepare(
    method: Option<String>,
    action: Option<String>,
    fields: Vec<(String, String)>,
    blocks: BlockSequence,
) -> Result<SubmitRequest, EditorError> {
    let method = match method.filter(|m| !m.trim().is_empty()) {
        Some(method) => method.parse()?,
        None => FormMethod::Post,
    };
    if method == FormMethod::Get {
        return Err(EditorError::BodylessMethod(method));
    }
    let action = action
        .filter(|a| !a.trim().is_empty())
        .ok_or(EditorError::MissingAction)?;

    Ok(SubmitRequest {
        method,
        action,
        document: TextDocument::from_form(fields, blocks)?,
    })
}

/// Sends the document and returns the URL the server redirects to.
pub async fn send(request: SubmitRequest) -> Result<String, SubmitError> {
    let builder = match request.method {
        FormMethod::Put => Request::put(&request.action),
        FormMethod::Post | FormMethod::Get => Request::post(&request.action),
    };

    let response = builder
        .json(&request.document)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SubmitError::Status { status, body });
    }

    let reply: RedirectResponse = response
        .json()
        .await
        .map_err(|e| SubmitError::Response(e.to_string()))?;
    Ok(reply.redirect)
}
