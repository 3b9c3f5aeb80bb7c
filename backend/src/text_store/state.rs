//! In-memory storage of saved texts.
//!
//! `TextsState` is cloned into every worker as `web::Data`. Texts live as long as the process;
//! ids start at 1 and are never reused.

use std::collections::HashMap;
use std::sync::Arc;

use common::model::document::TextDocument;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredText {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub document: TextDocument,
}

impl StoredText {
    /// Path the browser is sent to after saving.
    pub fn path(&self) -> String {
        format!("/t/{}/{}", self.id, self.slug)
    }
}

#[derive(Clone, Default)]
pub struct TextsState {
    pub texts: Arc<RwLock<HashMap<i32, StoredText>>>,
}

impl TextsState {
    /// Stores `document` under a fresh id.
    pub async fn insert(&self, document: TextDocument) -> StoredText {
        let mut texts = self.texts.write().await;
        let id = texts.keys().max().map_or(1, |max| max + 1);
        let text = stored(id, document);
        texts.insert(id, text.clone());
        text
    }

    /// Replaces the text stored under `id`. Returns `None` when there is none.
    pub async fn replace(&self, id: i32, document: TextDocument) -> Option<StoredText> {
        let mut texts = self.texts.write().await;
        let slot = texts.get_mut(&id)?;
        *slot = stored(id, document);
        Some(slot.clone())
    }

    pub async fn get(&self, id: i32) -> Option<StoredText> {
        self.texts.read().await.get(&id).cloned()
    }
}

fn stored(id: i32, document: TextDocument) -> StoredText {
    let title = document.title().to_string();
    StoredText {
        id,
        slug: slugify(&title),
        title,
        document,
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes a single `-`.
/// A title without any usable character gets the slug `text`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("text");
    }
    slug
}
