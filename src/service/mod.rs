use std::sync::Arc;

use crate::models::NoteId;
use crate::repository::{KeyValueStore, StoreError};

const NOTE_KEY_PREFIX: &str = "note:";

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn KeyValueStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(id: &NoteId) -> String {
        format!("{NOTE_KEY_PREFIX}{id}")
    }

    pub async fn load_note(&self, id: &NoteId) -> Result<Option<String>, StoreError> {
        self.store.get(&Self::key(id)).await
    }

    /// Saving empty text deletes the entry, so the store never holds a note
    /// that renders the same as an absent one.
    pub async fn save_note(&self, id: &NoteId, text: &str) -> Result<(), StoreError> {
        let key = Self::key(id);

        if text.is_empty() {
            self.store.delete(&key).await
        } else {
            self.store.put(&key, text).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn service_with_store() -> (NoteService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (NoteService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn saved_text_is_loaded_back_unchanged() {
        let (service, _) = service_with_store();
        let id = NoteId::parse("pad1").unwrap();

        service.save_note(&id, "hello\nworld").await.unwrap();

        assert_eq!(
            service.load_note(&id).await.unwrap(),
            Some("hello\nworld".to_string())
        );
    }

    #[tokio::test]
    async fn loading_an_unknown_note_returns_none() {
        let (service, _) = service_with_store();
        let id = NoteId::parse("nothing-here").unwrap();

        assert_eq!(service.load_note(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn saving_empty_text_deletes_the_note() {
        let (service, _) = service_with_store();
        let id = NoteId::parse("pad1").unwrap();

        service.save_note(&id, "something").await.unwrap();
        service.save_note(&id, "").await.unwrap();

        assert_eq!(service.load_note(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn notes_are_stored_under_a_prefixed_key() {
        let (service, store) = service_with_store();
        let id = NoteId::parse("pad1").unwrap();

        service.save_note(&id, "hello").await.unwrap();

        assert_eq!(
            store.get("note:pad1").await.unwrap(),
            Some("hello".to_string())
        );
    }
}
