//! Shared setup for the note store tests

use chrono::Utc;
use uuid::Uuid;

use crate::areas::Area;
use crate::notes::Note;
use crate::notes::SyncStatus;
use crate::store::NoteStore;

pub const PASSPHRASE: &str = "secret123";

/// The test area all stores belong to
pub fn test_area() -> Area {
    Area {
        id: 7,
        name: String::from("Gestión de Equipo"),
    }
}

/// A plaintext note in its seeded state
pub fn plaintext_note(title: &str, content: &str) -> Note {
    Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        is_encrypted: false,
        last_modified: Utc::now(),
        category: String::from("Equipo"),
        tags: vec![String::from("seguimiento")],
        sync_status: SyncStatus::Synced,
    }
}

/// A store holding one plaintext note `{title: "A", content: "hello"}`
pub fn setup_store() -> (NoteStore, Uuid) {
    let note = plaintext_note("A", "hello");
    let id = note.id;

    (NoteStore::new(test_area(), vec![note]), id)
}

/// A store holding one plaintext and one encrypted note
///
/// Returns the store, the plaintext note's ID and the encrypted note's ID;
/// the encrypted note is sealed with [`PASSPHRASE`].
pub async fn setup_mixed_store() -> (NoteStore, Uuid, Uuid) {
    let plain = plaintext_note("Feedback del equipo", "Notas de las reuniones 1:1");
    let secret = plaintext_note("Estrategia confidencial Q1", "Objetivos Q1");

    let plain_id = plain.id;
    let secret_id = secret.id;

    let store = NoteStore::new(test_area(), vec![plain, secret]);
    store
        .encrypt(&secret_id, "Objetivos Q1", PASSPHRASE)
        .await
        .unwrap();

    (store, plain_id, secret_id)
}
