//! The secure note store
//!
//! Owns one area's note collection and mediates every encryption-sensitive
//! operation. Rendering layers only ever see clones of the notes; decrypted
//! plaintext is returned transiently and never written back.

use std::sync::Arc;

use chrono::Duration;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::areas::Area;
use crate::crypto;
use crate::notes::Note;
use crate::notes::SyncStatus;
use crate::snapshot::BackupSnapshot;
use crate::snapshot::ExportData;
use crate::snapshot::ImportData;
use crate::snapshot::REDACTED_CONTENT;
use crate::storage;
use crate::storage::Storage;

/// Note store errors
#[derive(Debug, Error)]
pub enum Error {
    /// No passphrase supplied; the cipher is never invoked without one
    #[error("Passphrase must not be empty")]
    EmptyPassphrase,

    /// Wrong passphrase or corrupted ciphertext; indistinguishable by design
    #[error("Incorrect passphrase")]
    IncorrectPassphrase,

    /// Decrypt was requested for a note that holds plaintext
    #[error("Note is not encrypted")]
    NotEncrypted,

    /// No note with the given ID in this area
    #[error("Unknown note: {0}")]
    UnknownNote(Uuid),

    /// The uploaded file does not match the expected snapshot shape
    #[error("Import failed: {0}")]
    ImportParse(#[from] serde_json::Error),

    /// The backup snapshot could not be written to durable storage
    #[error("Backup failed: {0}")]
    Backup(#[from] storage::Error),
}

impl From<crypto::Error> for Error {
    fn from(error: crypto::Error) -> Self {
        match error {
            crypto::Error::EmptyPassphrase => Error::EmptyPassphrase,
            crypto::Error::IncorrectPassphrase => Error::IncorrectPassphrase,
        }
    }
}

/// Result type for all note store interactions
pub type Result<T> = core::result::Result<T, Error>;

/// The four dashboard counters of an area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub encrypted: usize,
    pub pending_sync: usize,
    pub offline: usize,
}

/// The note collection of a single area
///
/// Cheap to clone; clones share the same collection.
#[derive(Clone, Debug)]
pub struct NoteStore {
    area: Area,

    /// All notes of the area, in display order
    notes: Arc<Mutex<Vec<Note>>>,
}

impl NoteStore {
    /// Create a store over an initial note collection
    pub fn new(area: Area, notes: Vec<Note>) -> Self {
        Self {
            area,
            notes: Arc::new(Mutex::new(notes)),
        }
    }

    /// The area this store belongs to
    pub fn area(&self) -> &Area {
        &self.area
    }

    /// All notes, in display order
    pub async fn list(&self) -> Vec<Note> {
        self.notes.lock().await.clone()
    }

    /// Find a single note by its ID
    pub async fn find(&self, id: &Uuid) -> Option<Note> {
        self.notes
            .lock()
            .await
            .iter()
            .find(|note| &note.id == id)
            .cloned()
    }

    /// The dashboard counters for this area
    pub async fn stats(&self) -> Stats {
        let notes = self.notes.lock().await;

        Stats {
            total: notes.len(),
            encrypted: notes.iter().filter(|note| note.is_encrypted).count(),
            pending_sync: notes
                .iter()
                .filter(|note| note.sync_status == SyncStatus::Pending)
                .count(),
            offline: notes
                .iter()
                .filter(|note| note.sync_status == SyncStatus::Offline)
                .count(),
        }
    }

    /// Create a plaintext note in this area
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        category: &str,
        tags: Vec<String>,
    ) -> Note {
        let note = Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            is_encrypted: false,
            last_modified: Utc::now(),
            category: category.to_string(),
            tags,
            sync_status: SyncStatus::Pending,
        };

        self.notes.lock().await.push(note.clone());

        note
    }

    /// Decrypt a note's content, returning the transient plaintext
    ///
    /// The note itself is never mutated; the plaintext lives only as long as
    /// the caller keeps it. Decrypting again requires re-entering the
    /// passphrase.
    pub async fn decrypt(&self, id: &Uuid, passphrase: &str) -> Result<String> {
        if passphrase.is_empty() {
            return Err(Error::EmptyPassphrase);
        }

        let notes = self.notes.lock().await;
        let note = notes
            .iter()
            .find(|note| &note.id == id)
            .ok_or(Error::UnknownNote(*id))?;

        if !note.is_encrypted {
            return Err(Error::NotEncrypted);
        }

        Ok(crypto::decrypt(&note.content, passphrase)?)
    }

    /// Seal `plaintext` into the note under `passphrase`
    ///
    /// Replaces the note's content with a fresh ciphertext blob and marks
    /// the mutation. The passphrase is not retained.
    pub async fn encrypt(&self, id: &Uuid, plaintext: &str, passphrase: &str) -> Result<Note> {
        if passphrase.is_empty() {
            return Err(Error::EmptyPassphrase);
        }

        let blob = crypto::encrypt(plaintext, passphrase)?;

        let mut notes = self.notes.lock().await;
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or(Error::UnknownNote(*id))?;

        note.content = blob;
        note.is_encrypted = true;
        touch(note);

        Ok(note.clone())
    }

    /// Save edited content into a note
    ///
    /// A plaintext note takes the new content directly. An encrypted note
    /// keeps its ciphertext: the edit lives in the caller's transient
    /// decrypted buffer until an explicit [`Self::encrypt`] with a
    /// passphrase. Both cases count as a content-affecting mutation.
    pub async fn save_content(&self, id: &Uuid, new_content: &str) -> Result<Note> {
        let mut notes = self.notes.lock().await;
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or(Error::UnknownNote(*id))?;

        if !note.is_encrypted {
            note.content = new_content.to_string();
        }
        touch(note);

        Ok(note.clone())
    }

    /// Write a snapshot of all notes to durable storage
    ///
    /// The snapshot is keyed by area and overwrites the previous one. Edits
    /// staged in transient decrypted buffers are not part of the collection
    /// and therefore not part of the snapshot.
    pub async fn backup<S: Storage>(&self, storage: &S) -> Result<()> {
        let snapshot = BackupSnapshot {
            timestamp: Utc::now(),
            area_id: self.area.id,
            area_name: self.area.name.clone(),
            notes: self.notes.lock().await.clone(),
        };

        let value = serde_json::to_string(&snapshot).expect("Valid snapshot JSON");

        storage.set(&BackupSnapshot::key(self.area.id), &value).await?;

        Ok(())
    }

    /// Produce a sanitized export: deterministic filename plus JSON body
    ///
    /// Encrypted notes have their content replaced by the redaction
    /// placeholder.
    pub async fn export(&self) -> (String, String) {
        let now = Utc::now();

        let notes = self
            .notes
            .lock()
            .await
            .iter()
            .map(|note| {
                let mut note = note.clone();
                if note.is_encrypted {
                    note.content = REDACTED_CONTENT.to_string();
                }
                note
            })
            .collect();

        let data = ExportData {
            export_date: now,
            area_name: self.area.name.clone(),
            notes,
        };

        let body = serde_json::to_string_pretty(&data).expect("Valid export JSON");

        (ExportData::filename(&self.area.name, now), body)
    }

    /// Merge notes from an uploaded snapshot file
    ///
    /// All-or-nothing: the input is parsed completely before the collection
    /// is touched. Every imported note gets a fresh ID, so collisions with
    /// existing notes are impossible, and starts out `Pending`.
    pub async fn import(&self, json: &str) -> Result<Vec<Note>> {
        let data: ImportData = serde_json::from_str(json)?;

        let imported: Vec<Note> = data
            .notes
            .into_iter()
            .map(|mut note| {
                note.id = Uuid::new_v4();
                note.sync_status = SyncStatus::Pending;
                note
            })
            .collect();

        self.notes.lock().await.extend(imported.iter().cloned());

        Ok(imported)
    }
}

/// Mark a content-affecting mutation on a note
///
/// Sync status drops to `Pending`; the modification time strictly advances
/// even if the clock ties or steps backwards between calls.
fn touch(note: &mut Note) {
    let now = Utc::now();

    note.last_modified = if now > note.last_modified {
        now
    } else {
        note.last_modified + Duration::nanoseconds(1)
    };
    note.sync_status = SyncStatus::Pending;
}
