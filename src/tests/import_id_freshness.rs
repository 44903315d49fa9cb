use serde_json::json;

use crate::notes::SyncStatus;
use crate::tests::helper;

#[tokio::test]
async fn test_import_mints_fresh_ids() {
    let (store, existing_id) = helper::setup_store();
    let existing_before = store.find(&existing_id).await.unwrap();

    // an uploaded file carrying the same id as the existing note, claiming
    // to be already synced; the export-shaped extra fields are ignored
    let mut colliding = helper::plaintext_note("B", "imported content");
    colliding.id = existing_id;

    let file = json!({
        "exportDate": "2024-02-01T12:00:00Z",
        "areaName": "Gestión de Equipo",
        "notes": [serde_json::to_value(&colliding).unwrap()],
    })
    .to_string();

    let imported = store.import(&file).await.unwrap();

    assert_eq!(1, imported.len());
    let imported = &imported[0];

    // fresh id, forced pending
    assert_ne!(existing_id, imported.id);
    assert_eq!(SyncStatus::Pending, imported.sync_status);
    assert_eq!("imported content", imported.content);

    // the existing note is left unmodified
    assert_eq!(existing_before, store.find(&existing_id).await.unwrap());

    // both notes are in the collection
    assert_eq!(2, store.list().await.len());
}

#[tokio::test]
async fn test_imported_encrypted_note_stays_decryptable() {
    let (store, _, secret_id) = helper::setup_mixed_store().await;

    // round-trip through export-less backup shape: the ciphertext itself
    // travels in the file
    let secret = store.find(&secret_id).await.unwrap();
    let file = json!({ "notes": [serde_json::to_value(&secret).unwrap()] }).to_string();

    let imported = store.import(&file).await.unwrap();
    let copy_id = imported[0].id;

    assert_ne!(secret_id, copy_id);

    let plaintext = store.decrypt(&copy_id, helper::PASSPHRASE).await.unwrap();
    assert_eq!("Objetivos Q1", plaintext);
}
