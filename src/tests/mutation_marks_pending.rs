use crate::notes::SyncStatus;
use crate::tests::helper;

#[tokio::test]
async fn test_save_content_marks_pending() {
    let (store, id) = helper::setup_store();
    let before = store.find(&id).await.unwrap();

    let after = store.save_content(&id, "updated").await.unwrap();

    assert_eq!("updated", after.content);
    assert_eq!(SyncStatus::Pending, after.sync_status);
    assert!(after.last_modified > before.last_modified);
}

#[tokio::test]
async fn test_encrypt_marks_pending() {
    let (store, id) = helper::setup_store();
    let before = store.find(&id).await.unwrap();

    let after = store
        .encrypt(&id, "hello", helper::PASSPHRASE)
        .await
        .unwrap();

    assert!(after.is_encrypted);
    assert_ne!("hello", after.content);
    assert_eq!(SyncStatus::Pending, after.sync_status);
    assert!(after.last_modified > before.last_modified);
}

#[tokio::test]
async fn test_repeated_saves_keep_advancing_last_modified() {
    let (store, id) = helper::setup_store();

    let first = store.save_content(&id, "one").await.unwrap();
    let second = store.save_content(&id, "two").await.unwrap();
    let third = store.save_content(&id, "three").await.unwrap();

    assert!(second.last_modified > first.last_modified);
    assert!(third.last_modified > second.last_modified);
}

#[tokio::test]
async fn test_save_content_keeps_ciphertext_of_encrypted_note() {
    let (store, _, secret_id) = helper::setup_mixed_store().await;
    let before = store.find(&secret_id).await.unwrap();

    // the edited plaintext stays in the caller's transient buffer; only an
    // explicit encrypt would commit it
    let after = store
        .save_content(&secret_id, "edited in the decrypted view")
        .await
        .unwrap();

    assert_eq!(before.content, after.content);
    assert!(after.is_encrypted);
    assert_eq!(SyncStatus::Pending, after.sync_status);
    assert!(after.last_modified > before.last_modified);

    // the original plaintext is still what decrypts
    let plaintext = store.decrypt(&secret_id, helper::PASSPHRASE).await.unwrap();
    assert_eq!("Objetivos Q1", plaintext);
}
