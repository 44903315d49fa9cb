use crate::crypto;
use crate::crypto::Error;

#[test]
fn test_wrong_passphrase_fails() {
    let blob = crypto::encrypt("hello", "k1").unwrap();

    // never returns the plaintext, never returns corrupted data as success
    assert_eq!(Err(Error::IncorrectPassphrase), crypto::decrypt(&blob, "k2"));
}

#[test]
fn test_passphrase_prefix_is_not_enough() {
    let blob = crypto::encrypt("hello", "secret123").unwrap();

    assert_eq!(
        Err(Error::IncorrectPassphrase),
        crypto::decrypt(&blob, "secret12")
    );
    assert_eq!(
        Err(Error::IncorrectPassphrase),
        crypto::decrypt(&blob, "secret1234")
    );
}
