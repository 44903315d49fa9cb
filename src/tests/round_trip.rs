use crate::crypto;

#[test]
fn test_round_trip() {
    let plaintexts = [
        "hello",
        "",
        "línea uno\nlínea dos",
        "acentos áéíóú y emoji 🚀",
    ];

    for plaintext in plaintexts {
        let blob = crypto::encrypt(plaintext, "secret123").unwrap();
        assert_ne!(plaintext, blob);

        let decrypted = crypto::decrypt(&blob, "secret123").unwrap();
        assert_eq!(plaintext, decrypted);
    }
}

#[test]
fn test_fresh_salt_and_nonce_per_encryption() {
    let one = crypto::encrypt("same text", "same pass").unwrap();
    let two = crypto::encrypt("same text", "same pass").unwrap();

    // blobs differ, both still decrypt
    assert_ne!(one, two);
    assert_eq!("same text", crypto::decrypt(&one, "same pass").unwrap());
    assert_eq!("same text", crypto::decrypt(&two, "same pass").unwrap());
}
