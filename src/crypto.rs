//! Passphrase-keyed content encryption
//!
//! Blob layout: `base64( salt || nonce || AES-256-GCM ciphertext )`. The key
//! is derived from the passphrase with Argon2id and the per-blob salt, so the
//! passphrase itself never acts as raw key material.

use aes_gcm::Aes256Gcm;
use aes_gcm::Key;
use aes_gcm::Nonce;
use aes_gcm::aead::Aead;
use aes_gcm::aead::AeadCore;
use aes_gcm::aead::KeyInit;
use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;
use argon2::Argon2;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Salt length in bytes, stored at the front of every blob
const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes
const NONCE_LEN: usize = 12;

/// Derived key length in bytes (AES-256)
const KEY_LEN: usize = 32;

/// Cipher errors
///
/// A wrong passphrase and a corrupted blob are indistinguishable; both
/// surface as `IncorrectPassphrase`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No passphrase supplied; the cipher is never invoked without one
    #[error("Passphrase must not be empty")]
    EmptyPassphrase,

    /// Decryption failed: wrong passphrase or corrupted content
    #[error("Incorrect passphrase")]
    IncorrectPassphrase,
}

/// Result type for all cipher interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Encrypt `plaintext` under `passphrase`, returning an opaque blob
///
/// Every call draws a fresh salt and nonce, so encrypting the same text
/// twice yields different blobs.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    if passphrase.is_empty() {
        return Err(Error::EmptyPassphrase);
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .expect("Valid AES-GCM encryption");

    let mut blob = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(blob))
}

/// Decrypt a blob previously produced by [`encrypt`]
///
/// Any failure along the way (bad base64, truncated blob, authentication
/// failure, invalid UTF-8) collapses into `IncorrectPassphrase`; callers
/// must not learn whether the key or the data was at fault.
pub fn decrypt(blob: &str, passphrase: &str) -> Result<String> {
    if passphrase.is_empty() {
        return Err(Error::EmptyPassphrase);
    }

    let bytes = STANDARD
        .decode(blob)
        .map_err(|_| Error::IncorrectPassphrase)?;

    if bytes.len() <= SALT_LEN + NONCE_LEN {
        return Err(Error::IncorrectPassphrase);
    }

    let (salt, rest) = bytes.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(passphrase, salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::IncorrectPassphrase)?;

    String::from_utf8(plaintext).map_err(|_| Error::IncorrectPassphrase)
}

/// Derive an AES-256 key from a passphrase and salt with Argon2id
fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];

    Argon2::default()
        .hash_password_into(passphrase.as_bytes(), salt, &mut key)
        .expect("Valid Argon2 parameters");

    key
}
