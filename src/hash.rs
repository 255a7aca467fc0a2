use hmac::{Hmac, Mac};
use rand_core::{OsRng, RngCore};
use sha2::Sha512;
use subtle::ConstantTimeEq;

use crate::error::Error;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 output length.
pub const DIGEST_LEN: usize = 64;
/// Per-secret key length (SHA-512 block size).
pub const KEY_LEN: usize = 128;

/// Derive a keyed digest for `secret` under a fresh random key.
///
/// The key comes from the OS RNG and is never reused across records; callers
/// store the returned pair together.
pub fn derive(secret: &str) -> Result<([u8; DIGEST_LEN], [u8; KEY_LEN]), Error> {
    if secret.trim().is_empty() {
        return Err(Error::InvalidInput("secret must not be empty".to_string()));
    }

    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);

    let digest = keyed_digest(secret, &key)?;
    Ok((digest, key))
}

/// Recompute the digest of `secret` under `key` and compare against `digest`.
///
/// Length mismatches mean the stored record is corrupt, not that the caller
/// sent bad input. The comparison is constant-time: every byte is compared
/// regardless of where the first mismatch sits.
pub fn verify(secret: &str, digest: &[u8], key: &[u8]) -> Result<bool, Error> {
    if digest.len() != DIGEST_LEN {
        return Err(Error::InvalidState(format!(
            "stored digest is {} bytes, expected {}",
            digest.len(),
            DIGEST_LEN
        )));
    }
    if key.len() != KEY_LEN {
        return Err(Error::InvalidState(format!(
            "stored key is {} bytes, expected {}",
            key.len(),
            KEY_LEN
        )));
    }

    let computed = keyed_digest(secret, key)?;
    Ok(computed.ct_eq(digest).into())
}

fn keyed_digest(secret: &str, key: &[u8]) -> Result<[u8; DIGEST_LEN], Error> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| Error::InvalidState(e.to_string()))?;
    mac.update(secret.as_bytes());

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}
