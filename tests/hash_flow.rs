use taskboard_auth::hash::{derive, verify, DIGEST_LEN, KEY_LEN};
use taskboard_auth::Error;

#[test]
fn test_derive_verify_roundtrip() {
    let (digest, key) = derive("correct horse battery staple").unwrap();
    assert_eq!(digest.len(), DIGEST_LEN);
    assert_eq!(key.len(), KEY_LEN);

    assert!(verify("correct horse battery staple", &digest, &key).unwrap());
    assert!(!verify("correct horse battery stapel", &digest, &key).unwrap());
}

#[test]
fn test_derive_never_repeats_keys() {
    let mut keys = Vec::new();
    for _ in 0..64 {
        let (_, key) = derive("same secret every time").unwrap();
        keys.push(key);
    }
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a.as_slice(), b.as_slice(), "duplicate key generated");
        }
    }
}

#[test]
fn test_same_secret_different_keys_different_digests() {
    let (digest_a, key_a) = derive("shared").unwrap();
    let (digest_b, key_b) = derive("shared").unwrap();
    assert_ne!(digest_a, digest_b);

    // each digest only verifies under its own key
    assert!(verify("shared", &digest_a, &key_a).unwrap());
    assert!(!verify("shared", &digest_a, &key_b).unwrap());
    assert!(!verify("shared", &digest_b, &key_a).unwrap());
}

#[test]
fn test_empty_secret_rejected() {
    assert!(matches!(derive(""), Err(Error::InvalidInput(_))));
    assert!(matches!(derive("   "), Err(Error::InvalidInput(_))));
}

#[test]
fn test_bad_stored_lengths_are_integrity_errors() {
    let (digest, key) = derive("secret").unwrap();

    let short_digest = &digest[..DIGEST_LEN - 1];
    assert!(matches!(
        verify("secret", short_digest, &key),
        Err(Error::InvalidState(_))
    ));

    let short_key = &key[..KEY_LEN - 1];
    assert!(matches!(
        verify("secret", &digest, short_key),
        Err(Error::InvalidState(_))
    ));
}
