//! Integration tests for decryption

use rotcipher::{CipherError, Decoder, decrypt};

#[test]
fn test_decrypt_vectors() {
    assert_eq!(decrypt("ifmmp", 1), "hello");
    assert_eq!(decrypt("sdws ~gdqd", -1), "text!here");
}

#[test]
fn test_decrypt_default_rotation() {
    let plain = Decoder::new().strict().decrypt("_|%~%~(~C7n(~+~%~{8").unwrap();

    assert_eq!(plain, "Hello, World!");
}

#[test]
fn test_decrypt_empty() {
    for amount in [-5, 0, 5, i64::MIN] {
        assert_eq!(decrypt("", amount), "");
    }
}

#[test]
fn test_decrypt_strips_every_marker() {
    assert_eq!(decrypt(" ~", 1), "}");
    assert_eq!(decrypt("~ ", 1), "}");
}

#[test]
fn test_strict_decoder_rejects_stray_marker() {
    let result = Decoder::new().rotation(1).strict().decrypt("~ifmmp");

    assert!(matches!(result, Err(CipherError::InvalidData(_))));
}

#[test]
fn test_strict_decoder_rejects_missing_marker() {
    let result = Decoder::new().rotation(1).strict().decrypt(" ");

    match result.unwrap_err() {
        CipherError::InvalidData(msg) => {
            assert!(msg.contains("missing escape marker"));
        }
        other => panic!("Expected InvalidData, got {:?}", other),
    }
}
