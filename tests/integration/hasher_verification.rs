//! Hasher Implementation Verification Tests
//!
//! Checks that digests match the underlying hash crates directly and that
//! streaming a file agrees with hashing its bytes in memory.

use fileguard::tree::hasher::{self, HashAlgorithm};
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

/// Large enough to span several read buffers with a ragged tail
fn large_content() -> Vec<u8> {
    (0..100_003u32).map(|i| (i % 251) as u8).collect()
}

#[test]
fn test_sha256_matches_sha2_directly() {
    let content = b"test content";
    let ours = hasher::compute_content_hash(content, HashAlgorithm::Sha256);
    let direct = hex::encode(Sha256::digest(content));
    assert_eq!(ours, direct);
}

#[test]
fn test_blake3_matches_blake3_directly() {
    let content = b"test content";
    let ours = hasher::compute_content_hash(content, HashAlgorithm::Blake3);
    let direct = blake3::hash(content).to_hex().to_string();
    assert_eq!(ours, direct);
}

#[test]
fn test_streamed_file_matches_in_memory_hash() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let content = large_content();
    fs::write(&file, &content).unwrap();

    for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
        assert_eq!(
            hasher::hash_file(&file, algorithm).unwrap(),
            hasher::compute_content_hash(&content, algorithm)
        );
    }
}

#[test]
fn test_single_byte_change_changes_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("data.bin");
    let mut content = large_content();
    fs::write(&file, &content).unwrap();
    let before = hasher::hash_file(&file, HashAlgorithm::Sha256).unwrap();

    content[50_000] ^= 0x01;
    fs::write(&file, &content).unwrap();
    let after = hasher::hash_file(&file, HashAlgorithm::Sha256).unwrap();

    assert_ne!(before, after);
}

#[test]
fn test_digest_shape() {
    for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
        let digest = hasher::compute_content_hash(b"shape", algorithm);
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = hasher::hash_file(&temp_dir.path().join("absent"), HashAlgorithm::Sha256)
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
