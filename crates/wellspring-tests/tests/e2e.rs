//! End-to-end wallet lifecycle tests.
//!
//! Each test drives the full pipeline the way a calling application would:
//! mnemonic in, derived wallets out, snapshots on real files, with process
//! restarts simulated by dropping one registry and loading a fresh one from
//! the same store.

use wellspring_core::encoding;
use wellspring_tests::helpers::*;
use wellspring_wallet::{FileStore, Registry, SnapshotStore, WalletError};

/// A file store in a fresh temp directory. Keep the `TempDir` alive for the
/// duration of the test.
fn temp_store() -> (FileStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("wallets.json"));
    (store, dir)
}

// ======================================================================
// E2E Test 1: generate, add, restart, continue
// The mnemonic and wallet list survive a restart and derivation picks up
// at the next index.
// ======================================================================

#[test]
fn e2e_lifecycle_survives_restart() {
    let (store, _dir) = temp_store();

    let mut registry = Registry::load(&store).unwrap();
    let phrase = registry.generate_mnemonic();
    registry.persist(&store).unwrap();
    let first = registry.add_wallet(&store).unwrap();
    let second = registry.add_wallet(&store).unwrap();
    assert_eq!((first.id, second.id), (0, 1));
    drop(registry);

    let mut reloaded = Registry::load(&store).unwrap();
    assert_eq!(
        reloaded.mnemonic(),
        Some(phrase.as_str()),
        "mnemonic should survive a restart"
    );
    assert_eq!(reloaded.wallets(), &[first, second.clone()]);

    let third = reloaded.add_wallet(&store).unwrap();
    assert_eq!(third.id, 2, "derivation should continue at the next index");
    assert_ne!(third.public_key, second.public_key);
}

// ======================================================================
// E2E Test 2: determinism across instances
// Two registries fed the same phrase mint byte-identical wallets.
// ======================================================================

#[test]
fn e2e_same_phrase_yields_same_wallets() {
    let store_a = MemoryStore::new();
    let store_b = MemoryStore::new();
    let mut a = Registry::new();
    let mut b = Registry::new();
    a.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    b.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();

    for _ in 0..4 {
        assert_eq!(
            a.add_wallet(&store_a).unwrap(),
            b.add_wallet(&store_b).unwrap(),
            "same phrase and index should mint the same wallet"
        );
    }
}

// ======================================================================
// E2E Test 3: deleted indices stay retired across restarts
// ======================================================================

#[test]
fn e2e_deleted_index_not_reused_after_restart() {
    let (store, _dir) = temp_store();

    let mut registry = Registry::load(&store).unwrap();
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    for _ in 0..3 {
        registry.add_wallet(&store).unwrap();
    }
    assert!(registry.delete_wallet(&store, 1).unwrap());
    drop(registry);

    let mut reloaded = Registry::load(&store).unwrap();
    let ids: Vec<u32> = reloaded.wallets().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![0, 2]);

    let record = reloaded.add_wallet(&store).unwrap();
    assert_eq!(record.id, 3, "index 1 must stay retired after its wallet is gone");
}

// ======================================================================
// E2E Test 4: persistence failure leaves memory authoritative
// A failed save surfaces an error but the wallet exists; an explicit
// persist to a healthy store catches everything up.
// ======================================================================

#[test]
fn e2e_failed_save_keeps_memory_authoritative() {
    let mut registry = Registry::new();
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();

    let err = registry.add_wallet(&FailingStore).unwrap_err();
    assert!(matches!(err, WalletError::Persistence(_)), "got {err:?}");
    assert_eq!(
        registry.wallets().len(),
        1,
        "wallet should exist despite the failed save"
    );
    assert_eq!(registry.next_index(), 1);

    let (store, _dir) = temp_store();
    registry.persist(&store).unwrap();

    let recovered = Registry::load(&store).unwrap();
    assert_eq!(recovered.wallets(), registry.wallets());
    assert_eq!(recovered.next_index(), 1);
}

// ======================================================================
// E2E Test 5: checksum-invalid phrases derive deterministically
// Wordlist membership is the import bar; derivation works from the
// phrase text.
// ======================================================================

#[test]
fn e2e_checksum_invalid_phrase_still_derives() {
    let store = MemoryStore::new();
    let mut registry = Registry::new();
    registry.set_mnemonic(CHECKSUM_INVALID_PHRASE).unwrap();
    let record = registry.add_wallet(&store).unwrap();

    let mut again = Registry::new();
    again.set_mnemonic(CHECKSUM_INVALID_PHRASE).unwrap();
    assert_eq!(again.add_wallet(&store).unwrap(), record);
}

// ======================================================================
// E2E Test 6: the snapshot is one JSON document
// ======================================================================

#[test]
fn e2e_snapshot_is_one_json_document() {
    let (store, _dir) = temp_store();
    let mut registry = Registry::load(&store).unwrap();
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    registry.add_wallet(&store).unwrap();
    registry.add_wallet(&store).unwrap();

    let raw = std::fs::read(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value["mnemonic"], ZERO_ENTROPY_PHRASE);
    assert_eq!(value["next_index"], 2);
    assert_eq!(value["wallets"].as_array().unwrap().len(), 2);
}

// ======================================================================
// E2E Test 7: saves leave no temporary files behind
// ======================================================================

#[test]
fn e2e_saves_leave_single_file() {
    let (store, dir) = temp_store();
    let mut registry = Registry::load(&store).unwrap();
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    for _ in 0..3 {
        registry.add_wallet(&store).unwrap();
    }

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the snapshot file should remain");
}

// ======================================================================
// E2E Test 8: persisted key strings decode and agree
// Every stored record decodes to a 32-byte public key and a 64-byte
// keypair whose tail is that public key.
// ======================================================================

#[test]
fn e2e_record_keys_decode_and_agree() {
    let (store, _dir) = temp_store();
    let mut registry = Registry::load(&store).unwrap();
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    for _ in 0..3 {
        registry.add_wallet(&store).unwrap();
    }
    drop(registry);

    let reloaded = Registry::load(&store).unwrap();
    for wallet in reloaded.wallets() {
        let public = encoding::decode_public(&wallet.public_key)
            .expect("public key string decodes to 32 bytes");
        let pair = encoding::decode_private(&wallet.private_key)
            .expect("private key string decodes to 64 bytes");
        assert_eq!(
            &pair[32..],
            &public,
            "keypair encoding should end with the public key"
        );
    }
}

// ======================================================================
// E2E Test 9: reset erases the store and starts a new lifetime
// ======================================================================

#[test]
fn e2e_reset_erases_store_and_restarts_ids() {
    let (store, _dir) = temp_store();
    let mut registry = Registry::load(&store).unwrap();
    registry.generate_mnemonic();
    registry.persist(&store).unwrap();
    registry.add_wallet(&store).unwrap();

    registry.reset(&store).unwrap();
    assert!(
        store.load().unwrap().is_none(),
        "snapshot should be gone after reset"
    );

    // A reset registry is a new lifetime: ids start over at zero.
    registry.set_mnemonic(ZERO_ENTROPY_PHRASE).unwrap();
    assert_eq!(registry.add_wallet(&store).unwrap().id, 0);
}
