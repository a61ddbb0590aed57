//! End-to-end test suite for the Wellspring wallet engine.
//!
//! Integration tests here drive the public API the way a calling
//! application would: phrases in, derived wallets out, snapshots on real
//! files, restarts simulated by reloading from the same store. The crate
//! itself only ships shared fixtures; the tests live under `tests/`.

pub mod helpers;
