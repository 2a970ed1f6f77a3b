//! brainscan: deterministic brainwallet derivation and screening
//!
//! Pipeline: seed string → SHA-256 private key → secp256k1 key pair →
//! six address encodings → membership test against a registry of funded
//! addresses → match persistence.
//!
//! - `crypto`: hashing primitives and the scalar-range check
//! - `keypair`: seed-to-key derivation (k256)
//! - `address`: Base58Check and Bech32/Bech32m encoders, `AddressSet`
//! - `targets`: funded-address registry and screening
//! - `seeds`: de-duplicated seed supply
//! - `scanner`: the batch driver
//! - `writer`: append-only match sink

pub mod address;
pub mod cli;
pub mod crypto;
pub mod error;
pub mod keypair;
pub mod scanner;
pub mod seeds;
pub mod targets;
pub mod writer;
