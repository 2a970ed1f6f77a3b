//! Address encoders: Base58Check (legacy, P2SH, WIF) and segwit
//! Bech32/Bech32m.
//!
//! The witness version decides the checksum variant: v0 programs are
//! Bech32, v1 (Taproot) programs are Bech32m. Callers never pick the
//! variant themselves; mixing them yields addresses that decode to the
//! wrong witness version.

use bech32::{u5, Variant};

use crate::crypto;
use crate::error::{Result, ScanError};
use crate::keypair::KeyPair;

pub const VERSION_P2PKH: u8 = 0x00;
pub const VERSION_P2SH: u8 = 0x05;
const VERSION_WIF: u8 = 0x80;
const HRP: &str = "bc";

/// Base58Check: version byte + payload + first 4 bytes of sha256d.
/// Leading zero bytes come out as leading '1' characters.
pub fn base58check(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 5);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = crypto::sha256d(&data);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Private key to WIF. The 0x01 suffix marks a compressed public key.
pub fn to_wif(key: &[u8; 32], compressed: bool) -> String {
    let mut data = Vec::with_capacity(38);
    data.push(VERSION_WIF);
    data.extend_from_slice(key);
    if compressed {
        data.push(0x01);
    }
    let checksum = crypto::sha256d(&data);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Encode a segwit witness program for mainnet.
///
/// Valid program lengths: 20 or 32 bytes for v0, 32 bytes for v1.
pub fn encode_segwit(witness_version: u8, program: &[u8]) -> Result<String> {
    let length_ok = match witness_version {
        0 => program.len() == 20 || program.len() == 32,
        1 => program.len() == 32,
        _ => false,
    };
    if !length_ok {
        return Err(ScanError::InvalidWitnessProgram(program.len()));
    }

    let variant = if witness_version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    };

    // 8-to-5 bit regrouping, final group zero-padded
    let converted = bech32::convert_bits(program, 8, 5, true)?;
    let mut data = Vec::with_capacity(converted.len() + 1);
    data.push(u5::try_from_u8(witness_version)?);
    for b in converted {
        data.push(u5::try_from_u8(b)?);
    }

    Ok(bech32::encode(HRP, data, variant)?)
}

/// The six address encodings derivable from one key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSet {
    pub legacy_uncompressed: String,
    pub legacy_compressed: String,
    pub p2sh: String,
    pub p2wpkh: String,
    pub p2wsh: String,
    pub taproot: String,
}

impl AddressSet {
    /// Fan a key pair out into all six encodings.
    pub fn derive(keypair: &KeyPair) -> Result<Self> {
        let h160_compressed = crypto::hash160(keypair.public_compressed());
        let h160_uncompressed = crypto::hash160(keypair.public_uncompressed());

        // v0 script program: SHA-256 of the compressed pubkey
        let p2wsh_program = crypto::sha256(keypair.public_compressed());
        // v1 program: SHA-256 of the raw 64-byte coordinate pair
        let taproot_program = crypto::sha256(&keypair.public_uncompressed()[1..]);

        Ok(Self {
            legacy_uncompressed: base58check(VERSION_P2PKH, &h160_uncompressed),
            legacy_compressed: base58check(VERSION_P2PKH, &h160_compressed),
            p2sh: base58check(VERSION_P2SH, &h160_uncompressed),
            p2wpkh: encode_segwit(0, &h160_compressed)?,
            p2wsh: encode_segwit(0, &p2wsh_program)?,
            taproot: encode_segwit(1, &taproot_program)?,
        })
    }

    /// All six addresses, fixed order.
    pub fn as_array(&self) -> [&str; 6] {
        [
            &self.legacy_uncompressed,
            &self.legacy_compressed,
            &self.p2sh,
            &self.p2wpkh,
            &self.p2wsh,
            &self.taproot,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_array().into_iter()
    }
}
