//! Seed-to-key derivation.
//!
//! A candidate seed is an arbitrary text string. Its SHA-256 digest is the
//! private key scalar; the public point comes from k256. Scalars that fall
//! outside [1, N-1] are rejected so a bad seed can never alias onto a
//! different key.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;

use crate::address;
use crate::crypto;
use crate::error::{Result, ScanError};

/// One derived key pair. Created per seed, read-only afterwards.
pub struct KeyPair {
    priv_bytes: [u8; 32],
    public_uncompressed: [u8; 65],
    public_compressed: [u8; 33],
}

impl KeyPair {
    /// Derive from a seed string: private key = SHA-256(seed bytes).
    pub fn from_seed(seed: &str) -> Result<Self> {
        Self::from_private_bytes(crypto::sha256(seed.as_bytes()))
    }

    /// Build from raw private key bytes (big-endian scalar).
    pub fn from_private_bytes(priv_bytes: [u8; 32]) -> Result<Self> {
        if !crypto::is_valid_scalar(&priv_bytes) {
            return Err(ScanError::ScalarOutOfRange);
        }

        let secret =
            SecretKey::from_bytes((&priv_bytes).into()).map_err(|_| ScanError::ScalarOutOfRange)?;
        let public = secret.public_key();

        let uncompressed = public.to_encoded_point(false);
        let compressed = public.to_encoded_point(true);

        let mut public_uncompressed = [0u8; 65];
        public_uncompressed.copy_from_slice(uncompressed.as_bytes());
        let mut public_compressed = [0u8; 33];
        public_compressed.copy_from_slice(compressed.as_bytes());

        Ok(Self {
            priv_bytes,
            public_uncompressed,
            public_compressed,
        })
    }

    #[inline]
    pub fn private_bytes(&self) -> &[u8; 32] {
        &self.priv_bytes
    }

    /// 65 bytes: 0x04 prefix + x + y
    #[inline]
    pub fn public_uncompressed(&self) -> &[u8; 65] {
        &self.public_uncompressed
    }

    /// 33 bytes: 0x02/0x03 prefix (y parity) + x
    #[inline]
    pub fn public_compressed(&self) -> &[u8; 33] {
        &self.public_compressed
    }

    pub fn private_hex(&self) -> String {
        hex::encode(self.priv_bytes)
    }

    pub fn public_uncompressed_hex(&self) -> String {
        hex::encode(self.public_uncompressed)
    }

    pub fn public_compressed_hex(&self) -> String {
        hex::encode(self.public_compressed)
    }

    pub fn wif_uncompressed(&self) -> String {
        address::to_wif(&self.priv_bytes, false)
    }

    pub fn wif_compressed(&self) -> String {
        address::to_wif(&self.priv_bytes, true)
    }
}
