//! Target address registry and candidate screening.
//!
//! The registry is a de-duplicated set of funded address strings, loaded
//! once at batch start and read-only afterwards. Lookup is O(1) per
//! address, so screening one seed costs six membership tests.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashSet;
use serde::Deserialize;

use crate::address::AddressSet;
use crate::error::Result;

#[derive(Deserialize)]
struct TargetFile {
    addresses: Vec<String>,
}

pub struct TargetRegistry {
    addresses: FxHashSet<String>,
}

impl TargetRegistry {
    /// Load targets from a file. A `.json` extension selects the
    /// `{"addresses": [...]}` shape; anything else is one address per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::load_json(path)
        } else {
            Self::load_lines(path)
        }
    }

    fn load_lines(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(1 << 20, file);

        let mut addresses = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let addr = line.trim();
            if addr.is_empty() {
                continue;
            }
            addresses.insert(addr.to_string());
        }

        Ok(Self { addresses })
    }

    fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: TargetFile = serde_json::from_str(&content)?;

        let mut addresses = FxHashSet::default();
        addresses.reserve(file.addresses.len());
        for addr in file.addresses {
            let addr = addr.trim();
            if addr.is_empty() {
                continue;
            }
            addresses.insert(addr.to_string());
        }

        Ok(Self { addresses })
    }

    /// Build a registry from in-memory addresses.
    pub fn from_addresses<I, S>(addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses = addrs.into_iter().map(Into::into).collect();
        Self { addresses }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    #[inline]
    pub fn contains(&self, addr: &str) -> bool {
        self.addresses.contains(addr)
    }

    /// Screen one derived address set. Returns the addresses that are in
    /// the registry (empty = no match). Pure lookup, no side effects.
    #[inline]
    pub fn screen<'a>(&self, set: &'a AddressSet) -> Vec<&'a str> {
        set.iter().filter(|&addr| self.contains(addr)).collect()
    }
}
