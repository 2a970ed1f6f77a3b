//! Candidate seed supply.
//!
//! Seeds come from a line-oriented text file (the processed-seed ledger of
//! a previous stage). The file is memory-mapped and split on newlines;
//! duplicates are collapsed before the batch driver ever sees them. Lines
//! that are not valid UTF-8 cannot be seeds and are skipped with a warning.

use std::fs::File;

use fxhash::FxHashSet;
use memmap2::Mmap;

use crate::error::Result;

pub struct SeedSupply {
    seeds: Vec<String>,
}

impl SeedSupply {
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let mut unique: FxHashSet<&str> = FxHashSet::default();
        let mut invalid = 0u64;

        for line in mmap.split(|&b| b == b'\n') {
            let seed = match std::str::from_utf8(line) {
                Ok(s) => s.trim(),
                Err(_) => {
                    invalid += 1;
                    continue;
                }
            };
            if seed.is_empty() {
                continue;
            }
            unique.insert(seed);
        }

        if invalid > 0 {
            eprintln!("[!] Skipped {} non-UTF-8 lines in {}", invalid, path);
        }

        let seeds = unique.into_iter().map(String::from).collect();
        Ok(Self { seeds })
    }

    pub fn from_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: FxHashSet<String> = seeds.into_iter().map(Into::into).collect();
        Self {
            seeds: unique.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.seeds
    }
}
