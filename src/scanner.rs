//! Batch driver: derive, screen and report over a bounded seed supply.
//!
//! Seeds fan out over the rayon pool. Workers share only the read-only
//! target registry and the match channel; every per-seed value (key pair,
//! address set) is private to the worker deriving it. A seed that fails
//! derivation is logged and skipped; the batch keeps going.

use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use crate::address::AddressSet;
use crate::keypair::KeyPair;
use crate::seeds::SeedSupply;
use crate::targets::TargetRegistry;
use crate::writer::{MatchRecord, MatchWriter};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Stop after this many seeds even if the supply has more.
    pub max_seeds: u64,
    /// Progress line cadence in seeds (0 = quiet).
    pub progress_every: u64,
    /// Worker threads (0 = rayon default).
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_seeds: 500_000_000,
            progress_every: 100,
            threads: 0,
        }
    }
}

/// Counts and timing for one completed run.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub processed: u64,
    pub matched: u64,
    pub skipped: u64,
    pub elapsed_secs: f64,
}

impl ScanReport {
    pub fn seeds_per_second(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.processed as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

/// Run the batch: for every seed drawn from the supply (up to the
/// configured bound), derive the key pair and address set, screen against
/// the registry, and push any hit to the match writer.
pub fn run(
    supply: &SeedSupply,
    registry: &TargetRegistry,
    writer: &MatchWriter,
    shutdown: &AtomicBool,
    config: &ScanConfig,
) -> ScanReport {
    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .ok();
    }

    let bound = supply.len().min(config.max_seeds as usize);
    let seeds = &supply.as_slice()[..bound];

    let processed = AtomicU64::new(0);
    let matched = AtomicU64::new(0);
    let skipped = AtomicU64::new(0);
    let start = Instant::now();

    seeds.par_iter().for_each(|seed| {
        if shutdown.load(Ordering::Relaxed) {
            return;
        }

        screen_one(seed, registry, writer, shutdown, &matched, &skipped);

        let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
        if config.progress_every > 0 && count % config.progress_every == 0 {
            print!("\rProcessed count: {}", count);
            stdout().flush().ok();
        }
    });

    ScanReport {
        processed: processed.load(Ordering::Relaxed),
        matched: matched.load(Ordering::Relaxed),
        skipped: skipped.load(Ordering::Relaxed),
        elapsed_secs: start.elapsed().as_secs_f64(),
    }
}

fn screen_one(
    seed: &str,
    registry: &TargetRegistry,
    writer: &MatchWriter,
    shutdown: &AtomicBool,
    matched: &AtomicU64,
    skipped: &AtomicU64,
) {
    let keypair = match KeyPair::from_seed(seed) {
        Ok(kp) => kp,
        Err(e) => {
            skipped.fetch_add(1, Ordering::Relaxed);
            eprintln!("[!] Skipping seed {:?}: {}", seed, e);
            return;
        }
    };

    let addresses = match AddressSet::derive(&keypair) {
        Ok(a) => a,
        Err(e) => {
            skipped.fetch_add(1, Ordering::Relaxed);
            eprintln!("[!] Skipping seed {:?}: {}", seed, e);
            return;
        }
    };

    if !registry.screen(&addresses).is_empty() {
        matched.fetch_add(1, Ordering::Relaxed);
        let record = MatchRecord::new(seed, &keypair, &addresses);
        if !writer.submit(record) {
            // Writer gone; matches can no longer be persisted.
            shutdown.store(true, Ordering::SeqCst);
        }
    }
}
