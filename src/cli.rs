//! Command-line arguments and console formatting helpers.

use clap::Parser;

use crate::scanner::ScanConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Brainwallet derivation and funded-address screening", long_about = None)]
pub struct Args {
    /// Seed supply file, one candidate seed per line
    #[arg(long, value_name = "FILE", default_value = "processed.txt")]
    pub seeds: String,

    /// Target registry: one address per line, or a {"addresses": []} JSON file
    #[arg(long, value_name = "FILE", default_value = "high_val_addresses.txt")]
    pub targets: String,

    /// Match output file (append-only)
    #[arg(long, value_name = "FILE", default_value = "found.txt")]
    pub output: String,

    /// Maximum number of seeds to process
    #[arg(short = 'n', long, value_name = "N", default_value_t = 500_000_000)]
    pub max_seeds: u64,

    /// Number of worker threads (0 = auto-detect)
    #[arg(short = 't', long, value_name = "N", default_value_t = 0)]
    pub threads: usize,

    /// Progress line cadence in seeds (0 = quiet)
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub progress_every: u64,
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_seeds: self.max_seeds,
            progress_every: self.progress_every,
            threads: self.threads,
        }
    }
}

/// Format a count with thousands separators.
pub fn format_num(n: u64) -> String {
    let s = n.to_string();
    let mut r = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            r.push(',');
        }
        r.push(c);
    }
    r.chars().rev().collect()
}

pub fn format_speed(s: f64) -> String {
    if s < 1_000.0 {
        format!("{:.0}/s", s)
    } else if s < 1_000_000.0 {
        format!("{:.1}K/s", s / 1_000.0)
    } else {
        format!("{:.2}M/s", s / 1_000_000.0)
    }
}

pub fn format_time(s: f64) -> String {
    if s < 60.0 {
        format!("{:.0}s", s)
    } else if s < 3600.0 {
        format!("{:.0}m{:.0}s", s / 60.0, s % 60.0)
    } else {
        format!("{:.0}h{:.0}m", s / 3600.0, (s % 3600.0) / 60.0)
    }
}
