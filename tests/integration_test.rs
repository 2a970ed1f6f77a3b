//! End-to-end batch tests: seed supply → derivation → screening → match
//! persistence, over real temp files.

use std::sync::atomic::AtomicBool;

use brainscan::address::AddressSet;
use brainscan::keypair::KeyPair;
use brainscan::scanner::{self, ScanConfig};
use brainscan::seeds::SeedSupply;
use brainscan::targets::TargetRegistry;
use brainscan::writer::MatchWriter;

fn quiet_config() -> ScanConfig {
    ScanConfig {
        max_seeds: u64::MAX,
        progress_every: 0,
        threads: 0,
    }
}

fn derived(seed: &str) -> AddressSet {
    AddressSet::derive(&KeyPair::from_seed(seed).unwrap()).unwrap()
}

#[test]
fn test_planted_match_is_found_and_persisted() {
    let output = "/tmp/brainscan_it_found.txt";
    let _ = std::fs::remove_file(output);

    // The registry holds the P2WPKH address derived from "satoshi"
    let planted = derived("satoshi");
    let registry = TargetRegistry::from_addresses([
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
        planted.p2wpkh.clone(),
    ]);

    let supply = SeedSupply::from_seeds(["password", "satoshi", "hello", "bitcoin"]);
    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);

    let report = scanner::run(&supply, &registry, &writer, &shutdown, &quiet_config());
    let written = writer.finish();

    assert_eq!(report.processed, 4);
    assert_eq!(report.matched, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(written, 1);

    let content = std::fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let line = lines[0];
    assert!(line.starts_with("Seed: satoshi, "));
    assert!(line.contains(&format!("P2WPKH Address: {}", planted.p2wpkh)));
    assert!(line.contains(&format!("TapRoot Address: {}", planted.taproot)));
    assert!(line.contains(&format!("P2SH Address: {}", planted.p2sh)));

    let kp = KeyPair::from_seed("satoshi").unwrap();
    assert!(line.contains(&format!("Private Key (Hex): {}", kp.private_hex())));
    assert!(line.contains(&format!("WIF (Compressed): {}", kp.wif_compressed())));
    assert!(line.contains(&format!("WIF (Uncompressed): {}", kp.wif_uncompressed())));

    let _ = std::fs::remove_file(output);
}

#[test]
fn test_no_match_writes_nothing() {
    let output = "/tmp/brainscan_it_nomatch.txt";
    let _ = std::fs::remove_file(output);

    let registry = TargetRegistry::from_addresses(["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"]);
    let supply = SeedSupply::from_seeds(["password", "hello", "god"]);
    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);

    let report = scanner::run(&supply, &registry, &writer, &shutdown, &quiet_config());
    let written = writer.finish();

    assert_eq!(report.processed, 3);
    assert_eq!(report.matched, 0);
    assert_eq!(written, 0);

    let content = std::fs::read_to_string(output).unwrap();
    assert!(content.is_empty());

    let _ = std::fs::remove_file(output);
}

#[test]
fn test_empty_registry_never_matches_any_batch() {
    let output = "/tmp/brainscan_it_empty_registry.txt";
    let _ = std::fs::remove_file(output);

    let registry = TargetRegistry::from_addresses(Vec::<String>::new());
    let seeds: Vec<String> = (0..500).map(|i| format!("candidate-{}", i)).collect();
    let supply = SeedSupply::from_seeds(seeds);
    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);

    let report = scanner::run(&supply, &registry, &writer, &shutdown, &quiet_config());
    let written = writer.finish();

    assert_eq!(report.processed, 500);
    assert_eq!(report.matched, 0);
    assert_eq!(written, 0);

    let _ = std::fs::remove_file(output);
}

#[test]
fn test_max_seeds_bounds_the_run() {
    let output = "/tmp/brainscan_it_bound.txt";
    let _ = std::fs::remove_file(output);

    let registry = TargetRegistry::from_addresses(["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"]);
    let seeds: Vec<String> = (0..100).map(|i| format!("seed-{}", i)).collect();
    let supply = SeedSupply::from_seeds(seeds);
    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);

    let config = ScanConfig {
        max_seeds: 25,
        progress_every: 0,
        threads: 0,
    };
    let report = scanner::run(&supply, &registry, &writer, &shutdown, &config);
    writer.finish();

    assert_eq!(report.processed, 25);

    let _ = std::fs::remove_file(output);
}

#[test]
fn test_file_loaded_supply_dedups_before_the_bound() {
    let seeds_path = "/tmp/brainscan_it_seeds.txt";
    let output = "/tmp/brainscan_it_dedup_found.txt";
    let _ = std::fs::remove_file(output);

    // 6 lines, 3 unique
    std::fs::write(seeds_path, "dup\nuniq-a\ndup\nuniq-b\ndup\n\n").unwrap();
    let supply = SeedSupply::load(seeds_path).unwrap();
    assert_eq!(supply.len(), 3);

    let registry = TargetRegistry::from_addresses([derived("dup").legacy_compressed]);
    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);

    let report = scanner::run(&supply, &registry, &writer, &shutdown, &quiet_config());
    let written = writer.finish();

    // The duplicate seed is screened once, so exactly one record lands
    assert_eq!(report.processed, 3);
    assert_eq!(report.matched, 1);
    assert_eq!(written, 1);

    let _ = std::fs::remove_file(seeds_path);
    let _ = std::fs::remove_file(output);
}

#[test]
fn test_whole_pipeline_from_files() {
    let seeds_path = "/tmp/brainscan_it_pipeline_seeds.txt";
    let targets_path = "/tmp/brainscan_it_pipeline_targets.txt";
    let output = "/tmp/brainscan_it_pipeline_found.txt";
    let _ = std::fs::remove_file(output);

    std::fs::write(seeds_path, "alpha\nbravo\ncharlie\nbitcoin\n").unwrap();
    std::fs::write(
        targets_path,
        format!(
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa\n{}\n",
            derived("bitcoin").taproot
        ),
    )
    .unwrap();

    let supply = SeedSupply::load(seeds_path).unwrap();
    let registry = TargetRegistry::load(targets_path).unwrap();
    assert_eq!(registry.len(), 2);

    let writer = MatchWriter::create(output).unwrap();
    let shutdown = AtomicBool::new(false);
    let report = scanner::run(&supply, &registry, &writer, &shutdown, &quiet_config());
    let written = writer.finish();

    assert_eq!(report.processed, 4);
    assert_eq!(report.matched, 1);
    assert_eq!(written, 1);

    let content = std::fs::read_to_string(output).unwrap();
    assert!(content.starts_with("Seed: bitcoin, "));

    let _ = std::fs::remove_file(seeds_path);
    let _ = std::fs::remove_file(targets_path);
    let _ = std::fs::remove_file(output);
}
