use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use brainscan::cli::{format_num, format_speed, format_time, Args};
use brainscan::scanner;
use brainscan::seeds::SeedSupply;
use brainscan::targets::TargetRegistry;
use brainscan::writer::MatchWriter;

fn main() {
    let args = Args::parse();

    println!("\n\x1b[1;36m╔═══════════════════════════════════════════════════════╗");
    println!("║        BRAINSCAN  •  Seed Derivation & Screening       ║");
    println!("║   Legacy  •  P2SH  •  P2WPKH  •  P2WSH  •  Taproot     ║");
    println!("╚═══════════════════════════════════════════════════════╝\x1b[0m\n");

    let registry = match TargetRegistry::load(&args.targets) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[✗] Cannot load target registry {}: {}", args.targets, e);
            std::process::exit(1);
        }
    };
    println!(
        "[✓] Loaded {} target addresses from {}",
        format_num(registry.len() as u64),
        args.targets
    );
    if registry.is_empty() {
        println!("[!] Target registry is empty; no seed can match");
    }

    let supply = match SeedSupply::load(&args.seeds) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[✗] Cannot load seed supply {}: {}", args.seeds, e);
            std::process::exit(1);
        }
    };
    println!(
        "[✓] Loaded {} unique candidate seeds from {}",
        format_num(supply.len() as u64),
        args.seeds
    );
    if supply.is_empty() {
        println!("[!] Seed supply is empty; nothing to screen");
    }

    let writer = match MatchWriter::create(&args.output) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("[✗] Cannot open match output {}: {}", args.output, e);
            std::process::exit(1);
        }
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_sig = shutdown.clone();
    ctrlc::set_handler(move || {
        println!("\n[!] Stopping...");
        shutdown_sig.store(true, Ordering::SeqCst);
    })
    .ok();

    println!(
        "[▶] Screening up to {} seeds... (Ctrl+C to stop)\n",
        format_num(args.max_seeds)
    );

    let report = scanner::run(&supply, &registry, &writer, &shutdown, &args.scan_config());
    let written = writer.finish();

    println!(
        "\n\n[Done] {} seeds in {} @ {} | {} matched, {} skipped, {} records written",
        format_num(report.processed),
        format_time(report.elapsed_secs),
        format_speed(report.seeds_per_second()),
        format_num(report.matched),
        format_num(report.skipped),
        format_num(written)
    );
}
