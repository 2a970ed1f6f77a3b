//! Match persistence.
//!
//! Matches are rare and precious, so writes go through a single dedicated
//! writer thread: workers hand records over a bounded channel (blocking
//! send, a match is never dropped) and the thread appends one complete
//! line per record, flushed immediately. A crash after the append loses
//! nothing already reported.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender};

use crate::address::AddressSet;
use crate::error::Result;
use crate::keypair::KeyPair;

const CHANNEL_DEPTH: usize = 256;

/// Everything worth keeping about a hit: the seed, the full key material
/// and all six addresses.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub seed: String,
    pub public_key_uncompressed: String,
    pub public_key_compressed: String,
    pub private_key_hex: String,
    pub wif_uncompressed: String,
    pub wif_compressed: String,
    pub addresses: AddressSet,
}

impl MatchRecord {
    pub fn new(seed: &str, keypair: &KeyPair, addresses: &AddressSet) -> Self {
        Self {
            seed: seed.to_string(),
            public_key_uncompressed: keypair.public_uncompressed_hex(),
            public_key_compressed: keypair.public_compressed_hex(),
            private_key_hex: keypair.private_hex(),
            wif_uncompressed: keypair.wif_uncompressed(),
            wif_compressed: keypair.wif_compressed(),
            addresses: addresses.clone(),
        }
    }

    /// One human-readable line, labeled fields, comma-separated.
    /// Consumers parse by label, not position.
    pub fn to_line(&self) -> String {
        format!(
            "Seed: {}, Public Key (Uncompressed): {}, Public Key (Compressed): {}, \
             Private Key (Hex): {}, WIF (Uncompressed): {}, WIF (Compressed): {}, \
             Legacy Address (Uncompressed): {}, Legacy Address (Compressed): {}, \
             P2WPKH Address: {}, P2WSH Address: {}, TapRoot Address: {}, P2SH Address: {}",
            self.seed,
            self.public_key_uncompressed,
            self.public_key_compressed,
            self.private_key_hex,
            self.wif_uncompressed,
            self.wif_compressed,
            self.addresses.legacy_uncompressed,
            self.addresses.legacy_compressed,
            self.addresses.p2wpkh,
            self.addresses.p2wsh,
            self.addresses.taproot,
            self.addresses.p2sh,
        )
    }
}

enum WriterMessage {
    Record(MatchRecord),
    Shutdown,
}

/// Append-only match sink with a dedicated I/O thread.
pub struct MatchWriter {
    sender: Sender<WriterMessage>,
    handle: Option<JoinHandle<u64>>,
}

impl MatchWriter {
    /// Open (or create) the output file in append mode and start the
    /// writer thread. Open errors surface here, before any scanning.
    pub fn create(path: &str) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (sender, receiver) = bounded::<WriterMessage>(CHANNEL_DEPTH);

        let handle = thread::spawn(move || {
            let mut file = file;
            let mut written = 0u64;
            while let Ok(msg) = receiver.recv() {
                match msg {
                    WriterMessage::Record(record) => {
                        announce(&record);
                        if let Err(e) = append_line(&mut file, &record) {
                            eprintln!("[!] Failed to persist match: {}", e);
                        } else {
                            written += 1;
                        }
                    }
                    WriterMessage::Shutdown => break,
                }
            }
            written
        });

        Ok(Self {
            sender,
            handle: Some(handle),
        })
    }

    /// Blocking submit. Returns false if the writer thread is gone, in
    /// which case the caller should stop producing matches.
    pub fn submit(&self, record: MatchRecord) -> bool {
        if self.sender.send(WriterMessage::Record(record)).is_err() {
            eprintln!("[!] CRITICAL: match writer disconnected");
            return false;
        }
        true
    }

    /// Drain pending records, stop the thread, return the written count.
    pub fn finish(mut self) -> u64 {
        let _ = self.sender.send(WriterMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or(0)
        } else {
            0
        }
    }
}

fn append_line(file: &mut File, record: &MatchRecord) -> std::io::Result<()> {
    writeln!(file, "{}", record.to_line())?;
    file.flush()
}

fn announce(record: &MatchRecord) {
    let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("\n\n\x1b[1;32m");
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║                     MATCH FOUND                        ║");
    println!("╠═══════════════════════════════════════════════════════╣");
    println!("║ Time: {}", time);
    println!("║ Seed: {}", record.seed);
    println!("║ Key:  {}", record.private_key_hex);
    println!("║ WIF:  {}", record.wif_compressed);
    println!("╚═══════════════════════════════════════════════════════╝");
    println!("\x1b[0m");
}
