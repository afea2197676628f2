//! Keyspace Directory CLI
//!
//! Usage:
//!   keyspace_directory page 1            # First 128 keys
//!   keyspace_directory page 9001         # Any page, arbitrary precision
//!   keyspace_directory lookup 5HpHag...  # Page listing a WIF key
//!   keyspace_directory info              # Domain bound and page count

use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use log::debug;

use keyspace_directory::render::{render_lookup, render_page};
use keyspace_directory::{Command, Config, KeyDeriver, Keyspace};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count())
        .build_global()
    {
        eprintln!("Failed to size thread pool: {}", e);
        process::exit(1);
    }
    debug!(
        "network {}, {} derivation threads",
        config.network,
        config.thread_count()
    );

    let deriver = KeyDeriver::new(Keyspace::secp256k1(), config.network);

    if let Err(e) = run(&config.command, &deriver) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: &Command, deriver: &KeyDeriver) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Page { page } => {
            let number = deriver.keyspace().parse_page(page)?;
            let page = deriver.derive_page(&number)?;
            render_page(&mut out, &page)?;
        }
        Command::Lookup { private_key } => {
            let lookup = deriver.lookup(private_key)?;
            render_lookup(&mut out, &lookup)?;
        }
        Command::Info => print_info(&mut out, deriver.keyspace())?,
    }

    out.flush()?;
    Ok(())
}

fn print_info<W: Write>(out: &mut W, keyspace: &Keyspace) -> io::Result<()> {
    writeln!(out, "Keyspace Directory")?;
    writeln!(out, "==================")?;
    writeln!(out, "Domain bound: {}", keyspace.domain_bound())?;
    writeln!(
        out,
        "              0x{}",
        hex::encode(keyspace.domain_bound().to_bytes_be())
    )?;
    writeln!(out, "Page size:    {}", keyspace.page_size())?;
    writeln!(out, "Page count:   {}", keyspace.page_count())
}
