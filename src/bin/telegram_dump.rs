//! Telegram dump utility
//! Decodes raw ERP1 telegrams with a given profile and prints channel values
//! and discovery properties

use enocean_eep::bitwise::{bytes_to_hex, hex_to_bytes};
use enocean_eep::core::Configuration;
use enocean_eep::discovery::DiscoveryProperties;
use enocean_eep::eep::{EepId, ProfileRegistry};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let registry = ProfileRegistry::builtin()?;

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "--list" {
        for descriptor in registry.list() {
            println!(
                "{}  {:<28} {}",
                descriptor.eep, descriptor.thing_type, descriptor.description
            );
        }
        return Ok(());
    }

    if args.len() < 3 {
        eprintln!("Usage: {} <EEP> <hex telegram>...", args[0]);
        eprintln!("       {} --list", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} A5-07-01 A50000A00901825DAB00", args[0]);
        eprintln!(
            "  {} F6-02-01 \"F6 10 01 82 5D AB 30 01 FF FF FF FF 2A 00\"",
            args[0]
        );
        std::process::exit(1);
    }

    let eep: EepId = args[1].parse()?;
    let descriptor = registry.resolve(&eep)?;
    tracing::info!("Profile {}: {}", eep, descriptor.description);

    let config = Configuration::new();

    for (index, text) in args[2..].iter().enumerate() {
        let raw = hex_to_bytes(text)
            .ok_or_else(|| anyhow::anyhow!("Telegram {} is not valid hex: {:?}", index + 1, text))?;

        println!("=== Telegram {} ===", index + 1);
        println!("Raw: {}", bytes_to_hex(&raw));

        let telegram = match registry.parse(&raw, &eep) {
            Ok(telegram) => telegram,
            Err(e) => {
                tracing::warn!("Skipping telegram {}: {}", index + 1, e);
                continue;
            }
        };
        println!("{}", telegram);

        let codec = registry.decode_telegram(&telegram, &eep)?;
        if codec.message().is_teach_in() {
            println!("Teach-in telegram");
        }

        for (channel, value) in codec.decode(&config) {
            println!("  {:<16} {}", channel, value);
        }

        let properties = DiscoveryProperties::from_eep(codec.as_ref());
        println!("{}\n", properties.to_json_pretty()?);
    }

    Ok(())
}
