//! # chatheart CLI
//!
//! Command-line interface for the chatheart library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatheart::ChatheartError;
use chatheart::cli::Args;
use chatheart::format::{OutputFormat, write_to_format};
use chatheart::parser::ChatParser;

fn main() {
    chatheart::logging::init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatheartError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.layout_config()?;
    let output_path = args.output_path();

    // Print header
    println!("💗 chatheart v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {}", args.format);
    println!("🎨 Style:   {}", config.style);
    println!("🔀 Order:   {}", config.order);
    if let Some(seed) = config.seed {
        println!("🎲 Seed:    {seed}");
    }
    println!();

    // Step 1: Merge and parse
    let parser = ChatParser::new();
    println!("⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let transcript = parser.parse(Path::new(&args.input))?;
    let stats = transcript.stats();
    println!(
        "   Found {} messages in {} entries ({:.2}s)",
        stats.messages,
        stats.entries,
        parse_start.elapsed().as_secs_f64()
    );
    if stats.unmatched > 0 {
        println!("   Skipped {} entries without a sender", stats.unmatched);
    }

    // Step 2: Order, select, lay out and connect
    println!("📐 Laying out...");
    let layout_start = Instant::now();
    let diagram = transcript.layout(&config)?;
    println!(
        "   Placed {} boxes and {} edges ({:.2}s)",
        diagram.records.len(),
        diagram.edges.len(),
        layout_start.elapsed().as_secs_f64()
    );

    // Step 3: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {lib_format}...");
    let write_start = Instant::now();
    write_to_format(&diagram, &output_path, lib_format, &config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();
    info!(output = %output_path, records = diagram.records.len(), "export finished");

    println!();
    println!("✅ Done! Output saved to {output_path}");

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Entries:   {}", stats.entries);
    println!(
        "   Messages:  {} ({:.1}% matched)",
        stats.messages,
        stats.match_ratio()
    );
    println!("   Drawn:     {} boxes", diagram.records.len());
    if let Some(bounds) = diagram.bounds(0.0) {
        println!("   Canvas:    {:.0} x {:.0} px", bounds.width, bounds.height);
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());

    Ok(())
}
