//! Synthetic chat export generator for stress testing chatheart.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 50000 big_chat.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Andrea",
    "David",
    "andrea 💖",
    "Marta López",
    "+34 600 123 456",
    "Иван",
    "村上",
    "Dr. Who: The Doctor",
];

const WORDS: &[&str] = &[
    "hola", "qué", "tal", "bien", "mañana", "cena", "te", "quiero", "mucho", "jaja", "vale",
    "¿dónde", "estás?", "llego", "tarde", "😂", "❤️", "🌈", "a", "las", "ocho", "-", "vamos",
    "https://example.com", "<3", "&", "\"ok\"",
];

const SYSTEM_LINES: &[&str] = &[
    "Los mensajes y las llamadas están cifrados de extremo a extremo.",
    "Andrea cambió el asunto del grupo.",
    "David se unió usando el enlace de invitación de este grupo",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(2).map_or("gen_chat.txt", String::as_str);

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let start = Instant::now();

    // Leading lines before the first dated entry are dropped by the merger.
    writeln!(writer, "Chat exportado")?;
    writeln!(writer)?;

    let mut minutes: u32 = 8 * 60;
    let mut day: u32 = 1;
    for i in 0..count {
        minutes += rng.gen_range(0..=30);
        if minutes >= 24 * 60 {
            minutes -= 24 * 60;
            day = day % 28 + 1;
        }
        let date = format!("{}/{}/24", day, rng.gen_range(1..=12));
        let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);
        let separator = if rng.gen_bool(0.8) { " a las " } else { ", " };

        if rng.gen_bool(0.03) {
            let line = SYSTEM_LINES.choose(&mut rng).copied().unwrap_or_default();
            writeln!(writer, "{date}{separator}{time} - {line}")?;
            continue;
        }

        let sender = SENDERS.choose(&mut rng).copied().unwrap_or_default();
        writeln!(writer, "{date}{separator}{time} - {sender}: {}", sentence(&mut rng))?;

        // Continuation lines, sometimes blank.
        while rng.gen_bool(0.1) {
            if rng.gen_bool(0.2) {
                writeln!(writer)?;
            } else {
                writeln!(writer, "{}", sentence(&mut rng))?;
            }
        }

        if (i + 1) % 10_000 == 0 {
            eprint!("\r   Generated {}/{}", i + 1, count);
        }
    }
    writer.flush()?;

    let elapsed = start.elapsed().as_secs_f64();
    let size = std::fs::metadata(output)?.len();
    eprintln!();
    println!("✅ Done in {elapsed:.2}s");
    println!("   File size: {:.2} MB", size as f64 / 1_000_000.0);

    Ok(())
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = if rng.gen_bool(0.05) {
        rng.gen_range(40..120)
    } else {
        rng.gen_range(1..12)
    };
    (0..len)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
