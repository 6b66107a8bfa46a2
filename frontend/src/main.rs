//! Console driver: load a program image, wire up a registered system,
//! tick the clock, and render emitted bytes to stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fabric_core::core::machine::Machine;
use fabric_systems::{image_loader, registry};

#[derive(Parser)]
#[command(name = "fabric", about = "Run a program image on a simulated bus fabric")]
struct Args {
    /// Program image file (little-endian 32-bit words)
    image: PathBuf,

    /// System to run
    #[arg(long, default_value = "hello")]
    system: String,

    /// Give up after this many clock ticks if the system never halts
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(entry) = registry::find(&args.system) else {
        let names: Vec<_> = registry::all().iter().map(|e| e.name).collect();
        eprintln!("Unknown system: {}", args.system);
        eprintln!("Available: {}", names.join(", "));
        return ExitCode::FAILURE;
    };

    let image = match image_loader::load_file(&args.image) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", args.image.display());
            return ExitCode::FAILURE;
        }
    };

    let mut machine = match (entry.create)(&image) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("Failed to build system {}: {e}", args.system);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut halted = false;
    for _ in 0..args.max_ticks {
        let activity = machine.tick();
        if let Some(byte) = activity.emitted
            && out.write_all(&[byte]).is_err()
        {
            break;
        }
        if activity.halted {
            halted = true;
            break;
        }
    }
    let _ = out.flush();

    if !halted {
        eprintln!("Gave up after {} ticks without a halt", args.max_ticks);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
