//! rngtool: offline companion for the subcycle-rng crate.
//! Rebuilds and verifies the embedded jump tables, and dumps streams and
//! snapshots for debugging.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use subcycle_rng::rng::jump_table::{self, JumpTable, TABLE_LEN};
use subcycle_rng::rng::transition::Recurrence;
use subcycle_rng::{AnyGenerator, Cake32, FamilyKind, Mover32, SubcycleFamily};

#[derive(Parser, Debug)]
#[command(author, version, about = "Jump-table builder and stream inspector", long_about = None)]
struct Args {
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild both jump tables of a subcycle family and print them as Rust
    Tables {
        #[arg(long)]
        family: FamilyKind,

        /// Start of table A (defaults to the embedded entry 0)
        #[arg(long, value_parser = parse_u32)]
        start_a: Option<u32>,

        /// Start of table B (defaults to the embedded entry 0)
        #[arg(long, value_parser = parse_u32)]
        start_b: Option<u32>,
    },
    /// Check every embedded table against direct iteration
    Verify,
    /// Print raw outputs as fixed-width hex
    Sample {
        #[arg(long)]
        family: FamilyKind,

        #[arg(long, value_parser = parse_u64)]
        seed: u64,

        #[arg(long, default_value_t = 8)]
        count: usize,

        /// Print next_u64 instead of next_u32
        #[arg(long)]
        wide: bool,
    },
    /// Advance a generator and print its JSON snapshot
    Snapshot {
        #[arg(long)]
        family: FamilyKind,

        #[arg(long, value_parser = parse_u64)]
        seed: u64,

        #[arg(long, default_value_t = 0)]
        skip: u64,
    },
}

fn parse_u64(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid number {:?}: {}", s, e))
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let value = parse_u64(s)?;
    u32::try_from(value).map_err(|_| format!("{} does not fit in 32 bits", s))
}

fn format_table(name: &str, entries: &[u32; TABLE_LEN]) -> String {
    let mut out = format!("const {}: [u32; TABLE_LEN] = [\n", name);
    for row in entries.chunks(8) {
        let cells: Vec<String> = row.iter().map(|e| format!("0x{:08X},", e)).collect();
        out.push_str("    ");
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

fn print_tables<F: SubcycleFamily>(start_a: Option<u32>, start_b: Option<u32>) {
    let prefix = F::NAME.to_uppercase();
    let a = jump_table::build::<F::HalfA>(start_a.unwrap_or(F::TABLE_A.entry(0)));
    let b = jump_table::build::<F::HalfB>(start_b.unwrap_or(F::TABLE_B.entry(0)));
    info!("Built {} tables ({} entries each)", F::NAME, TABLE_LEN);
    println!("{}", format_table(&format!("{}_A_ENTRIES", prefix), &a));
    println!("{}", format_table(&format!("{}_B_ENTRIES", prefix), &b));
}

fn verify_table<R: Recurrence>(name: &str, table: &JumpTable) -> bool {
    match table.first_mismatch::<R>() {
        None => {
            info!("{}: all {} entries consistent", name, TABLE_LEN);
            true
        }
        Some(index) => {
            log::error!(
                "{}: entry {} does not advance to entry {}",
                name,
                index,
                index + 1
            );
            false
        }
    }
}

fn verify_family<F: SubcycleFamily>() -> bool {
    let a = verify_table::<F::HalfA>(&format!("{} A", F::NAME), F::TABLE_A);
    let b = verify_table::<F::HalfB>(&format!("{} B", F::NAME), F::TABLE_B);
    a && b
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).parse_default_env().init();
    debug!("{:?}", args);

    match args.command {
        Command::Tables { family, start_a, start_b } => match family {
            FamilyKind::Mover32 => print_tables::<Mover32>(start_a, start_b),
            FamilyKind::Cake32 => print_tables::<Cake32>(start_a, start_b),
            other => bail!("{} has no jump tables (expected mover32 or cake32)", other),
        },
        Command::Verify => {
            let mover = verify_family::<Mover32>();
            let cake = verify_family::<Cake32>();
            if !(mover && cake) {
                bail!("embedded jump tables are stale");
            }
            info!("All jump tables verified");
        }
        Command::Sample { family, seed, count, wide } => {
            let mut rng = AnyGenerator::new(family, seed);
            info!("Sampling {} outputs from {}", count, rng);
            for _ in 0..count {
                if wide {
                    println!("0x{:016X}", rng.next_u64());
                } else {
                    println!("0x{:08X}", rng.next_u32());
                }
            }
        }
        Command::Snapshot { family, seed, skip } => {
            let mut rng = AnyGenerator::new(family, seed);
            rng.skip(skip);
            info!("Snapshot of {} after {} steps", family, skip);
            let json = rng
                .snapshot()
                .to_json_pretty()
                .context("Failed to serialize snapshot")?;
            println!("{}", json);
        }
    }

    Ok(())
}
