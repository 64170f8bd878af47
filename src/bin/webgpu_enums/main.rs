//! WebGPU enum name CLI.
//!
//! Usage:
//!   webgpu-enums resolve TextureFormat 18      # rgba8unorm
//!   webgpu-enums ordinal StoreOp discard       # 2
//!   webgpu-enums list                          # categories with slot counts
//!   webgpu-enums list CompareFunction          # ordinals of one category
//!   webgpu-enums export --format json -o t.json
//!   webgpu-enums verify library_webgpu_enum_tables.js

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use webgpu_enum_names::config::{ExportConfig, ExportFormat};
use webgpu_enum_names::{format, EnumNameTable, Result};

#[derive(Parser)]
#[command(name = "webgpu-enums")]
#[command(about = "Look up WebGPU enum names by category and ordinal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name at an ordinal (`undefined` for reserved slots)
    Resolve {
        category: String,
        ordinal: u32,
    },

    /// Print the ordinal of a named variant
    Ordinal {
        category: String,
        name: String,
    },

    /// List categories, or the ordinals of one category
    List {
        category: Option<String>,
    },

    /// Write the whole table in the persisted JS layout or as JSON
    Export {
        /// Output format (defaults to the config file setting)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to $WEBGPU_ENUMS_CONFIG or the user config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a persisted JS table against the compiled one
    Verify {
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = EnumNameTable::global();

    let result = match cli.command {
        Commands::Resolve { category, ordinal } => table
            .resolve(&category, ordinal)
            .map(|slot| println!("{slot}")),
        Commands::Ordinal { category, name } => table
            .ordinal_of(&category, &name)
            .map(|ordinal| println!("{ordinal}")),
        Commands::List { category } => list(table, category.as_deref()),
        Commands::Export { format, output, config } => {
            let config = match config {
                Some(path) => ExportConfig::load_from(&path),
                None => ExportConfig::load(),
            };
            export(table, &config, format, output.as_deref())
        }
        Commands::Verify { file } => match verify(table, &file) {
            Ok(0) => Ok(()),
            Ok(count) => {
                eprintln!("{} mismatch(es) in {}", count, file.display());
                std::process::exit(1);
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn list(table: &EnumNameTable, category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => {
            for (ordinal, slot) in table.category(name)?.iter() {
                println!("{:>3} {}", ordinal, slot);
            }
        }
        None => {
            for category in table.categories() {
                println!("{:<30} {}", category.name(), category.len());
            }
        }
    }
    Ok(())
}

fn export(
    table: &EnumNameTable,
    config: &ExportConfig,
    requested: Option<ExportFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = match requested.unwrap_or(config.format) {
        ExportFormat::Js => format::render_js(table, config.indent),
        ExportFormat::Json => format::to_json_string(table)? + "\n",
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Wrote {} categories to {}", table.category_count(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Print every mismatch and return how many there were.
fn verify(table: &EnumNameTable, file: &Path) -> Result<usize> {
    let mismatches = format::verify_file(table, file)?;
    if mismatches.is_empty() {
        println!("{}: OK ({} categories)", file.display(), table.category_count());
    }
    for mismatch in &mismatches {
        println!("{mismatch}");
    }
    Ok(mismatches.len())
}
