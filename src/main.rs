mod core;
mod renderer;
mod ui;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::core::extractor;
use crate::core::font::{self, FontTable};
use crate::renderer::{markdown, terminal};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .coe font ROM to a Markdown character map
    Convert {
        /// Input .coe file
        input: PathBuf,
        /// Output path (defaults to the input with a .md extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of glyph records in the ROM
        #[arg(short, long, default_value_t = font::GLYPH_COUNT)]
        count: usize,
        /// First character index to render
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Last character index to render (inclusive)
        #[arg(short, long, default_value_t = 255)]
        end: usize,
    },
    /// Preview a single character in the terminal
    Show {
        /// Input .coe file
        input: PathBuf,
        /// Character index to display
        index: usize,
        #[arg(short, long, default_value_t = font::GLYPH_COUNT)]
        count: usize,
    },
    /// Print font file statistics as JSON
    Info {
        /// Input .coe file
        input: PathBuf,
        #[arg(short, long, default_value_t = font::GLYPH_COUNT)]
        count: usize,
    },
    /// Browse the characters interactively
    Interactive {
        /// Input .coe file
        input: PathBuf,
        #[arg(short, long, default_value_t = font::GLYPH_COUNT)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert { input, output, count, start, end } => {
            let font = load_font(input, *count)?;
            println!("Font loaded successfully!");
            println!("Total characters: {}", font.len());
            println!("Generating Markdown file...");

            let document = markdown::render_document(&font, *start, *end);
            let output = output.clone().unwrap_or_else(|| derive_output_path(input));
            fs::write(&output, document)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Markdown file '{}' generated successfully!", output.display());
        }
        Commands::Show { input, index, count } => {
            let font = load_font(input, *count)?;
            terminal::print_glyph(&font, *index);
        }
        Commands::Info { input, count } => {
            let font = load_font(input, *count)?;
            println!("{}", serde_json::to_string_pretty(&font.info())?);
        }
        Commands::Interactive { input, count } => {
            let font = load_font(input, *count)?;
            ui::menu::run_menu(&font)?;
        }
    }

    Ok(())
}

fn load_font(input: &Path, count: usize) -> Result<FontTable> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let bytes = extractor::extract(&source)?;
    Ok(FontTable::new(bytes, count))
}

/// Replace a trailing .coe extension with .md, or append .md otherwise.
fn derive_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some("coe") => input.with_extension("md"),
        _ => {
            let mut name = input.as_os_str().to_os_string();
            name.push(".md");
            PathBuf::from(name)
        }
    }
}
