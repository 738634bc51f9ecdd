use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use br_core::config::Config;
use br_core::{BrailleEncoder, Font};
use br_glyph::{BrailleDecoder, BrailleFont, BrailleReader};
use br_render::LinePrinter;
use clap::Parser;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let mut config = resolve_config(&cli.config)?;
    cli.apply_overrides(&mut config);
    log::debug!("Configuration effective : {config:?}");

    let encoder = BrailleEncoder;
    let font = BrailleFont::new(&config.font, &encoder);

    match &cli.command {
        cli::Command::Encode { text, .. } => encode(font, &config, &text.join(" ")),
        cli::Command::Decode { input } => decode(&font, &config, input.as_deref()),
    }
}

/// Print `text` through the line printer on stdout.
fn encode(font: BrailleFont, config: &Config, text: &str) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut printer = LinePrinter::new(font, stdout, &config.printer);
    printer.print_str(text).context("Échec d'écriture sur stdout")?;
    printer.flush().context("Échec d'écriture sur stdout")?;
    Ok(())
}

/// Read scanlines and print one text line per Braille line.
fn decode(font: &BrailleFont, config: &Config, input: Option<&Path>) -> Result<()> {
    let source: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let lines = source
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Échec de lecture des scanlines")?;

    let reader =
        BrailleReader::new(BrailleDecoder::new(&BrailleEncoder)).with_cell_width(font.width());
    let text = reader
        .translate_page(&lines, font.height(), font.dot_symbol(), config.printer.spacing)
        .context("Texte Braille illisible")?;

    let mut stdout = io::stdout().lock();
    for line in &text {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Load the config file, defaults when it does not exist.
fn resolve_config(path: &Path) -> Result<Config> {
    if path.exists() {
        br_core::config::load_config(path)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            path.display()
        );
        Ok(Config::default())
    }
}
