use std::path::PathBuf;

use br_core::config::Config;
use clap::{Parser, Subcommand};

/// braillec — Braille six points ↔ texte ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : braille.toml.
    #[arg(short, long, default_value = "braille.toml", global = true)]
    pub config: PathBuf,

    /// Symbole d'un point levé.
    #[arg(long, global = true)]
    pub dot: Option<char>,

    /// Symbole d'une position vide.
    #[arg(long, global = true)]
    pub space: Option<char>,

    /// Espaces entre deux cellules.
    #[arg(long, global = true)]
    pub spacing: Option<usize>,

    /// Hauteur des bitmaps (min 3).
    #[arg(long, global = true)]
    pub height: Option<usize>,

    /// Largeur des bitmaps (min 2).
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Imprimer du texte en Braille sur la sortie standard.
    Encode {
        /// Texte à encoder (les mots sont joints par un espace).
        #[arg(required = true)]
        text: Vec<String>,

        /// Cellules par ligne imprimée.
        #[arg(long)]
        line_width: Option<usize>,
    },
    /// Relire des scanlines Braille et afficher le texte.
    Decode {
        /// Fichier de scanlines. Entrée standard si absent.
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Apply the command line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(v) = self.dot {
            config.font.dot_symbol = v;
        }
        if let Some(v) = self.space {
            config.font.space_symbol = v;
        }
        if let Some(v) = self.spacing {
            config.printer.spacing = v;
        }
        if let Some(v) = self.height {
            config.font.height = v;
        }
        if let Some(v) = self.width {
            config.font.width = v;
        }
        if let Command::Encode {
            line_width: Some(v),
            ..
        } = &self.command
        {
            config.printer.line_width = *v;
        }
        config.clamp_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_are_clamped() {
        let cli = Cli::parse_from(["braillec", "encode", "hi", "--height", "1", "--dot", "#"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.font.height, 3);
        assert_eq!(config.font.dot_symbol, '#');
        assert_eq!(config.font.width, 2);
    }

    #[test]
    fn decode_takes_optional_input() {
        let cli = Cli::parse_from(["braillec", "decode", "--spacing", "2"]);
        assert!(matches!(cli.command, Command::Decode { input: None }));
        assert_eq!(cli.spacing, Some(2));
    }

    #[test]
    fn line_width_override_only_for_encode() {
        let cli = Cli::parse_from(["braillec", "encode", "abc", "--line-width", "7"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.printer.line_width, 7);
    }
}
