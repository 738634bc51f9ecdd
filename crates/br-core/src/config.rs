use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codec::{CELL_COLUMNS, CELL_ROWS};

/// Configuration complète : police et imprimante.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use br_core::config::Config;
/// let config = Config::default();
/// assert_eq!(config.font.height, 3);
/// assert_eq!(config.printer.line_width, 20);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Construction parameters of the font.
    pub font: FontConfig,
    /// Line printer parameters.
    pub printer: PrinterConfig,
}

/// Paramètres de construction de la police.
///
/// # Example
/// ```
/// use br_core::config::FontConfig;
/// let font = FontConfig { height: 1, width: 0, ..FontConfig::default() }.clamped();
/// assert_eq!((font.height, font.width), (3, 2));
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FontConfig {
    /// Rows of every bitmap (≥ 3).
    pub height: usize,
    /// Columns of every bitmap (≥ 2).
    pub width: usize,
    /// Symbol of a raised dot.
    pub dot_symbol: char,
    /// Symbol of a flat dot position.
    pub space_symbol: char,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            height: CELL_ROWS,
            width: CELL_COLUMNS,
            dot_symbol: 'o',
            space_symbol: '.',
        }
    }
}

impl FontConfig {
    /// Clamp height to ≥ 3 and width to ≥ 2, each on its own field.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        if self.width < CELL_COLUMNS {
            log::warn!(
                "Largeur invalide ({}) : largeur minimale {CELL_COLUMNS} appliquée",
                self.width
            );
            self.width = CELL_COLUMNS;
        }
        if self.height < CELL_ROWS {
            log::warn!(
                "Hauteur invalide ({}) : hauteur minimale {CELL_ROWS} appliquée",
                self.height
            );
            self.height = CELL_ROWS;
        }
        self
    }
}

/// Paramètres de l'imprimante de lignes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Cells per printed line before an automatic flush.
    pub line_width: usize,
    /// Literal spaces between adjacent cells.
    pub spacing: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            line_width: 20,
            spacing: 1,
        }
    }
}

impl Config {
    /// Clamp all fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.font = self.font.clone().clamped();
        self.printer.line_width = self.printer.line_width.max(1);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    font: Option<FontSection>,
    printer: Option<PrinterSection>,
}

/// Font section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct FontSection {
    height: Option<usize>,
    width: Option<usize>,
    dot_symbol: Option<char>,
    space_symbol: Option<char>,
}

/// Printer section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct PrinterSection {
    line_width: Option<usize>,
    spacing: Option<usize>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use br_core::config::parse_config;
/// let config = parse_config("[font]\ndot_symbol = '#'\n").unwrap();
/// assert_eq!(config.font.dot_symbol, '#');
/// assert_eq!(config.font.space_symbol, '.');
/// ```
pub fn parse_config(content: &str) -> Result<Config> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = Config::default();

    if let Some(f) = file.font {
        if let Some(v) = f.height {
            config.font.height = v;
        }
        if let Some(v) = f.width {
            config.font.width = v;
        }
        if let Some(v) = f.dot_symbol {
            config.font.dot_symbol = v;
        }
        if let Some(v) = f.space_symbol {
            config.font.space_symbol = v;
        }
    }

    if let Some(p) = file.printer {
        if let Some(v) = p.line_width {
            config.printer.line_width = v;
        }
        if let Some(v) = p.spacing {
            config.printer.spacing = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("braille.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Configuration invalide dans {}", path.display()))
}
