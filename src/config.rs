//! Sessieconfiguratie van de visualizer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_COLUMN;
use crate::error::{VisualizerError, VisualizerResult};
use crate::scene::LayoutOptions;
use crate::scene::builder::{DEFAULT_GAP, DEFAULT_ROOT, DEFAULT_SIZE};

/// Meegeleverd voorbeeldbestand, relatief aan de installatiemap.
pub const SAMPLE_CSV: &str = "data/sample_results.csv";

/// Instellingen die de host aan een sessie meegeeft. Ontbrekende velden
/// krijgen hun standaardwaarde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub csv_path: String,
    pub column: String,
    pub size: f64,
    pub gap: f64,
    pub root_path: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            csv_path: SAMPLE_CSV.to_owned(),
            column: DEFAULT_COLUMN.to_owned(),
            size: DEFAULT_SIZE,
            gap: DEFAULT_GAP,
            root_path: DEFAULT_ROOT.to_owned(),
        }
    }
}

impl VisualizerConfig {
    /// Standaardconfiguratie met het voorbeeldbestand onder `install_root`.
    #[must_use]
    pub fn for_install_root(install_root: impl AsRef<Path>) -> Self {
        Self {
            csv_path: default_csv_path(install_root),
            ..Self::default()
        }
    }

    /// Controleert de instellingen en levert de bijbehorende layout op.
    pub fn layout(&self) -> VisualizerResult<LayoutOptions> {
        if self.column.is_empty() {
            return Err(VisualizerError::Config("kolomnaam mag niet leeg zijn".to_owned()));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(VisualizerError::Config(format!(
                "kubusgrootte moet een positief eindig getal zijn, kreeg {}",
                self.size
            )));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(VisualizerError::Config(format!(
                "tussenruimte moet een niet-negatief eindig getal zijn, kreeg {}",
                self.gap
            )));
        }
        Ok(LayoutOptions::new(&self.root_path, self.size, self.gap)?)
    }
}

/// Pad naar het meegeleverde voorbeeldbestand onder `install_root`.
#[must_use]
pub fn default_csv_path(install_root: impl AsRef<Path>) -> String {
    install_root
        .as_ref()
        .join(SAMPLE_CSV)
        .to_string_lossy()
        .into_owned()
}
