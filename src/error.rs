//! Fouttypes van de laadpijplijn.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scene::DocumentError;

/// Result type voor het laden en visualiseren van een CSV-kolom.
pub type VisualizerResult<T> = Result<T, VisualizerError>;

/// Beschrijft fouten die een laadactie kunnen afbreken.
///
/// Rijen waarvan de cel geen getal is, zijn geen fout: die worden stil
/// overgeslagen door de kolomlezer.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// Het CSV-bestand bestaat niet of kan niet geopend worden.
    #[error("kan CSV-bestand `{}` niet openen: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// De gevraagde kolom ontbreekt in de header.
    #[error("CSV mist de kolom '{column}'")]
    Schema { column: String },
    /// De CSV-stroom zelf is onleesbaar (bv. ongeldige UTF-8).
    #[error("CSV parsefout: {0}")]
    Csv(#[from] csv::Error),
    /// Doorgegeven fout van het scènedocument.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// Ongeldige sessieconfiguratie.
    #[error("ongeldige configuratie: {0}")]
    Config(String),
    /// Er werd geladen nadat de host de sessie had afgesloten.
    #[error("visualizer is afgesloten")]
    Inactive,
}

impl VisualizerError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
