//! Langlevende sessie van de host: configuratie plus de laadactie met haar
//! foutgrens.

use crate::config::VisualizerConfig;
use crate::data::{read_column, read_column_from_str};
use crate::error::{VisualizerError, VisualizerResult};
use crate::scene::{SceneDocument, build_visualization};

pub(crate) const LOG_PREFIX: &str = "[CAE Visualizer]";

/// Sessie die de host bij het opstarten aanmaakt en bij elke laadactie
/// doorgeeft.
#[derive(Debug, Clone)]
pub struct Session {
    config: VisualizerConfig,
    active: bool,
}

impl Session {
    #[must_use]
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            config,
            active: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Vervangt de configuratie, maar alleen als ze geldig is.
    pub fn set_config(&mut self, config: VisualizerConfig) -> VisualizerResult<()> {
        config.layout()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn csv_path(&self) -> &str {
        &self.config.csv_path
    }

    pub fn set_csv_path(&mut self, path: impl Into<String>) {
        self.config.csv_path = path.into();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    /// Leest de ingestelde CSV-kolom en bouwt de visualisatie opnieuw op.
    /// Geeft het aantal geladen waarden terug.
    pub fn load_into<D>(&self, document: &mut D) -> VisualizerResult<usize>
    where
        D: SceneDocument + ?Sized,
    {
        self.ensure_active()?;
        let layout = self.config.layout()?;
        let values = read_column(&self.config.csv_path, &self.config.column)?;
        build_visualization(document, &values, &layout)?;
        Ok(values.len())
    }

    /// Zoals [`Session::load_into`], met CSV-tekst die de host al ingelezen heeft.
    pub fn load_text_into<D>(&self, text: &str, document: &mut D) -> VisualizerResult<usize>
    where
        D: SceneDocument + ?Sized,
    {
        self.ensure_active()?;
        let layout = self.config.layout()?;
        let values = read_column_from_str(text, &self.config.column)?;
        build_visualization(document, &values, &layout)?;
        Ok(values.len())
    }

    /// Foutgrens van de laadknop: elke fout wordt gelogd, niets propageert.
    pub fn on_load<D>(&self, document: &mut D) -> bool
    where
        D: SceneDocument + ?Sized,
    {
        report(self.load_into(document), &self.config.csv_path)
    }

    /// Foutgrens voor laden vanuit tekst; `source` verschijnt in de log.
    pub fn on_load_text<D>(&self, text: &str, source: &str, document: &mut D) -> bool
    where
        D: SceneDocument + ?Sized,
    {
        report(self.load_text_into(text, document), source)
    }

    fn ensure_active(&self) -> VisualizerResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(VisualizerError::Inactive)
        }
    }
}

fn report(result: VisualizerResult<usize>, source: &str) -> bool {
    match result {
        Ok(count) => {
            log::info!("{LOG_PREFIX} Loaded {count} values from {source}");
            true
        }
        Err(err) => {
            log::error!("{LOG_PREFIX} Error: {err}");
            false
        }
    }
}
