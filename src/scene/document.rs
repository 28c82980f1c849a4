//! Smalle interface naar het scènedocument van de host.

use thiserror::Error;

use super::path::PrimPath;
use crate::data::ColorValue;

/// Fouten die het scènedocument kan opleveren bij een schrijfactie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    /// Het pad voldoet niet aan de padregels van het document.
    #[error("ongeldig prim-pad: `{0}`")]
    InvalidPath(String),
    /// Er bestaat geen prim op dit pad.
    #[error("geen prim gevonden op `{0}`")]
    MissingPrim(PrimPath),
    /// De prim heeft een ander type dan de bewerking verwacht.
    #[error("prim `{path}` is geen {expected}")]
    WrongKind {
        path: PrimPath,
        expected: &'static str,
    },
    /// Een attribuutwaarde werd geweigerd.
    #[error("ongeldige waarde voor `{attribute}` op `{path}`")]
    InvalidAttribute {
        path: PrimPath,
        attribute: &'static str,
    },
}

/// Bewerkingen die de scènebouwer op het document van de host uitvoert.
pub trait SceneDocument {
    /// Maakt een transform-container op `path`, of hergebruikt de bestaande.
    fn define_xform(&mut self, path: &PrimPath) -> Result<(), DocumentError>;

    /// Maakt een kubus met ribbe `size` op `path`.
    fn define_cube(&mut self, path: &PrimPath, size: f64) -> Result<(), DocumentError>;

    fn set_translate(&mut self, path: &PrimPath, translate: [f64; 3]) -> Result<(), DocumentError>;

    fn set_display_color(&mut self, path: &PrimPath, color: ColorValue) -> Result<(), DocumentError>;

    fn has_prim(&self, path: &PrimPath) -> bool;

    /// Verwijdert de prim op `path` met alle afstammelingen. Geeft terug of er
    /// iets verwijderd werd.
    fn remove_prim(&mut self, path: &PrimPath) -> Result<bool, DocumentError>;
}
