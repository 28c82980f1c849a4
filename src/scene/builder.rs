//! Plaatst een rij gekleurde kubussen in het scènedocument.

use super::document::{DocumentError, SceneDocument};
use super::path::PrimPath;
use crate::data::{ColorValue, color_from_unit, normalize};

/// Standaard container waaronder de kubussen komen.
pub const DEFAULT_ROOT: &str = "/World/Vis";
pub const DEFAULT_SIZE: f64 = 1.0;
pub const DEFAULT_GAP: f64 = 0.2;

/// Afmetingen en plaats van de kubusrij.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub root: PrimPath,
    pub size: f64,
    pub gap: f64,
}

impl LayoutOptions {
    pub fn new(root: &str, size: f64, gap: f64) -> Result<Self, DocumentError> {
        Ok(Self {
            root: PrimPath::new(root)?,
            size,
            gap,
        })
    }

    /// Afstand tussen de middelpunten van twee opeenvolgende kubussen.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.size + self.gap
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            root: PrimPath(DEFAULT_ROOT.to_owned()),
            size: DEFAULT_SIZE,
            gap: DEFAULT_GAP,
        }
    }
}

/// Positie en kleur van één kubus, vóór hij in het document geschreven wordt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCube {
    pub index: usize,
    pub position: [f64; 3],
    pub color: ColorValue,
}

/// Berekent positie en kleur per waarde, in invoervolgorde langs de x-as.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout(values: &[f64], options: &LayoutOptions) -> Vec<PlacedCube> {
    let pitch = options.pitch();
    normalize(values)
        .into_iter()
        .enumerate()
        .map(|(index, t)| PlacedCube {
            index,
            position: [index as f64 * pitch, 0.0, 0.0],
            color: color_from_unit(t),
        })
        .collect()
}

/// Pad van kubus `index` onder de container.
pub fn cube_path(root: &PrimPath, index: usize) -> Result<PrimPath, DocumentError> {
    root.child(&format!("Cube_{index}"))
}

/// Vervangt de inhoud van `options.root` door één kubus per waarde.
///
/// Bestaande inhoud onder de container wordt eerst volledig verwijderd, zodat
/// herhaald aanroepen niets opstapelt. Fouten van het document worden
/// ongewijzigd doorgegeven.
pub fn build_visualization<D>(
    document: &mut D,
    values: &[f64],
    options: &LayoutOptions,
) -> Result<(), DocumentError>
where
    D: SceneDocument + ?Sized,
{
    if document.has_prim(&options.root) {
        log::debug!("bestaande visualisatie onder {} verwijderen", options.root);
        document.remove_prim(&options.root)?;
    }

    document.define_xform(&options.root)?;

    for cube in layout(values, options) {
        let path = cube_path(&options.root, cube.index)?;
        document.define_cube(&path, options.size)?;
        document.set_translate(&path, cube.position)?;
        document.set_display_color(&path, cube.color)?;
    }

    log::debug!("{} kubussen geplaatst onder {}", values.len(), options.root);
    Ok(())
}
