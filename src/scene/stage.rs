//! In-memory scènedocument met prims in definitievolgorde.

use std::collections::HashMap;

use super::document::{DocumentError, SceneDocument};
use super::path::PrimPath;
use crate::data::ColorValue;

/// Type van een prim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimKind {
    /// Impliciet aangemaakte voorouder zonder type.
    Untyped,
    Xform,
    Cube { size: f64 },
}

impl PrimKind {
    fn is_xformable(self) -> bool {
        matches!(self, Self::Xform | Self::Cube { .. })
    }

    fn is_gprim(self) -> bool {
        matches!(self, Self::Cube { .. })
    }
}

/// Eén prim met de attributen die de visualizer schrijft.
#[derive(Debug, Clone, PartialEq)]
pub struct Prim {
    pub path: PrimPath,
    pub kind: PrimKind,
    pub translate: Option<[f64; 3]>,
    pub display_color: Option<ColorValue>,
}

impl Prim {
    fn new(path: PrimPath, kind: PrimKind) -> Self {
        Self {
            path,
            kind,
            translate: None,
            display_color: None,
        }
    }
}

/// Stage container met index voor snelle lookups op pad.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    prims: Vec<Prim>,
    index: HashMap<PrimPath, usize>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prims(&self) -> &[Prim] {
        &self.prims
    }

    #[must_use]
    pub fn prim(&self, path: &PrimPath) -> Option<&Prim> {
        self.index.get(path).map(|&idx| &self.prims[idx])
    }

    /// Directe kinderen van `path`, in definitievolgorde.
    pub fn children<'a>(&'a self, path: &'a PrimPath) -> impl Iterator<Item = &'a Prim> + 'a {
        self.prims
            .iter()
            .filter(move |prim| prim.path.parent().as_ref() == Some(path))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    fn define(&mut self, path: &PrimPath, kind: PrimKind) {
        let mut ancestors = Vec::new();
        let mut current = path.parent();
        while let Some(ancestor) = current {
            if self.index.contains_key(&ancestor) {
                break;
            }
            current = ancestor.parent();
            ancestors.push(ancestor);
        }
        for ancestor in ancestors.into_iter().rev() {
            self.push(Prim::new(ancestor, PrimKind::Untyped));
        }

        match self.index.get(path) {
            Some(&idx) => self.prims[idx].kind = kind,
            None => self.push(Prim::new(path.clone(), kind)),
        }
    }

    fn push(&mut self, prim: Prim) {
        self.index.insert(prim.path.clone(), self.prims.len());
        self.prims.push(prim);
    }

    fn prim_mut(&mut self, path: &PrimPath) -> Result<&mut Prim, DocumentError> {
        match self.index.get(path) {
            Some(&idx) => Ok(&mut self.prims[idx]),
            None => Err(DocumentError::MissingPrim(path.clone())),
        }
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .prims
            .iter()
            .enumerate()
            .map(|(idx, prim)| (prim.path.clone(), idx))
            .collect();
    }
}

impl SceneDocument for Stage {
    fn define_xform(&mut self, path: &PrimPath) -> Result<(), DocumentError> {
        self.define(path, PrimKind::Xform);
        Ok(())
    }

    fn define_cube(&mut self, path: &PrimPath, size: f64) -> Result<(), DocumentError> {
        if !size.is_finite() {
            return Err(DocumentError::InvalidAttribute {
                path: path.clone(),
                attribute: "size",
            });
        }
        self.define(path, PrimKind::Cube { size });
        Ok(())
    }

    fn set_translate(&mut self, path: &PrimPath, translate: [f64; 3]) -> Result<(), DocumentError> {
        let prim = self.prim_mut(path)?;
        if !prim.kind.is_xformable() {
            return Err(DocumentError::WrongKind {
                path: path.clone(),
                expected: "transformeerbare prim",
            });
        }
        if translate.iter().any(|c| !c.is_finite()) {
            return Err(DocumentError::InvalidAttribute {
                path: path.clone(),
                attribute: "xformOp:translate",
            });
        }
        prim.translate = Some(translate);
        Ok(())
    }

    fn set_display_color(&mut self, path: &PrimPath, color: ColorValue) -> Result<(), DocumentError> {
        let prim = self.prim_mut(path)?;
        if !prim.kind.is_gprim() {
            return Err(DocumentError::WrongKind {
                path: path.clone(),
                expected: "geometrische prim",
            });
        }
        if color.to_array().iter().any(|c| !c.is_finite()) {
            return Err(DocumentError::InvalidAttribute {
                path: path.clone(),
                attribute: "primvars:displayColor",
            });
        }
        prim.display_color = Some(color);
        Ok(())
    }

    fn has_prim(&self, path: &PrimPath) -> bool {
        self.index.contains_key(path)
    }

    fn remove_prim(&mut self, path: &PrimPath) -> Result<bool, DocumentError> {
        if !self.has_prim(path) {
            return Ok(false);
        }
        self.prims.retain(|prim| !prim.path.has_prefix(path));
        self.rebuild_index();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimKind, Stage};
    use crate::data::ColorValue;
    use crate::scene::document::{DocumentError, SceneDocument};
    use crate::scene::path::PrimPath;

    fn path(p: &str) -> PrimPath {
        PrimPath::new(p).expect("geldig pad")
    }

    #[test]
    fn define_creates_untyped_ancestors() {
        let mut stage = Stage::new();
        stage.define_cube(&path("/World/Vis/Cube_0"), 1.0).unwrap();

        assert_eq!(stage.len(), 3);
        assert_eq!(stage.prim(&path("/World")).unwrap().kind, PrimKind::Untyped);
        assert_eq!(stage.prim(&path("/World/Vis")).unwrap().kind, PrimKind::Untyped);
        assert_eq!(
            stage.prim(&path("/World/Vis/Cube_0")).unwrap().kind,
            PrimKind::Cube { size: 1.0 }
        );
    }

    #[test]
    fn define_xform_reuses_existing_prim() {
        let mut stage = Stage::new();
        stage.define_cube(&path("/World/Vis/Cube_0"), 1.0).unwrap();
        stage.define_xform(&path("/World/Vis")).unwrap();
        stage.define_xform(&path("/World/Vis")).unwrap();

        assert_eq!(stage.len(), 3);
        assert_eq!(stage.prim(&path("/World/Vis")).unwrap().kind, PrimKind::Xform);
    }

    #[test]
    fn remove_is_recursive_and_keeps_siblings() {
        let mut stage = Stage::new();
        stage.define_cube(&path("/World/Vis/Cube_0"), 1.0).unwrap();
        stage.define_cube(&path("/World/Vis/Cube_1"), 1.0).unwrap();
        stage.define_cube(&path("/World/Visual"), 2.0).unwrap();

        assert!(stage.remove_prim(&path("/World/Vis")).unwrap());
        assert!(!stage.has_prim(&path("/World/Vis/Cube_1")));
        assert!(stage.has_prim(&path("/World/Visual")));
        assert!(stage.has_prim(&path("/World")));
        assert!(!stage.remove_prim(&path("/World/Vis")).unwrap());

        let world = path("/World");
        let children: Vec<_> = stage.children(&world).map(|p| p.path.as_str()).collect();
        assert_eq!(children, vec!["/World/Visual"]);
    }

    #[test]
    fn attribute_writes_require_existing_prim() {
        let mut stage = Stage::new();
        let cube = path("/World/Cube_0");
        let err = stage.set_translate(&cube, [0.0; 3]).unwrap_err();
        assert_eq!(err, DocumentError::MissingPrim(cube.clone()));

        stage.define_cube(&cube, 1.0).unwrap();
        stage.set_translate(&cube, [1.0, 0.0, 0.0]).unwrap();
        stage.set_display_color(&cube, ColorValue::RED).unwrap();

        let prim = stage.prim(&cube).unwrap();
        assert_eq!(prim.translate, Some([1.0, 0.0, 0.0]));
        assert_eq!(prim.display_color, Some(ColorValue::RED));
    }

    #[test]
    fn display_color_needs_geometry() {
        let mut stage = Stage::new();
        stage.define_xform(&path("/World/Vis")).unwrap();
        let err = stage
            .set_display_color(&path("/World/Vis"), ColorValue::GREEN)
            .unwrap_err();
        assert!(matches!(err, DocumentError::WrongKind { .. }));
        assert!(matches!(
            stage.set_translate(&path("/World"), [0.0; 3]),
            Err(DocumentError::WrongKind { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_attribute_values() {
        let mut stage = Stage::new();
        let cube = path("/Cube_0");
        assert!(matches!(
            stage.define_cube(&cube, f64::NAN),
            Err(DocumentError::InvalidAttribute { attribute: "size", .. })
        ));
        stage.define_cube(&cube, 1.0).unwrap();
        assert!(stage.set_translate(&cube, [f64::INFINITY, 0.0, 0.0]).is_err());
    }
}
