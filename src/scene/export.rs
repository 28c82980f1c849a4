//! Export van de stage naar de host-viewer: volledige snapshot of een diff
//! ten opzichte van de vorige export.

use std::collections::BTreeMap;

use serde::Serialize;

use super::path::PrimPath;
use super::stage::{Prim, PrimKind, Stage};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum PrimExport {
    Untyped {
        path: PrimPath,
    },
    Xform {
        path: PrimPath,
        #[serde(skip_serializing_if = "Option::is_none")]
        translate: Option<[f64; 3]>,
    },
    Cube {
        path: PrimPath,
        size: f64,
        translate: [f64; 3],
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<[f64; 3]>,
    },
}

impl PrimExport {
    #[must_use]
    pub fn path(&self) -> &PrimPath {
        match self {
            Self::Untyped { path } | Self::Xform { path, .. } | Self::Cube { path, .. } => path,
        }
    }
}

impl From<&Prim> for PrimExport {
    fn from(prim: &Prim) -> Self {
        let path = prim.path.clone();
        match prim.kind {
            PrimKind::Untyped => Self::Untyped { path },
            PrimKind::Xform => Self::Xform {
                path,
                translate: prim.translate,
            },
            PrimKind::Cube { size } => Self::Cube {
                path,
                size,
                translate: prim.translate.unwrap_or_default(),
                color: prim.display_color.map(|color| color.to_array()),
            },
        }
    }
}

/// Alle prims van de stage in definitievolgorde.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub prims: Vec<PrimExport>,
}

impl From<&Stage> for SceneSnapshot {
    fn from(stage: &Stage) -> Self {
        Self {
            prims: stage.prims().iter().map(PrimExport::from).collect(),
        }
    }
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct SceneDiff {
    pub added: Vec<PrimExport>,
    pub updated: Vec<PrimExport>,
    pub removed: Vec<PrimPath>,
}

impl SceneDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Onthoudt wat de host al ontvangen heeft, zodat alleen wijzigingen
/// doorgestuurd worden.
#[derive(Debug, Default, Clone)]
pub struct ExportTracker {
    exported: BTreeMap<PrimPath, PrimExport>,
}

impl ExportTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergelijkt de stage met de vorige export en onthoudt de nieuwe stand.
    pub fn diff(&mut self, stage: &Stage) -> SceneDiff {
        let mut diff = SceneDiff::default();
        let mut next = BTreeMap::new();

        for prim in stage.prims() {
            let item = PrimExport::from(prim);
            match self.exported.get(&prim.path) {
                Some(existing) if *existing == item => {}
                Some(_) => diff.updated.push(item.clone()),
                None => diff.added.push(item.clone()),
            }
            next.insert(prim.path.clone(), item);
        }

        diff.removed = self
            .exported
            .keys()
            .filter(|path| !next.contains_key(*path))
            .cloned()
            .collect();

        self.exported = next;
        diff
    }

    pub fn reset(&mut self) {
        self.exported.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportTracker, PrimExport, SceneSnapshot};
    use crate::scene::builder::{LayoutOptions, build_visualization};
    use crate::scene::stage::Stage;

    #[test]
    fn snapshot_lists_prims_in_definition_order() {
        let mut stage = Stage::new();
        build_visualization(&mut stage, &[0.0, 10.0], &LayoutOptions::default()).unwrap();

        let snapshot = SceneSnapshot::from(&stage);
        let paths: Vec<_> = snapshot.prims.iter().map(|p| p.path().as_str()).collect();
        assert_eq!(paths, vec!["/World", "/World/Vis", "/World/Vis/Cube_0", "/World/Vis/Cube_1"]);

        match &snapshot.prims[3] {
            PrimExport::Cube { size, translate, color, .. } => {
                assert_eq!(*size, 1.0);
                assert!((translate[0] - 1.2).abs() < 1e-9);
                assert_eq!(*color, Some([1.0, 0.0, 0.0]));
            }
            other => panic!("verwacht Cube, kreeg {other:?}"),
        }
    }

    #[test]
    fn diff_reports_added_updated_and_removed() {
        let mut stage = Stage::new();
        let options = LayoutOptions::default();
        let mut tracker = ExportTracker::new();

        build_visualization(&mut stage, &[0.0, 5.0, 10.0], &options).unwrap();
        let first = tracker.diff(&stage);
        assert_eq!(first.added.len(), 5);
        assert!(first.updated.is_empty() && first.removed.is_empty());

        assert!(tracker.diff(&stage).is_empty());

        build_visualization(&mut stage, &[10.0, 0.0], &options).unwrap();
        let second = tracker.diff(&stage);
        assert!(second.added.is_empty());
        let updated: Vec<_> = second.updated.iter().map(|p| p.path().as_str()).collect();
        assert_eq!(updated, vec!["/World/Vis/Cube_0", "/World/Vis/Cube_1"]);
        let removed: Vec<_> = second.removed.iter().map(|p| p.as_str()).collect();
        assert_eq!(removed, vec!["/World/Vis/Cube_2"]);
    }

    #[test]
    fn reset_makes_everything_new_again() {
        let mut stage = Stage::new();
        build_visualization(&mut stage, &[1.0], &LayoutOptions::default()).unwrap();
        let mut tracker = ExportTracker::new();
        let _ = tracker.diff(&stage);
        tracker.reset();
        assert_eq!(tracker.diff(&stage).added.len(), 3);
    }
}
