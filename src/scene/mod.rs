//! Scènedocument, prim-paden en de bouwer van de kubusrij.

pub mod builder;
pub mod document;
pub mod export;
pub mod path;
pub mod stage;

pub use builder::{LayoutOptions, PlacedCube, build_visualization, layout};
pub use document::{DocumentError, SceneDocument};
pub use export::{ExportTracker, PrimExport, SceneDiff, SceneSnapshot};
pub use path::PrimPath;
pub use stage::{Prim, PrimKind, Stage};
