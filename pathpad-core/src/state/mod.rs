//! Drawing state. Everything here is a plain owned tree reachable from
//! [`LayerSet`] and [`Document`], mutated only through
//! [commands](crate::commands).

pub mod document;
pub mod layer;
pub mod path;

pub use document::{CanvasMode, Document, Extent, ReferenceImage};
pub use layer::{Layer, LayerSet, Rgb, Style};
pub use path::{element::Element, UnitPath};
