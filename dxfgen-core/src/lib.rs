//! dxfgen-core - Core library for emitting 2D vector drawings as ASCII DXF.
//!
//! This library writes DXF files in the legacy AC1009 (R11/R12) revision
//! from plain geometric parameters, without pulling in a full CAD toolkit.
//! A [`Document`] session brackets a well-formed file with the fixed
//! header and footer; per-entity operations translate points, lines,
//! circles, arcs, polylines and ellipses into the format's group-code
//! token stream.
//!
//! # Example
//!
//! ```no_run
//! use dxfgen_core::Document;
//!
//! # fn main() -> dxfgen_core::Result<()> {
//! let mut dxf = Document::<f32>::create("drawing.dxf")?;
//! dxf.circle(100.0, 100.0, 100.0, 0.0, 0)?;
//! dxf.line(35.0, 75.0, 165.0, 75.0, 0.0, 0)?;
//! dxf.end()?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod entity;
pub mod error;
pub mod group;
pub mod scalar;

// Re-exports for convenience
pub use document::{Document, ACAD_VERSION};
pub use entity::Entity;
pub use error::{DxfError, Result};
pub use group::GroupWriter;
pub use scalar::Scalar;
