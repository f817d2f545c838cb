//! OBJ writing
//!
//! Builds `.obj` text from in-memory vertex and normal data. Every output
//! carries a single placeholder texture coordinate (`vt 1.0 1.0`) so faces can
//! be written in full `v/vt/vn` form.

pub mod indexing;
mod serializer;

pub use indexing::{face_index, fan_triangulate};
pub use serializer::{DumpTarget, WavefrontWriter, PREAMBLE};
