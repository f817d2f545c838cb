//! OBJ file format support
//!
//! Wavefront OBJ is a line-oriented text format listing vertex positions,
//! texture coordinates, normals and faces, grouped into named objects. This
//! module reads an OBJ document into one [`Geometry`] per object, with every
//! face-vertex resolved against the file-wide vertex pools.

mod parser;
mod types;

pub(crate) use parser::split_line;
pub use parser::{read_objfile, ObjParser};
pub use types::{Channel, Geometries, Geometry};
