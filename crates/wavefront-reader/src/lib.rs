//! wavefront-reader - Wavefront OBJ/MTL reading and writing
//!
//! This crate reads `.obj` meshes and their `.mtl` material libraries into
//! plain Rust values, and writes synthesized meshes back out as `.obj` text:
//! - **OBJ** - one [`Geometry`] per `o` object, with positions, texture
//!   coordinates and normals laid out per face-vertex
//! - **MTL** - one [`Material`] per `newmtl` block, with typed property values
//! - **Aggregation** - [`read_wavefront`] attaches each object's `usemtl`
//!   material from the library named by `mtllib`
//! - **Writing** - [`WavefrontWriter`] builds documents from grouped, flat or
//!   quad-indexed arrays
//!
//! ## Examples
//!
//! Read a mesh with its materials:
//!
//! ```rust,no_run
//! use wavefront_reader::read_wavefront;
//!
//! let geoms = read_wavefront("untitled.obj")?;
//! for (name, geom) in &geoms {
//!     println!("{name}: {} face-vertices", geom.vertex_count());
//!     if let Some(material) = &geom.material {
//!         println!("  material {} diffuse {:?}", material.name, material.diffuse());
//!     }
//! }
//! # Ok::<(), wavefront_reader::WavefrontError>(())
//! ```
//!
//! Write a triangle and read it back:
//!
//! ```rust
//! use wavefront_reader::{ObjParser, WavefrontWriter};
//!
//! let verts = [[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 0.0]];
//! let writer = WavefrontWriter::from_arrays("Triangle", &verts, &[[0.0, 1.0, 0.0]])?;
//!
//! let geoms = ObjParser::new().parse_str(writer.dumps())?;
//! assert_eq!(geoms["Triangle"].positions, verts.to_vec());
//! assert_eq!(geoms["Triangle"].normals.len(), 3);
//! # Ok::<(), wavefront_reader::WavefrontError>(())
//! ```
//!
//! ## Well-formedness
//!
//! By default the reader trusts that every face line uses the same channels
//! for all of its vertices. [`ReadOptions::with_strict`] turns that assumption
//! into a checked error.

pub mod error;
pub mod face;
pub mod mtl;
pub mod obj;
pub mod options;
pub mod wavefront;
pub mod writer;

// Re-export main types
pub use error::{Result, WavefrontError};
pub use face::{parse_face_indices, FaceIndices};
pub use mtl::{read_mtlfile, Material, MaterialValue, Materials, MtlParser};
pub use obj::{read_objfile, Channel, Geometries, Geometry, ObjParser};
pub use options::{ReadOptions, Tolerance};
pub use wavefront::{find_mtllib, read_wavefront, read_wavefront_with_options};
pub use writer::{DumpTarget, WavefrontWriter};
