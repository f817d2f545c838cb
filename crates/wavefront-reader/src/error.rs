//! Error types for Wavefront reading and writing

use std::io;
use thiserror::Error;

use crate::obj::Channel;

/// Errors that can occur while reading or writing Wavefront files
#[derive(Debug, Error)]
pub enum WavefrontError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// First line of the document does not carry the `OBJ` marker
    #[error("File not .obj-formatted (first line: {first_line:?})")]
    NotObj {
        /// The offending first line (empty for empty input)
        first_line: String,
    },

    /// Non-blank line without a space between prefix and value
    #[error("Line {line_number} has no prefix/value separator: {line:?}")]
    LineFormat {
        /// 1-based line number
        line_number: usize,
        /// Raw line content
        line: String,
    },

    /// Face vertex group with more than three slash-delimited fields
    #[error("Malformed face vertex group: {group:?}")]
    FaceFormat {
        /// The offending `v/vt/vn` group
        group: String,
    },

    /// Token could not be parsed as the required numeric type
    #[error("Cannot parse {token:?} as {expected}")]
    NumericParse {
        /// The offending token
        token: String,
        /// Expected type ("integer", "float", "integer or float")
        expected: &'static str,
    },

    /// Row or property has the wrong number of components
    #[error("'{prefix}' expects {expected} components, found {found}")]
    ComponentCount {
        /// Line prefix (`v`, `vn`, `Kd`, ...)
        prefix: String,
        /// Required component count
        expected: usize,
        /// Actual component count
        found: usize,
    },

    /// Face references a pool row that does not exist
    #[error("Object '{object}': {channel} index {index} out of range (pool holds {pool_len} rows)")]
    IndexOutOfRange {
        /// Object whose face referenced the row
        object: String,
        /// Channel of the pool
        channel: Channel,
        /// 1-based index as written in the file
        index: i64,
        /// Number of rows in the pool
        pool_len: usize,
    },

    /// `usemtl` names a material absent from the material library
    #[error("Material '{material}' used by object '{object}' not found in material library")]
    MissingMaterial {
        /// Material name from `usemtl`
        material: String,
        /// Object referencing it
        object: String,
    },

    /// An object uses a material but the document has no `mtllib` declaration
    #[error("Object '{object}' uses a material but no mtllib is declared")]
    MissingMaterialLibrary {
        /// Object referencing a material
        object: String,
    },

    /// Indexed writer input group is not a quad
    #[error("Group {group} has {found} vertices; indexed arrays must be quads")]
    NotQuads {
        /// 0-based group ordinal
        group: usize,
        /// Vertex count of the group
        found: usize,
    },

    /// Caller supplied unusable writer input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Face line mixes channels across its vertex groups (strict mode)
    #[error("Line {line_number}: face channels are not uniform across vertices")]
    NonUniformFace {
        /// 1-based line number
        line_number: usize,
    },

    /// Resolved channel row count differs from the position count (strict mode)
    #[error("Object '{object}': {channel} has {found} rows, expected {expected}")]
    ChannelLengthMismatch {
        /// Object name
        object: String,
        /// Mismatched channel
        channel: Channel,
        /// Position row count
        expected: usize,
        /// Channel row count
        found: usize,
    },
}

/// Result type for Wavefront operations
pub type Result<T> = std::result::Result<T, WavefrontError>;
