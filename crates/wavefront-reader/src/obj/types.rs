//! Geometry types produced by the OBJ reader

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mtl::Material;

/// Geometry objects keyed by their `o` name, in declaration order
pub type Geometries = IndexMap<String, Geometry>;

/// Vertex attribute channel of an OBJ file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Vertex positions (`v`)
    Position,
    /// Texture coordinates (`vt`)
    TexCoord,
    /// Vertex normals (`vn`)
    Normal,
}

impl Channel {
    /// All channels in face-field order (`v/vt/vn`)
    pub const ALL: [Self; 3] = [Self::Position, Self::TexCoord, Self::Normal];

    /// Line prefix declaring rows of this channel
    #[inline]
    #[must_use = "returns the OBJ line prefix"]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Position => "v",
            Self::TexCoord => "vt",
            Self::Normal => "vn",
        }
    }

    /// Channel declared by a line prefix, if any
    #[inline]
    #[must_use = "returns the channel for the prefix"]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "v" => Some(Self::Position),
            "vt" => Some(Self::TexCoord),
            "vn" => Some(Self::Normal),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One named object of an OBJ document
///
/// Channel rows are laid out in face order: row `i` of every populated channel
/// belongs to the `i`-th face-vertex of the object. Rows are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Object name from the `o` line
    pub name: String,
    /// Positions, one per face-vertex
    pub positions: Vec<[f64; 3]>,
    /// Texture coordinates; empty if the object never references any
    pub texcoords: Vec<[f64; 2]>,
    /// Normals; empty if the object never references any
    pub normals: Vec<[f64; 3]>,
    /// Other single-prefix lines (`usemtl`, `s`, `g`, ...), last value wins
    ///
    /// Only `v`, `vt` and `vn` feed vertex pools. Other `v*` lines such as
    /// `vp` parameter-space rows land here as raw text.
    pub attributes: IndexMap<String, String>,
    /// Material attached by [`crate::read_wavefront`]
    pub material: Option<Material>,
}

impl Geometry {
    /// Create an empty geometry with the given name
    #[inline]
    #[must_use = "creates an empty geometry"]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Scalar attribute recorded for a line prefix
    #[inline]
    #[must_use = "returns the attribute value"]
    pub fn attribute(&self, prefix: &str) -> Option<&str> {
        self.attributes.get(prefix).map(String::as_str)
    }

    /// Material name from the `usemtl` line, if any
    #[inline]
    #[must_use = "returns the referenced material name"]
    pub fn usemtl(&self) -> Option<&str> {
        self.attribute("usemtl")
    }

    /// Number of face-vertices (position rows)
    #[inline]
    #[must_use = "returns the number of face-vertices"]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Row count of a channel
    #[inline]
    #[must_use = "returns the row count of the channel"]
    pub fn channel_len(&self, channel: Channel) -> usize {
        match channel {
            Channel::Position => self.positions.len(),
            Channel::TexCoord => self.texcoords.len(),
            Channel::Normal => self.normals.len(),
        }
    }

    /// Whether the object references texture coordinates
    #[inline]
    #[must_use = "returns whether texture coordinates are present"]
    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// Whether the object references normals
    #[inline]
    #[must_use = "returns whether normals are present"]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }
}
