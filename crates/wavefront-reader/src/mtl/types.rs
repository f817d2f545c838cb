//! Material types produced by the MTL reader

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of one material property
///
/// The variant is chosen from the shape of the value text alone: three
/// tokens make a [`MaterialValue::Vector`], a single token is an
/// [`MaterialValue::Int`] when it reads as an integer and a
/// [`MaterialValue::Float`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaterialValue {
    /// Integer scalar (e.g. `illum 2`)
    Int(i64),
    /// Float scalar (e.g. `Ns 96.078431`)
    Float(f64),
    /// Float 3-tuple (e.g. `Kd 0.64 0.64 0.64`)
    Vector([f64; 3]),
}

impl MaterialValue {
    /// Integer value, if this is an integer scalar
    #[inline]
    #[must_use = "returns the integer value"]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Scalar value as a float (integers are widened)
    #[inline]
    #[must_use = "returns the scalar value"]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Vector(_) => None,
        }
    }

    /// Vector value, if this is a 3-tuple
    #[inline]
    #[must_use = "returns the vector value"]
    pub const fn as_vector(&self) -> Option<[f64; 3]> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

/// One `newmtl` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Properties keyed by their code (`Kd`, `Ns`, `illum`, ...)
    pub properties: IndexMap<String, MaterialValue>,
}

impl Material {
    /// Create a material with no properties
    #[inline]
    #[must_use = "creates an empty material"]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Property value by code
    #[inline]
    #[must_use = "returns the property value"]
    pub fn get(&self, code: &str) -> Option<&MaterialValue> {
        self.properties.get(code)
    }

    /// Diffuse color (`Kd`)
    #[inline]
    #[must_use = "returns the diffuse color"]
    pub fn diffuse(&self) -> Option<[f64; 3]> {
        self.get("Kd").and_then(MaterialValue::as_vector)
    }

    /// Illumination model (`illum`)
    #[inline]
    #[must_use = "returns the illumination model"]
    pub fn illumination(&self) -> Option<i64> {
        self.get("illum").and_then(MaterialValue::as_int)
    }
}
