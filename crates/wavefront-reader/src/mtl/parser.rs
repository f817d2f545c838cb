//! MTL document parser

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::io::{BufRead, Read};
use std::path::Path;

use super::types::{Material, MaterialValue};
use crate::error::{Result, WavefrontError};
use crate::obj::split_line;

/// Materials keyed by their `newmtl` name, in declaration order
pub type Materials = IndexMap<String, Material>;

/// Parse a property value by token count
///
/// Several tokens form a float 3-tuple; a single token is an integer when it
/// parses as one and a float otherwise.
fn parse_value(code: &str, value: &str) -> Result<MaterialValue> {
    let tokens: Vec<&str> = value.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(WavefrontError::ComponentCount {
            prefix: code.to_string(),
            expected: 1,
            found: 0,
        }),
        [token] => token
            .parse::<i64>()
            .map(MaterialValue::Int)
            .or_else(|_| token.parse::<f64>().map(MaterialValue::Float))
            .map_err(|_| WavefrontError::NumericParse {
                token: (*token).to_string(),
                expected: "integer or float",
            }),
        [x, y, z] => Ok(MaterialValue::Vector([
            parse_float(x)?,
            parse_float(y)?,
            parse_float(z)?,
        ])),
        _ => Err(WavefrontError::ComponentCount {
            prefix: code.to_string(),
            expected: 3,
            found: tokens.len(),
        }),
    }
}

fn parse_float(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| WavefrontError::NumericParse {
            token: token.to_string(),
            expected: "float",
        })
}

/// MTL parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MtlParser;

impl MtlParser {
    /// Create a parser
    #[inline]
    #[must_use = "creates parser"]
    pub const fn new() -> Self {
        Self
    }

    /// Parse an MTL file from a path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a property value is
    /// malformed (see [`MtlParser::parse_str`]).
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Materials> {
        let content = fs::read_to_string(path.as_ref())?;
        self.parse_str(&content)
    }

    /// Parse MTL text from a reader
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the text is malformed.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<Materials> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_str(&content)
    }

    /// Parse MTL text
    ///
    /// Lines before the first `newmtl` are ignored. Re-declaring a material
    /// name replaces the earlier block.
    ///
    /// # Errors
    ///
    /// - `LineFormat` for a non-blank line without a prefix separator
    /// - `NumericParse` for a value that is neither integer nor float
    /// - `ComponentCount` for a multi-token value that is not a 3-tuple
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_str(&self, content: &str) -> Result<Materials> {
        let mut materials = Materials::new();
        let mut current: Option<Material> = None;

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (code, value) = split_line(idx + 1, line)?;

            if code == "newmtl" {
                if let Some(done) = current.take() {
                    materials.insert(done.name.clone(), done);
                }
                current = Some(Material::new(value.trim()));
            } else if let Some(material) = current.as_mut() {
                let parsed = parse_value(code, value)?;
                material.properties.insert(code.to_string(), parsed);
            }
        }

        if let Some(done) = current {
            materials.insert(done.name.clone(), done);
        }

        debug!("MTL: parsed {} materials", materials.len());
        Ok(materials)
    }
}

/// Read an MTL file into its materials
///
/// # Errors
///
/// See [`MtlParser::parse_str`].
#[must_use = "parsing produces a result that should be handled"]
pub fn read_mtlfile<P: AsRef<Path>>(path: P) -> Result<Materials> {
    MtlParser::new().parse_file(path)
}
