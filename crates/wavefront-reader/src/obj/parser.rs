//! OBJ document parser
//!
//! Vertex rows (`v`, `vt`, `vn`) accumulate into file-wide pools while face
//! lines are queued per object. Faces reference the pools by 1-based index
//! counted from the start of the file, so objects are only resolved into dense
//! per-face-vertex arrays once the whole document has been scanned.

use log::debug;
use std::fs;
use std::io::{BufRead, Read};
use std::path::Path;

use super::types::{Channel, Geometries, Geometry};
use crate::error::{Result, WavefrontError};
use crate::face::{parse_face_indices, FaceIndices};
use crate::options::ReadOptions;

/// Marker that must appear on the first line of an OBJ document
const OBJ_MARKER: &str = "OBJ";

/// File-wide vertex pools, one per channel
#[derive(Debug, Default)]
struct VertexPools {
    positions: Vec<[f64; 3]>,
    texcoords: Vec<[f64; 2]>,
    normals: Vec<[f64; 3]>,
}

impl VertexPools {
    fn push(&mut self, channel: Channel, value: &str) -> Result<()> {
        let prefix = channel.prefix();
        match channel {
            Channel::Position => self.positions.push(parse_row(prefix, value)?),
            Channel::TexCoord => self.texcoords.push(parse_row(prefix, value)?),
            Channel::Normal => self.normals.push(parse_row(prefix, value)?),
        }
        Ok(())
    }
}

/// Object whose faces have not been resolved yet
#[derive(Debug)]
struct PendingObject {
    geometry: Geometry,
    faces: Vec<FaceIndices>,
}

impl PendingObject {
    fn new(name: &str) -> Self {
        Self {
            geometry: Geometry::new(name),
            faces: Vec::new(),
        }
    }

    /// Gather pool rows for every channel in face declaration order
    fn resolve(self, pools: &VertexPools, options: &ReadOptions) -> Result<Geometry> {
        let Self {
            mut geometry,
            faces,
        } = self;
        let name = geometry.name.as_str();

        let vertex = faces.iter().flat_map(|f| f.vertex.iter().copied());
        let texcoord = faces.iter().flat_map(|f| f.texcoord.iter().copied());
        let normal = faces.iter().flat_map(|f| f.normal.iter().copied());

        let positions = gather(&pools.positions, vertex, name, Channel::Position)?;
        let texcoords = gather(&pools.texcoords, texcoord, name, Channel::TexCoord)?;
        let normals = gather(&pools.normals, normal, name, Channel::Normal)?;

        geometry.positions = positions;
        geometry.texcoords = texcoords;
        geometry.normals = normals;

        if options.strict {
            check_channel_lengths(&geometry)?;
        }

        Ok(geometry)
    }
}

/// Split a non-blank line into its prefix and raw value
///
/// The prefix runs up to the first space or tab; the value is everything after
/// it, untrimmed.
pub(crate) fn split_line(line_number: usize, line: &str) -> Result<(&str, &str)> {
    line.split_once([' ', '\t'])
        .ok_or_else(|| WavefrontError::LineFormat {
            line_number,
            line: line.to_string(),
        })
}

/// Parse a whitespace-separated float row with a fixed component count
///
/// Trailing components are dropped where the format allows them: a texture
/// coordinate may carry a third `w`, and a position may carry a `w` weight or
/// an `r g b` vertex color.
fn parse_row<const N: usize>(prefix: &str, value: &str) -> Result<[f64; N]> {
    let values = value
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| WavefrontError::NumericParse {
                    token: token.to_string(),
                    expected: "float",
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    let accepted = match Channel::from_prefix(prefix) {
        Some(Channel::Position) => values.len() >= N,
        Some(Channel::TexCoord) => values.len() == N || values.len() == N + 1,
        _ => values.len() == N,
    };
    if !accepted {
        return Err(WavefrontError::ComponentCount {
            prefix: prefix.to_string(),
            expected: N,
            found: values.len(),
        });
    }

    let mut row = [0.0; N];
    row.copy_from_slice(&values[..N]);
    Ok(row)
}

/// Look up 1-based indices in a pool
///
/// A channel with no pool rows in the whole file resolves to nothing.
fn gather<const N: usize>(
    pool: &[[f64; N]],
    indices: impl Iterator<Item = i64>,
    object: &str,
    channel: Channel,
) -> Result<Vec<[f64; N]>> {
    if pool.is_empty() {
        return Ok(Vec::new());
    }
    indices
        .map(|index| {
            usize::try_from(index)
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| pool.get(i))
                .copied()
                .ok_or_else(|| WavefrontError::IndexOutOfRange {
                    object: object.to_string(),
                    channel,
                    index,
                    pool_len: pool.len(),
                })
        })
        .collect()
}

fn check_channel_lengths(geometry: &Geometry) -> Result<()> {
    let expected = geometry.vertex_count();
    for channel in [Channel::TexCoord, Channel::Normal] {
        let found = geometry.channel_len(channel);
        if found != 0 && found != expected {
            return Err(WavefrontError::ChannelLengthMismatch {
                object: geometry.name.clone(),
                channel,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// OBJ parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjParser {
    options: ReadOptions,
}

impl ObjParser {
    /// Create a lenient parser
    #[inline]
    #[must_use = "creates parser with default options"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options
    #[inline]
    #[must_use = "creates parser with custom options"]
    pub const fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with
    #[inline]
    #[must_use = "returns the parser options"]
    pub const fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Parse an OBJ file from a path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not
    /// valid OBJ text (see [`ObjParser::parse_str`]).
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Geometries> {
        let content = fs::read_to_string(path.as_ref())?;
        self.parse_str(&content)
    }

    /// Parse OBJ text from a reader
    ///
    /// The reader is consumed to the end before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the text is not valid OBJ.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<Geometries> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_str(&content)
    }

    /// Parse OBJ text
    ///
    /// # Errors
    ///
    /// - `NotObj` if the first line lacks the `OBJ` marker
    /// - `LineFormat` for a non-blank line without a prefix separator
    /// - `NumericParse` / `ComponentCount` for malformed vertex rows
    /// - `IndexOutOfRange` for face indices with no matching pool row
    /// - `NonUniformFace` / `ChannelLengthMismatch` in strict mode
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_str(&self, content: &str) -> Result<Geometries> {
        let first_line = content.lines().next().unwrap_or_default();
        if !first_line.contains(OBJ_MARKER) {
            return Err(WavefrontError::NotObj {
                first_line: first_line.to_string(),
            });
        }

        let mut pools = VertexPools::default();
        let mut objects: Vec<PendingObject> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = idx + 1;
            let (prefix, value) = split_line(line_number, line)?;

            if prefix == "o" {
                objects.push(PendingObject::new(value.trim()));
                continue;
            }

            // Everything before the first object is skipped, vertex rows included
            let Some(object) = objects.last_mut() else {
                continue;
            };

            if let Some(channel) = Channel::from_prefix(prefix) {
                pools.push(channel, value)?;
            } else if prefix == "f" {
                let face = parse_face_indices(value)?;
                if self.options.strict && !face.is_uniform() {
                    return Err(WavefrontError::NonUniformFace { line_number });
                }
                object.faces.push(face);
            } else {
                object
                    .geometry
                    .attributes
                    .insert(prefix.to_string(), value.trim().to_string());
            }
        }

        debug!(
            "OBJ pools: {} positions, {} texcoords, {} normals across {} object declarations",
            pools.positions.len(),
            pools.texcoords.len(),
            pools.normals.len(),
            objects.len()
        );

        let mut geometries = Geometries::new();
        for object in objects {
            let geometry = object.resolve(&pools, &self.options)?;
            geometries.insert(geometry.name.clone(), geometry);
        }

        Ok(geometries)
    }
}

/// Read an OBJ file into its geometry objects
///
/// # Errors
///
/// See [`ObjParser::parse_str`].
#[must_use = "parsing produces a result that should be handled"]
pub fn read_objfile<P: AsRef<Path>>(path: P) -> Result<Geometries> {
    ObjParser::new().parse_file(path)
}
