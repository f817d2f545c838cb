//! Face line index parsing
//!
//! An OBJ face line lists one `v/vt/vn` group per polygon vertex. The texcoord
//! and normal fields are optional (`1`, `1/2`, `1//3`, `1/2/3`). This module
//! turns the body of such a line into three index sequences, one per channel.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WavefrontError};

/// Indices collected from one face line, split by channel
///
/// Indices are kept exactly as written (1-based). A channel absent from every
/// vertex group is empty; fields are never zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceIndices {
    /// Position indices
    pub vertex: Vec<i64>,
    /// Texture coordinate indices
    pub texcoord: Vec<i64>,
    /// Normal indices
    pub normal: Vec<i64>,
}

impl FaceIndices {
    /// Number of vertex groups on the line
    #[inline]
    #[must_use = "returns the number of face vertices"]
    pub fn len(&self) -> usize {
        self.vertex.len()
    }

    /// Whether the line referenced no vertices at all
    #[inline]
    #[must_use = "returns whether the face is empty"]
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty()
    }

    /// Whether every channel is either fully populated or absent
    ///
    /// Well-formed OBJ files always satisfy this. The parser itself does not
    /// check it; strict reading does.
    #[must_use = "returns whether the face channels are uniform"]
    pub fn is_uniform(&self) -> bool {
        let n = self.vertex.len();
        [&self.texcoord, &self.normal]
            .iter()
            .all(|channel| channel.is_empty() || channel.len() == n)
    }
}

/// Parse the body of an `f` line into per-channel index sequences
///
/// ```
/// use wavefront_reader::parse_face_indices;
///
/// let face = parse_face_indices("1//10 2//20 3//30")?;
/// assert_eq!(face.vertex, vec![1, 2, 3]);
/// assert!(face.texcoord.is_empty());
/// assert_eq!(face.normal, vec![10, 20, 30]);
/// # Ok::<(), wavefront_reader::WavefrontError>(())
/// ```
///
/// # Errors
///
/// Returns `NumericParse` for a non-integer field and `FaceFormat` for a group
/// with more than three fields.
pub fn parse_face_indices(line: &str) -> Result<FaceIndices> {
    let mut face = FaceIndices::default();

    for group in line.split_whitespace() {
        for (col, field) in group.split('/').enumerate() {
            if field.is_empty() {
                continue;
            }
            let index = field
                .parse::<i64>()
                .map_err(|_| WavefrontError::NumericParse {
                    token: field.to_string(),
                    expected: "integer",
                })?;
            match col {
                0 => face.vertex.push(index),
                1 => face.texcoord.push(index),
                2 => face.normal.push(index),
                _ => {
                    return Err(WavefrontError::FaceFormat {
                        group: group.to_string(),
                    })
                }
            }
        }
    }

    Ok(face)
}
