//! OBJ text serialization

use indexmap::IndexMap;
use log::warn;
use std::fmt::{self, Write as _};
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::indexing::{face_index, fan_triangulate};
use crate::error::{Result, WavefrontError};
use crate::options::Tolerance;

/// Header written at the top of every document
///
/// The first line carries the `OBJ` marker the reader checks for.
pub const PREAMBLE: &str = "# Blender v2.69 (sub 5) OBJ File: ''\n# www.blender.org\n";

/// Texture coordinate row shared by every face-vertex
const PLACEHOLDER_TEXCOORD: &str = "vt 1.0 1.0\n";

/// Destination for [`WavefrontWriter::dump`]
pub enum DumpTarget<'a> {
    /// Caller-owned sink; left open after writing
    Sink(&'a mut dyn Write),
    /// File to create or truncate; closed before `dump` returns
    Path(PathBuf),
}

impl<'a> DumpTarget<'a> {
    /// Target a caller-owned writer
    #[inline]
    #[must_use = "creates a dump target"]
    pub fn sink(writer: &'a mut dyn Write) -> Self {
        Self::Sink(writer)
    }

    /// Target a filesystem path
    #[inline]
    #[must_use = "creates a dump target"]
    pub fn path<P: AsRef<Path>>(path: P) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }
}

impl fmt::Debug for DumpTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(_) => f.write_str("Sink(..)"),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl From<PathBuf> for DumpTarget<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for DumpTarget<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// Append `o`, positions, the placeholder texcoord and normals
fn write_header(out: &mut String, name: &str, verts: &[[f64; 3]], normals: &[[f64; 3]]) {
    let _ = writeln!(out, "o {name}");
    for [x, y, z] in verts {
        let _ = writeln!(out, "v {x:?} {y:?} {z:?}");
    }
    out.push_str(PLACEHOLDER_TEXCOORD);
    for [x, y, z] in normals {
        let _ = writeln!(out, "vn {x:?} {y:?} {z:?}");
    }
}

/// Append one face line; `vertices` are 1-based, `normal` is 1-based
fn write_face(out: &mut String, vertices: impl IntoIterator<Item = usize>, normal: usize) {
    out.push('f');
    for v in vertices {
        let _ = write!(out, " {v}/1/{normal}");
    }
    out.push('\n');
}

/// In-memory OBJ document
///
/// ```
/// use wavefront_reader::WavefrontWriter;
///
/// let verts = [[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 0.0]];
/// let normals = [[0.0, 1.0, 0.0]];
/// let writer = WavefrontWriter::from_arrays("Triangle", &verts, &normals)?;
///
/// assert!(writer.dumps().contains("o Triangle\n"));
/// assert!(writer.dumps().contains("f 1/1/1 2/1/1 3/1/1\n"));
/// # Ok::<(), wavefront_reader::WavefrontError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WavefrontWriter {
    data: String,
}

impl WavefrontWriter {
    /// Wrap an OBJ body, prefixing it with [`PREAMBLE`]
    #[must_use = "creates a writer holding the document"]
    pub fn new(body: &str) -> Self {
        let mut data = String::with_capacity(PREAMBLE.len() + body.len());
        data.push_str(PREAMBLE);
        data.push_str(body);
        Self { data }
    }

    /// Build a document from pre-triangulated vertex groups
    ///
    /// `verts` maps each group (wall) to its positions, taken three at a time
    /// as triangles. `normals` holds one flat normal per group. Faces of the
    /// `k`-th group of `verts` use normal `k + 1`, so both maps are expected
    /// to list groups in the same order. A trailing partial triangle is
    /// skipped.
    #[must_use = "creates a writer holding the document"]
    pub fn from_groups<K: Hash + Eq>(
        name: &str,
        verts: &IndexMap<K, Vec<[f64; 3]>>,
        normals: &IndexMap<K, [f64; 3]>,
    ) -> Self {
        let positions: Vec<[f64; 3]> = verts.values().flatten().copied().collect();
        let normal_rows: Vec<[f64; 3]> = normals.values().copied().collect();

        let mut body = String::new();
        write_header(&mut body, name, &positions, &normal_rows);

        let mut offset = 0;
        for (ordinal, group) in verts.values().enumerate() {
            let triangles = group.len() / 3;
            if group.len() % 3 != 0 {
                warn!(
                    "Group {} has {} vertices; skipping trailing partial triangle",
                    ordinal + 1,
                    group.len()
                );
            }
            for tri in 0..triangles {
                let first = offset + tri * 3 + 1;
                write_face(&mut body, first..first + 3, ordinal + 1);
            }
            offset += group.len();
        }

        Self::new(&body)
    }

    /// Build a triangle document from flat arrays
    ///
    /// Shorthand for [`WavefrontWriter::from_polygon_arrays`] with three
    /// vertices per face.
    ///
    /// # Errors
    ///
    /// See [`WavefrontWriter::from_polygon_arrays`].
    pub fn from_arrays(name: &str, verts: &[[f64; 3]], normals: &[[f64; 3]]) -> Result<Self> {
        Self::from_polygon_arrays(name, verts, normals, 3)
    }

    /// Build a document from flat arrays of `n_verts`-sided polygons
    ///
    /// Consecutive runs of `n_verts` positions form one face; face `k` (1-based)
    /// uses normal `k`. Positions left over after the last full face are still
    /// written as vertices but belong to no face.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `n_verts` is zero.
    pub fn from_polygon_arrays(
        name: &str,
        verts: &[[f64; 3]],
        normals: &[[f64; 3]],
        n_verts: usize,
    ) -> Result<Self> {
        if n_verts == 0 {
            return Err(WavefrontError::InvalidInput(
                "vertices per face must be at least 1".to_string(),
            ));
        }

        let mut body = String::new();
        write_header(&mut body, name, verts, normals);

        let faces = verts.len() / n_verts;
        if verts.len() % n_verts != 0 {
            warn!(
                "{} vertices do not divide into faces of {n_verts}; dropping the remainder",
                verts.len()
            );
        }
        for face in 0..faces {
            let first = face * n_verts + 1;
            write_face(&mut body, first..first + n_verts, face + 1);
        }

        Ok(Self::new(&body))
    }

    /// Build a document from quad groups, sharing repeated corners
    ///
    /// `groups` holds four positions per quad; `normals` one normal per quad.
    /// Positions are deduplicated with the default [`Tolerance`] and every quad
    /// is split into two triangles that share the quad's normal.
    ///
    /// # Errors
    ///
    /// Returns `NotQuads` if a group does not have exactly four positions.
    ///
    /// # Panics
    ///
    /// Panics if `normals.len()` differs from the number of groups.
    pub fn from_indexed_arrays(
        name: &str,
        groups: &[Vec<[f64; 3]>],
        normals: &[[f64; 3]],
    ) -> Result<Self> {
        Self::from_indexed_arrays_with_tolerance(name, groups, normals, Tolerance::default())
    }

    /// Build a document from quad groups with a custom dedup tolerance
    ///
    /// # Errors
    ///
    /// Returns `NotQuads` if a group does not have exactly four positions.
    ///
    /// # Panics
    ///
    /// Panics if `normals.len()` differs from the number of groups.
    pub fn from_indexed_arrays_with_tolerance(
        name: &str,
        groups: &[Vec<[f64; 3]>],
        normals: &[[f64; 3]],
        tolerance: Tolerance,
    ) -> Result<Self> {
        let (pool, quads) = face_index(groups, &tolerance);
        let triangles = fan_triangulate(&quads)?;

        let mut body = String::new();
        write_header(&mut body, name, &pool, normals);

        assert_eq!(
            triangles.len(),
            normals.len() * 2,
            "expected one normal per quad ({} quads, {} normals)",
            quads.len(),
            normals.len()
        );
        for (tri_idx, triangle) in triangles.iter().enumerate() {
            write_face(&mut body, triangle.iter().map(|v| v + 1), tri_idx / 2 + 1);
        }

        Ok(Self::new(&body))
    }

    /// Document text
    #[inline]
    #[must_use = "returns the document text"]
    pub fn dumps(&self) -> &str {
        &self.data
    }

    /// Write the document to a sink or a file
    ///
    /// A `Path` target is created (or truncated) and closed before returning,
    /// whether or not the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be created or the write fails.
    pub fn dump(&self, target: DumpTarget<'_>) -> Result<()> {
        match target {
            DumpTarget::Sink(sink) => sink.write_all(self.data.as_bytes())?,
            DumpTarget::Path(path) => write_file(&path, &self.data)?,
        }
        Ok(())
    }
}

fn write_file(path: &Path, data: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(data.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(writer: &WavefrontWriter) -> &str {
        writer.dumps().strip_prefix(PREAMBLE).unwrap()
    }

    #[test]
    fn test_new_prefixes_preamble() {
        let writer = WavefrontWriter::new("o Empty\n");
        assert!(writer.dumps().starts_with("# Blender v2.69 (sub 5) OBJ File: ''\n"));
        assert_eq!(body(&writer), "o Empty\n");
    }

    #[test]
    fn test_from_arrays_triangle() {
        let writer = WavefrontWriter::from_arrays(
            "Triangle",
            &[[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 0.0]],
            &[[0.0, 1.0, 0.0]],
        )
        .unwrap();

        assert_eq!(
            body(&writer),
            "o Triangle\n\
             v 0.0 0.0 0.0\n\
             v 0.0 1.0 1.0\n\
             v 1.0 0.0 0.0\n\
             vt 1.0 1.0\n\
             vn 0.0 1.0 0.0\n\
             f 1/1/1 2/1/1 3/1/1\n"
        );
    }

    #[test]
    fn test_from_polygon_arrays_quads() {
        let verts = vec![[0.0; 3]; 8];
        let writer =
            WavefrontWriter::from_polygon_arrays("Quads", &verts, &[[0.0, 0.0, 1.0]; 2], 4)
                .unwrap();
        let text = body(&writer);
        assert!(text.contains("f 1/1/1 2/1/1 3/1/1 4/1/1\n"));
        assert!(text.contains("f 5/1/2 6/1/2 7/1/2 8/1/2\n"));
    }

    #[test]
    fn test_from_polygon_arrays_drops_remainder() {
        let writer =
            WavefrontWriter::from_arrays("Tri", &[[0.0; 3]; 4], &[[0.0, 0.0, 1.0]]).unwrap();
        let text = body(&writer);
        assert_eq!(text.matches("\nv ").count(), 4);
        assert_eq!(text.matches("\nf ").count(), 1);
    }

    #[test]
    fn test_from_polygon_arrays_zero_size() {
        let err = WavefrontWriter::from_polygon_arrays("X", &[], &[], 0).unwrap_err();
        assert!(matches!(err, WavefrontError::InvalidInput(_)));
    }

    #[test]
    fn test_from_groups_normal_per_group() {
        let mut verts = IndexMap::new();
        verts.insert(0, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        verts.insert(
            1,
            vec![
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
            ],
        );
        let mut normals = IndexMap::new();
        normals.insert(0, [0.0, 0.0, -1.0]);
        normals.insert(1, [0.0, 0.0, 1.0]);

        let writer = WavefrontWriter::from_groups("Walls", &verts, &normals);
        let text = body(&writer);

        assert_eq!(text.matches("\nv ").count(), 9);
        assert_eq!(text.matches("vt 1.0 1.0\n").count(), 1);
        assert!(text.contains("vn 0.0 0.0 -1.0\nvn 0.0 0.0 1.0\n"));
        assert!(text.ends_with(
            "f 1/1/1 2/1/1 3/1/1\n\
             f 4/1/2 5/1/2 6/1/2\n\
             f 7/1/2 8/1/2 9/1/2\n"
        ));
    }

    #[test]
    fn test_from_groups_partial_triangle_keeps_offsets() {
        let mut verts = IndexMap::new();
        verts.insert("a", vec![[0.0; 3]; 4]);
        verts.insert("b", vec![[1.0; 3]; 3]);
        let mut normals = IndexMap::new();
        normals.insert("a", [0.0, 0.0, 1.0]);
        normals.insert("b", [0.0, 1.0, 0.0]);

        let writer = WavefrontWriter::from_groups("Walls", &verts, &normals);
        let text = body(&writer);
        assert!(text.contains("f 1/1/1 2/1/1 3/1/1\n"));
        assert!(text.contains("f 5/1/2 6/1/2 7/1/2\n"));
    }

    #[test]
    fn test_from_indexed_arrays_square() {
        let groups = vec![vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]];
        let writer =
            WavefrontWriter::from_indexed_arrays("Square", &groups, &[[0.0, 0.0, 1.0]]).unwrap();
        let text = body(&writer);

        assert_eq!(text.matches("\nv ").count(), 4);
        assert!(text.ends_with("f 1/1/1 2/1/1 3/1/1\nf 2/1/1 3/1/1 4/1/1\n"));
    }

    #[test]
    fn test_from_indexed_arrays_shared_corners() {
        let groups = vec![
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
            vec![[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0], [2.0, 1.0, 0.0]],
        ];
        let normals = [[0.0, 0.0, 1.0], [0.0, 0.0, 1.0]];
        let writer = WavefrontWriter::from_indexed_arrays("Strip", &groups, &normals).unwrap();
        let text = body(&writer);

        assert_eq!(text.matches("\nv ").count(), 6);
        assert!(text.contains("f 2/1/2 5/1/2 4/1/2\nf 5/1/2 4/1/2 6/1/2\n"));
    }

    #[test]
    fn test_from_indexed_arrays_rejects_triangles() {
        let groups = vec![vec![[0.0; 3], [1.0; 3], [2.0; 3]]];
        let err = WavefrontWriter::from_indexed_arrays("Tri", &groups, &[[0.0; 3]]).unwrap_err();
        assert!(matches!(err, WavefrontError::NotQuads { group: 0, found: 3 }));
    }

    #[test]
    #[should_panic(expected = "expected one normal per quad")]
    fn test_from_indexed_arrays_normal_count_mismatch() {
        let groups = vec![vec![[0.0; 3], [1.0; 3], [2.0; 3], [3.0; 3]]];
        let _ = WavefrontWriter::from_indexed_arrays("Quad", &groups, &[]);
    }

    #[test]
    fn test_dump_to_sink() {
        let writer = WavefrontWriter::new("o A\n");
        let mut buffer: Vec<u8> = Vec::new();
        writer.dump(DumpTarget::sink(&mut buffer)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), writer.dumps());
    }

    #[test]
    fn test_dump_target_debug() {
        let mut buffer: Vec<u8> = Vec::new();
        assert_eq!(format!("{:?}", DumpTarget::sink(&mut buffer)), "Sink(..)");
        assert_eq!(
            format!("{:?}", DumpTarget::path("out.obj")),
            "Path(\"out.obj\")"
        );
    }

    #[test]
    fn test_dump_to_missing_directory() {
        let writer = WavefrontWriter::new("o A\n");
        let result = writer.dump(DumpTarget::path("/nonexistent/dir/out.obj"));
        assert!(matches!(result, Err(WavefrontError::Io(_))));
    }
}
