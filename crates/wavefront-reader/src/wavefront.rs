//! OBJ + MTL aggregation
//!
//! Reads an OBJ document, locates its material library through the first
//! `mtllib` line, and attaches the material named by each object's `usemtl`.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WavefrontError};
use crate::mtl::{Materials, MtlParser};
use crate::obj::{split_line, Geometries, ObjParser};
use crate::options::ReadOptions;

/// Material library declared by an OBJ document
///
/// Only the first `mtllib` line counts; scanning stops there and any later
/// declaration is ignored. The value is taken whole, so a line naming several
/// libraries resolves to a single (space-containing) filename.
#[must_use = "returns the declared material library"]
pub fn find_mtllib(content: &str) -> Option<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| split_line(0, line.trim()).ok())
        .find(|(prefix, _)| *prefix == "mtllib")
        .map(|(_, value)| value.trim())
}

/// Read an OBJ file and attach materials from its material library
///
/// ```no_run
/// use wavefront_reader::read_wavefront;
///
/// let geoms = read_wavefront("untitled.obj")?;
/// let cube = &geoms["Cube"];
/// if let Some(material) = &cube.material {
///     println!("{} diffuse: {:?}", material.name, material.diffuse());
/// }
/// # Ok::<(), wavefront_reader::WavefrontError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the OBJ or MTL file cannot be read or parsed, if an
/// object uses a material but no `mtllib` is declared
/// (`MissingMaterialLibrary`), or if the library lacks a referenced material
/// (`MissingMaterial`).
#[must_use = "parsing produces a result that should be handled"]
pub fn read_wavefront<P: AsRef<Path>>(path: P) -> Result<Geometries> {
    read_wavefront_with_options(path, &ReadOptions::default())
}

/// Read an OBJ file with custom options and attach materials
///
/// # Errors
///
/// See [`read_wavefront`].
#[must_use = "parsing produces a result that should be handled"]
pub fn read_wavefront_with_options<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<Geometries> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut geoms = ObjParser::with_options(*options).parse_str(&content)?;

    let Some(first_user) = geoms
        .values()
        .find(|geom| geom.usemtl().is_some())
        .map(|geom| geom.name.clone())
    else {
        return Ok(geoms);
    };
    let Some(library) = find_mtllib(&content) else {
        return Err(WavefrontError::MissingMaterialLibrary { object: first_user });
    };

    let library = mtl_path(path, library);
    debug!("Loading material library {}", library.display());
    let materials: Materials = MtlParser::new().parse_file(&library)?;

    for geom in geoms.values_mut() {
        let Some(material_name) = geom.usemtl() else {
            continue;
        };
        let material = materials.get(material_name).cloned().ok_or_else(|| {
            WavefrontError::MissingMaterial {
                material: material_name.to_string(),
                object: geom.name.clone(),
            }
        })?;
        geom.material = Some(material);
    }

    Ok(geoms)
}

/// Resolve a material library name against the OBJ file's directory
fn mtl_path(obj_path: &Path, name: &str) -> PathBuf {
    obj_path
        .parent()
        .map_or_else(|| PathBuf::from(name), |dir| dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_mtllib_only() {
        let content = "# OBJ\nmtllib first.mtl\no A\nmtllib second.mtl\n";
        assert_eq!(find_mtllib(content), Some("first.mtl"));
    }

    #[test]
    fn test_find_mtllib_absent() {
        assert_eq!(find_mtllib("# OBJ\no A\nusemtl M\n"), None);
    }

    #[test]
    fn test_mtl_path_relative_to_obj() {
        assert_eq!(
            mtl_path(Path::new("/data/meshes/cube.obj"), "cube.mtl"),
            PathBuf::from("/data/meshes/cube.mtl")
        );
        assert_eq!(
            mtl_path(Path::new("cube.obj"), "cube.mtl"),
            PathBuf::from("cube.mtl")
        );
    }
}
