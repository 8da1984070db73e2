use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::error::SceneError;

/// Camera parameters attached to one frame annotation.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraParams {
    /// Row-major 3x3 intrinsic matrix.
    pub intrinsics: [[f32; 3]; 3],
    /// Row-major 4x4 world-to-camera extrinsic matrix.
    pub extrinsics: [[f32; 4]; 4],
}

/// On-disk annotation schema: `{"camera": {"intrinsics": ..., "extrinsics": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameAnnotation {
    /// Camera parameters of the frame.
    pub camera: CameraParams,
}

/// A parsed frame annotation together with its base name.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// File name of the source annotation without its extension.
    pub base: String,
    /// Parsed camera parameters.
    pub camera: CameraParams,
}

/// Read one annotation JSON file and derive its base name.
///
/// # Arguments
///
/// * `path` - The path to the annotation `.json` file.
///
/// # Returns
///
/// The parsed [`Annotation`].
pub fn read_annotation(path: impl AsRef<Path>) -> Result<Annotation, SceneError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let parsed: FrameAnnotation = serde_json::from_reader(BufReader::new(file))?;

    let base = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Annotation {
        base,
        camera: parsed.camera,
    })
}
