use std::path::PathBuf;

/// An error type for scene conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// No RGB image exists for an annotation base name.
    #[error("no RGB image found for base '{base}' in {scene_dir}")]
    MissingAsset {
        /// Annotation base name that failed to resolve.
        base: String,
        /// Scene directory that was searched.
        scene_dir: PathBuf,
    },

    /// A source scene contains no annotation files.
    #[error("no annotation files found in {0}")]
    EmptyScene(PathBuf),

    /// A requested source scene directory does not exist.
    #[error("scene directory not found: {0}")]
    SourceNotFound(PathBuf),

    /// Error to manipulate a file.
    #[error("failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to parse an annotation file.
    #[error("failed to parse the annotation file. {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error to write the cameras archive.
    #[error("failed to write the cameras archive. {0}")]
    NpzError(#[from] ndarray_npy::WriteNpzError),
}
