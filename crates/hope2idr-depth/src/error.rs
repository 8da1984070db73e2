use std::path::PathBuf;

/// An error type for depth estimation operations.
#[derive(Debug, thiserror::Error)]
pub enum DepthError {
    /// A converted scene has no images to run depth on.
    #[error("no images found in {0}")]
    EmptyScene(PathBuf),

    /// The model returned a different number of depth maps than images.
    #[error("the model returned {actual} depth maps for a batch of {expected} images")]
    BatchMismatch {
        /// Number of images in the batch.
        expected: usize,
        /// Number of depth maps returned.
        actual: usize,
    },

    /// Unrecognized compute device identifier.
    #[error("unknown device identifier: {0}")]
    InvalidDevice(String),

    /// Error to manipulate a file.
    #[error("failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode an image.
    #[error("failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// Error inside the depth model.
    #[error("depth model inference failed. {0}")]
    ModelError(#[from] candle_core::Error),

    /// Error to fetch model weights from the hub.
    #[error("failed to fetch model weights. {0}")]
    HubError(#[from] hf_hub::api::sync::ApiError),

    /// Error to reshape the model output.
    #[error("failed to reshape the depth output. {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    /// Error to write a depth array.
    #[error("failed to write the depth array. {0}")]
    NpyError(#[from] ndarray_npy::WriteNpyError),
}
