#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Per-frame annotation records and their JSON schema.
pub mod annotation;

/// Camera matrix composition for the IDR cameras archive.
pub mod camera;

/// Scene materialization and batch conversion.
pub mod convert;

/// Error types for the scene module.
pub mod error;

/// RGB image resolution for annotation base names.
pub mod resolve;

/// Deterministic frame enumeration and selection.
pub mod select;

pub use crate::convert::{convert_scene, convert_scenes, ConvertConfig};
pub use crate::error::SceneError;
