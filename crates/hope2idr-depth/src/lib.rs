#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Depth Anything V2 estimator backed by candle.
pub mod depth_anything;

/// Batched depth inference over a converted scene.
pub mod driver;

/// Error types for the depth module.
pub mod error;

/// Depth pass definitions and the estimator capability trait.
pub mod estimator;

pub use crate::depth_anything::{parse_device, DepthAnything, DepthAnythingOptions};
pub use crate::driver::{list_scene_images, run_depth_pass, BATCH_SIZE};
pub use crate::error::DepthError;
pub use crate::estimator::{DepthEstimator, DepthPass};
